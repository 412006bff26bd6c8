#![forbid(unsafe_code)]

use super::*;
use serde_json::json;

impl GoalEngine {
    /// Replaces the child order of `parent_id`. Must be a permutation of the current children.
    pub fn reorder_siblings(
        &mut self,
        parent_id: &NodeId,
        order: &[NodeId],
    ) -> Result<OpResult, EngineError> {
        self.reorder_siblings_inner(parent_id, order)
            .inspect_err(|err| log_rejected("reorder_siblings", err))
    }

    /// Moves `id` to `index` within its sibling sequence; an index past the end is
    /// `OutOfRange`.
    pub fn move_node(&mut self, id: &NodeId, index: usize) -> Result<OpResult, EngineError> {
        self.move_node_inner(id, index)
            .inspect_err(|err| log_rejected("move_node", err))
    }

    fn reorder_siblings_inner(
        &mut self,
        parent_id: &NodeId,
        order: &[NodeId],
    ) -> Result<OpResult, EngineError> {
        self.store.reorder(parent_id, order)?;
        self.refresh_chain(parent_id)?;
        let payload = json!({
            "order": order.iter().map(NodeId::as_str).collect::<Vec<_>>(),
        });
        self.commit("siblings_reordered", parent_id, payload, None)
    }

    fn move_node_inner(&mut self, id: &NodeId, index: usize) -> Result<OpResult, EngineError> {
        let from = self.store.index_in_parent(id)?;
        self.store.move_to(id, index)?;
        let parent_id = self.store.parent_of(id)?;
        self.refresh_chain(&parent_id)?;
        let payload = json!({ "from": from, "to": index, "parent": parent_id.as_str() });
        self.commit("node_moved", id, payload, None)
    }
}
