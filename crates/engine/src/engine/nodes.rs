#![forbid(unsafe_code)]

use super::*;
use crate::store::{AddNodeRequest, NodeDraft};
use ql_core::model::{NodeKind, clamp_weight};
use serde_json::json;

impl GoalEngine {
    /// Appends a node under `request.parent_id`; its kind is the parent's child tier.
    /// Importance of the new sibling set is re-split evenly.
    pub fn add_node(&mut self, request: AddNodeRequest) -> Result<OpResult, EngineError> {
        self.add_node_inner(request)
            .inspect_err(|err| log_rejected("add_node", err))
    }

    /// Deletes `id` and its subtree, then re-splits the surviving siblings evenly.
    pub fn delete_node(&mut self, id: &NodeId) -> Result<OpResult, EngineError> {
        self.delete_node_inner(id)
            .inspect_err(|err| log_rejected("delete_node", err))
    }

    pub fn set_title(&mut self, id: &NodeId, title: &str) -> Result<OpResult, EngineError> {
        self.set_title_inner(id, title)
            .inspect_err(|err| log_rejected("set_title", err))
    }

    /// Task weight, clamped into `1..=1000`.
    pub fn set_weight(&mut self, id: &NodeId, weight: i64) -> Result<OpResult, EngineError> {
        self.set_weight_inner(id, weight)
            .inspect_err(|err| log_rejected("set_weight", err))
    }

    fn add_node_inner(&mut self, request: AddNodeRequest) -> Result<OpResult, EngineError> {
        let AddNodeRequest {
            parent_id,
            title,
            weight,
        } = request;

        let kind = self
            .store
            .get(&parent_id)?
            .kind
            .child_kind()
            .ok_or(EngineError::InvalidOperation("tasks cannot hold children"))?;
        if weight.is_some() && kind != NodeKind::Task {
            return Err(EngineError::InvalidOperation("weight applies to tasks only"));
        }

        let before = self.store.sibling_importances(&parent_id)?;
        let id = self.store.insert(
            &parent_id,
            NodeDraft {
                kind,
                title,
                weight: weight.map(clamp_weight).unwrap_or(1),
            },
        )?;
        self.store.distribute_evenly(&parent_id)?;
        self.refresh_chain(&parent_id)?;
        let transition = self.start_transition(&parent_id, &before)?;

        let node = self.store.get(&id)?;
        let payload = json!({
            "parent": parent_id.as_str(),
            "kind": node.kind.as_str(),
            "title": node.title,
            "weight": node.is_task().then_some(node.weight),
        });
        self.commit("node_added", &id, payload, transition)
    }

    fn delete_node_inner(&mut self, id: &NodeId) -> Result<OpResult, EngineError> {
        let parent_id = self.store.parent_of(id)?;
        let before = self.store.sibling_importances(&parent_id)?;

        let removed = self.store.remove(id)?;
        self.store.distribute_evenly(&parent_id)?;
        self.refresh_chain(&parent_id)?;
        let store = &self.store;
        self.transitions.retain_parents(|parent| store.contains(parent));
        let transition = self.start_transition(&parent_id, &before)?;

        let payload = json!({
            "parent": parent_id.as_str(),
            "removed": removed.iter().map(NodeId::as_str).collect::<Vec<_>>(),
            "removed_count": removed.len(),
        });
        self.commit("node_deleted", id, payload, transition)
    }

    fn set_title_inner(&mut self, id: &NodeId, title: &str) -> Result<OpResult, EngineError> {
        self.store.set_title(id, title)?;
        let payload = json!({ "title": self.store.get(id)?.title });
        self.commit("title_set", id, payload, None)
    }

    fn set_weight_inner(&mut self, id: &NodeId, weight: i64) -> Result<OpResult, EngineError> {
        let applied = self.store.set_weight(id, weight)?;
        self.refresh_chain(id)?;
        let payload = json!({ "requested": weight, "applied": applied });
        self.commit("weight_set", id, payload, None)
    }
}
