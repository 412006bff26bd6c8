#![forbid(unsafe_code)]

use super::*;
use ql_core::model::clamp_importance;
use ql_core::split::{redistribute, split_evenly};

impl GoalStore {
    pub fn sibling_importances(&self, parent_id: &NodeId) -> Result<Vec<(NodeId, u32)>, EngineError> {
        let parent = self.get(parent_id)?;
        parent
            .children
            .iter()
            .map(|child| Ok((child.clone(), self.get(child)?.importance)))
            .collect()
    }

    /// Pins `id` to `value` (clamped to 0..=100) and re-splits the rest over its siblings.
    ///
    /// A sole child can only hold the full total; any other value is rejected because no
    /// sibling is left to take the remainder.
    pub fn set_importance(&mut self, id: &NodeId, value: i64) -> Result<u32, EngineError> {
        let parent_id = self.parent_of(id)?;
        let siblings = self.get(&parent_id)?.children.clone();
        let index = self.index_in_parent(id)?;
        let applied = clamp_importance(value);
        let values = redistribute(siblings.len(), index, applied, IMPORTANCE_TOTAL)?;
        self.apply_importances(&siblings, &values)?;
        Ok(applied)
    }

    /// Fresh even split over all children of `parent_id`; a childless parent is left alone.
    pub fn distribute_evenly(&mut self, parent_id: &NodeId) -> Result<(), EngineError> {
        let siblings = self.get(parent_id)?.children.clone();
        let values = split_evenly(IMPORTANCE_TOTAL, siblings.len());
        self.apply_importances(&siblings, &values)
    }

    pub fn importance_total(&self, parent_id: &NodeId) -> Result<u32, EngineError> {
        Ok(self
            .sibling_importances(parent_id)?
            .iter()
            .map(|(_, value)| *value)
            .sum())
    }

    fn apply_importances(&mut self, ids: &[NodeId], values: &[u32]) -> Result<(), EngineError> {
        for (id, value) in ids.iter().zip(values) {
            self.get_mut(id)?.importance = *value;
        }
        Ok(())
    }
}
