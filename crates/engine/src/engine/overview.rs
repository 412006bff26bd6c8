#![forbid(unsafe_code)]

use super::*;
use serde_json::json;

// Overview items are a milestone's own checklist. They never feed progress or focus, so none
// of these operations refresh derived state.
impl GoalEngine {
    /// Returns the new item id alongside the usual mutation outcome.
    pub fn add_overview_item(
        &mut self,
        milestone_id: &NodeId,
        title: &str,
    ) -> Result<(u64, OpResult), EngineError> {
        self.add_overview_item_inner(milestone_id, title)
            .inspect_err(|err| log_rejected("add_overview_item", err))
    }

    pub fn toggle_overview_item(
        &mut self,
        milestone_id: &NodeId,
        item_id: u64,
    ) -> Result<OpResult, EngineError> {
        self.toggle_overview_item_inner(milestone_id, item_id)
            .inspect_err(|err| log_rejected("toggle_overview_item", err))
    }

    pub fn remove_overview_item(
        &mut self,
        milestone_id: &NodeId,
        item_id: u64,
    ) -> Result<OpResult, EngineError> {
        self.remove_overview_item_inner(milestone_id, item_id)
            .inspect_err(|err| log_rejected("remove_overview_item", err))
    }

    fn add_overview_item_inner(
        &mut self,
        milestone_id: &NodeId,
        title: &str,
    ) -> Result<(u64, OpResult), EngineError> {
        let item_id = self.store.add_overview_item(milestone_id, title)?;
        let payload = json!({ "item": item_id, "title": title.trim() });
        let result = self.commit("overview_added", milestone_id, payload, None)?;
        Ok((item_id, result))
    }

    fn toggle_overview_item_inner(
        &mut self,
        milestone_id: &NodeId,
        item_id: u64,
    ) -> Result<OpResult, EngineError> {
        let done = self.store.toggle_overview_item(milestone_id, item_id)?;
        let payload = json!({ "item": item_id, "done": done });
        self.commit("overview_toggled", milestone_id, payload, None)
    }

    fn remove_overview_item_inner(
        &mut self,
        milestone_id: &NodeId,
        item_id: u64,
    ) -> Result<OpResult, EngineError> {
        self.store.remove_overview_item(milestone_id, item_id)?;
        let payload = json!({ "item": item_id });
        self.commit("overview_removed", milestone_id, payload, None)
    }
}
