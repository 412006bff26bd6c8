#![forbid(unsafe_code)]

use super::*;
use serde_json::json;

impl GoalEngine {
    /// Flips a task between done and not done. Interior nodes only ever change through
    /// their tasks.
    pub fn toggle_complete(&mut self, id: &NodeId) -> Result<OpResult, EngineError> {
        self.toggle_complete_inner(id)
            .inspect_err(|err| log_rejected("toggle_complete", err))
    }

    fn toggle_complete_inner(&mut self, id: &NodeId) -> Result<OpResult, EngineError> {
        let completed = !self.store.get(id)?.completed;
        self.store.set_task_completion(id, completed)?;
        self.refresh_chain(id)?;

        let root_progress = self.store.get(self.store.root_id())?.progress;
        let payload = json!({
            "completed": completed,
            "quest_progress": root_progress,
        });
        self.commit("completion_toggled", id, payload, None)
    }
}
