#![forbid(unsafe_code)]

use super::*;
use ql_core::model::NodeStatus;
use serde_json::json;

impl GoalEngine {
    /// Milestones only. Skipping moves the focus on without touching progress; freezing is
    /// advisory unless the engine runs with `FreezePolicy::Exclude`.
    pub fn set_status(&mut self, id: &NodeId, status: NodeStatus) -> Result<OpResult, EngineError> {
        self.set_status_inner(id, status)
            .inspect_err(|err| log_rejected("set_status", err))
    }

    fn set_status_inner(&mut self, id: &NodeId, status: NodeStatus) -> Result<OpResult, EngineError> {
        let previous = self.store.get(id)?.status;
        self.store.set_status(id, status)?;
        self.refresh_chain(id)?;
        let payload = json!({
            "from": previous.as_str(),
            "to": status.as_str(),
        });
        self.commit("status_set", id, payload, None)
    }
}
