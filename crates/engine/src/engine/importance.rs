#![forbid(unsafe_code)]

use super::*;
use crate::transition::{ImportanceTransition, TransitionFrame, TransitionPoll};
use serde_json::json;

impl GoalEngine {
    /// Pins `id` to `value` (clamped to 0..=100) and re-splits the remainder over its
    /// siblings, remainder on the last of them. The returned ticket drives the eased
    /// transition for renderers; the tree already holds the converged values.
    pub fn set_importance(&mut self, id: &NodeId, value: i64) -> Result<OpResult, EngineError> {
        self.set_importance_inner(id, value)
            .inspect_err(|err| log_rejected("set_importance", err))
    }

    pub fn transition(&self, ticket: &TransitionTicket) -> Option<&ImportanceTransition> {
        self.transitions.get(ticket)
    }

    pub fn poll_transition(&mut self, ticket: &TransitionTicket, elapsed_ms: u64) -> TransitionPoll {
        self.transitions.poll(ticket, elapsed_ms)
    }

    /// Every frame at the configured frame interval, ending with the finished frame. The
    /// transition counts as drawn to its end afterwards. `None` once the ticket is stale.
    pub fn transition_frames(&mut self, ticket: &TransitionTicket) -> Option<Vec<TransitionFrame>> {
        self.transitions.play(ticket, self.config.frame_interval_ms)
    }

    fn set_importance_inner(&mut self, id: &NodeId, value: i64) -> Result<OpResult, EngineError> {
        let parent_id = self.store.parent_of(id)?;
        let before = self.store.sibling_importances(&parent_id)?;
        let applied = self.store.set_importance(id, value)?;
        let transition = self.start_transition(&parent_id, &before)?;

        let siblings = self
            .store
            .sibling_importances(&parent_id)?
            .into_iter()
            .map(|(sibling, importance)| json!({ "id": sibling.as_str(), "importance": importance }))
            .collect::<Vec<_>>();
        let payload = json!({
            "requested": value,
            "applied": applied,
            "siblings": siblings,
        });
        self.commit("importance_set", id, payload, transition)
    }
}
