#![forbid(unsafe_code)]

use super::*;
use crate::config::FreezePolicy;

impl GoalStore {
    /// Marks the first incomplete, eligible child of `parent_id` as current and clears the
    /// marker everywhere else in the sequence.
    pub fn recompute_current(
        &mut self,
        parent_id: &NodeId,
        policy: FreezePolicy,
    ) -> Result<Option<NodeId>, EngineError> {
        let children = self.get(parent_id)?.children.clone();
        let mut chosen = None;
        for child_id in &children {
            let child = self.get(child_id)?;
            if !child.completed && policy.admits(child.status) {
                chosen = Some(child_id.clone());
                break;
            }
        }
        for child_id in &children {
            self.get_mut(child_id)?.current = chosen.as_ref() == Some(child_id);
        }
        Ok(chosen)
    }

    /// The root is a sequence of one: current until the whole quest is done.
    pub(crate) fn recompute_root_current(&mut self) -> Result<(), EngineError> {
        let root = self.root.clone();
        let node = self.get_mut(&root)?;
        node.current = !node.completed;
        Ok(())
    }

    pub fn current_child(&self, parent_id: &NodeId) -> Result<Option<NodeId>, EngineError> {
        for child_id in &self.get(parent_id)?.children {
            if self.get(child_id)?.current {
                return Ok(Some(child_id.clone()));
            }
        }
        Ok(None)
    }

    pub fn focus_state(&self, id: &NodeId, policy: FreezePolicy) -> Result<FocusState, EngineError> {
        let node = self.get(id)?;
        Ok(if node.completed {
            FocusState::Completed
        } else if node.current {
            FocusState::Current
        } else if !policy.admits(node.status) {
            FocusState::Ineligible
        } else {
            FocusState::NotYetReached
        })
    }

    /// Current milestone, then its current subgoal, then that subgoal's current task.
    pub fn focus_path(&self) -> Result<Vec<NodeId>, EngineError> {
        let mut path = Vec::new();
        let mut cursor = self.root.clone();
        while let Some(next) = self.current_child(&cursor)? {
            path.push(next.clone());
            cursor = next;
        }
        Ok(path)
    }
}
