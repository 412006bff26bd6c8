#![forbid(unsafe_code)]

use super::*;
use ql_core::split::{equal_share_percent, rounded_percent};

impl GoalStore {
    /// `(done_weight, total_weight)` over every task at or below `id`.
    pub fn task_tally(&self, id: &NodeId) -> Result<(u64, u64), EngineError> {
        let node = self.get(id)?;
        if node.is_task() {
            let weight = u64::from(node.weight);
            let done = if node.completed { weight } else { 0 };
            return Ok((done, weight));
        }
        let mut done = 0u64;
        let mut total = 0u64;
        for child in &node.children {
            let (child_done, child_total) = self.task_tally(child)?;
            done += child_done;
            total += child_total;
        }
        Ok((done, total))
    }

    /// Recomputes `id` and every ancestor, bottom-up. Task progress is never derived.
    pub fn recompute_progress(&mut self, id: &NodeId) -> Result<(), EngineError> {
        for node_id in self.ancestors(id)? {
            if self.get(&node_id)?.is_task() {
                continue;
            }
            let progress = self.derived_progress(&node_id)?;
            let node = self.get_mut(&node_id)?;
            node.progress = progress;
            node.completed = progress == 100;
        }
        Ok(())
    }

    pub fn progress_breakdown(&self) -> Result<Vec<MilestoneShare>, EngineError> {
        let milestones = self.get(&self.root)?.children.clone();
        let count = milestones.len() as f64;
        milestones
            .into_iter()
            .map(|milestone_id| {
                let (done_weight, total_weight) = self.task_tally(&milestone_id)?;
                let share = if total_weight == 0 {
                    0.0
                } else {
                    100.0 * done_weight as f64 / total_weight as f64 / count
                };
                Ok(MilestoneShare {
                    milestone_id,
                    done_weight,
                    total_weight,
                    share,
                })
            })
            .collect()
    }

    pub(crate) fn set_task_completion(
        &mut self,
        id: &NodeId,
        completed: bool,
    ) -> Result<(), EngineError> {
        let node = self.get_mut(id)?;
        if !node.is_task() {
            return Err(EngineError::InvalidOperation(
                "only tasks can be completed directly",
            ));
        }
        node.completed = completed;
        node.progress = if completed { 100 } else { 0 };
        Ok(())
    }

    fn derived_progress(&self, id: &NodeId) -> Result<u32, EngineError> {
        let node = self.get(id)?;
        match node.kind {
            NodeKind::Task => Ok(node.progress),
            // Equal share per milestone; milestone importance plays no part here.
            NodeKind::Quest => {
                let tallies = node
                    .children
                    .iter()
                    .map(|child| self.task_tally(child))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(equal_share_percent(&tallies))
            }
            NodeKind::Milestone | NodeKind::Subgoal => {
                let (done, total) = self.task_tally(id)?;
                Ok(rounded_percent(done, total))
            }
        }
    }
}
