#![forbid(unsafe_code)]

use super::*;

impl GoalStore {
    pub(crate) fn add_overview_item(
        &mut self,
        milestone_id: &NodeId,
        title: &str,
    ) -> Result<u64, EngineError> {
        let title = normalize_title(title)?;
        ensure_milestone(self.get(milestone_id)?)?;
        self.next_overview_id += 1;
        let id = self.next_overview_id;
        self.get_mut(milestone_id)?.overview.push(OverviewItem {
            id,
            title,
            done: false,
        });
        Ok(id)
    }

    pub(crate) fn toggle_overview_item(
        &mut self,
        milestone_id: &NodeId,
        item_id: u64,
    ) -> Result<bool, EngineError> {
        let node = self.get_mut(milestone_id)?;
        ensure_milestone(node)?;
        let item = node
            .overview
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| EngineError::OverviewItemNotFound {
                milestone: milestone_id.clone(),
                item: item_id,
            })?;
        item.done = !item.done;
        Ok(item.done)
    }

    pub(crate) fn remove_overview_item(
        &mut self,
        milestone_id: &NodeId,
        item_id: u64,
    ) -> Result<(), EngineError> {
        let node = self.get_mut(milestone_id)?;
        ensure_milestone(node)?;
        let before = node.overview.len();
        node.overview.retain(|item| item.id != item_id);
        if node.overview.len() == before {
            return Err(EngineError::OverviewItemNotFound {
                milestone: milestone_id.clone(),
                item: item_id,
            });
        }
        Ok(())
    }
}

fn ensure_milestone(node: &GoalNode) -> Result<(), EngineError> {
    if node.kind != NodeKind::Milestone {
        return Err(EngineError::InvalidOperation(
            "overview items belong to milestones only",
        ));
    }
    Ok(())
}
