#![forbid(unsafe_code)]

use super::*;
use crate::config::FreezePolicy;

impl GoalStore {
    pub fn view(&self, id: &NodeId, policy: FreezePolicy) -> Result<TreeView, EngineError> {
        let node = self.get(id)?;
        let children = node
            .children
            .iter()
            .map(|child| self.view(child, policy))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TreeView {
            id: node.id.as_str().to_string(),
            kind: node.kind.as_str(),
            title: node.title.clone(),
            importance: node.importance,
            progress: node.progress,
            completed: node.completed,
            status: node.status.as_str(),
            weight: node.is_task().then_some(node.weight),
            current: node.current,
            focus: self.focus_state(id, policy)?.as_str(),
            overview: node
                .overview
                .iter()
                .map(|item| OverviewView {
                    id: item.id,
                    title: item.title.clone(),
                    done: item.done,
                })
                .collect(),
            children,
        })
    }
}
