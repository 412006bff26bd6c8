#![forbid(unsafe_code)]

use ql_core::ids::NodeId;
use ql_core::model::{NodeKind, NodeStatus};

/// Milestone checklist entry; never part of progress, completion or focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverviewItem {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalNode {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
    pub kind: NodeKind,
    pub title: String,
    pub importance: u32,
    pub progress: u32,
    pub completed: bool,
    pub status: NodeStatus,
    pub weight: u32,
    pub current: bool,
    pub children: Vec<NodeId>,
    pub overview: Vec<OverviewItem>,
}

impl GoalNode {
    pub(crate) fn new(id: NodeId, parent_id: Option<NodeId>, draft: NodeDraft) -> Self {
        Self {
            id,
            parent_id,
            kind: draft.kind,
            title: draft.title,
            importance: 0,
            progress: 0,
            completed: false,
            status: NodeStatus::Active,
            weight: draft.weight,
            current: false,
            children: Vec::new(),
            overview: Vec::new(),
        }
    }

    /// Tasks are the only nodes whose completion is set directly.
    pub fn is_task(&self) -> bool {
        self.kind == NodeKind::Task
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDraft {
    pub kind: NodeKind,
    pub title: String,
    pub weight: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusState {
    NotYetReached,
    Current,
    Completed,
    Ineligible,
}

impl FocusState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotYetReached => "not_yet_reached",
            Self::Current => "current",
            Self::Completed => "completed",
            Self::Ineligible => "ineligible",
        }
    }
}
