#![forbid(unsafe_code)]

use ql_core::ids::NodeId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddNodeRequest {
    pub parent_id: NodeId,
    pub title: String,
    /// Tasks only; clamped into the task weight bounds.
    pub weight: Option<i64>,
}

impl AddNodeRequest {
    pub fn new(parent_id: &NodeId, title: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.clone(),
            title: title.into(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MilestoneShare {
    pub milestone_id: NodeId,
    pub done_weight: u64,
    pub total_weight: u64,
    /// Percentage points of quest progress this milestone currently contributes.
    pub share: f64,
}
