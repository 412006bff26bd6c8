#![forbid(unsafe_code)]

use serde::Serialize;

/// Read-only snapshot of a subtree, detached from the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub id: String,
    pub kind: &'static str,
    pub title: String,
    pub importance: u32,
    pub progress: u32,
    pub completed: bool,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    pub current: bool,
    pub focus: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overview: Vec<OverviewView>,
    pub children: Vec<TreeView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverviewView {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl TreeView {
    pub fn find(&self, id: &str) -> Option<&TreeView> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Ids in pre-order.
    pub fn ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        fn collect(view: &TreeView, out: &mut Vec<String>) {
            out.push(view.id.clone());
            for child in &view.children {
                collect(child, out);
            }
        }
        collect(self, &mut out);
        out
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
