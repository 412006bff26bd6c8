#![forbid(unsafe_code)]

mod error;
mod focus;
mod importance;
mod overview;
mod progress;
mod snapshot;
mod tree;
mod types;

pub use error::EngineError;
pub use types::*;

use ql_core::ids::NodeId;
use ql_core::model::{IMPORTANCE_TOTAL, NodeKind};
use std::collections::BTreeMap;

/// Owns every node of one quest. The root quest is created with the store and lives as long
/// as it does.
#[derive(Clone, Debug)]
pub struct GoalStore {
    nodes: BTreeMap<NodeId, GoalNode>,
    root: NodeId,
    counters: [u64; 4],
    next_overview_id: u64,
}

impl GoalStore {
    pub fn new(title: &str) -> Result<Self, EngineError> {
        let title = normalize_title(title)?;
        let mut counters = [0u64; 4];
        counters[NodeKind::Quest.ordinal()] = 1;
        let root = NodeId::for_kind(NodeKind::Quest, 1);

        let mut node = GoalNode::new(
            root.clone(),
            None,
            NodeDraft {
                kind: NodeKind::Quest,
                title,
                weight: 1,
            },
        );
        node.importance = IMPORTANCE_TOTAL;
        node.current = true;

        let mut nodes = BTreeMap::new();
        nodes.insert(root.clone(), node);
        Ok(Self {
            nodes,
            root,
            counters,
            next_overview_id: 0,
        })
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    pub fn get(&self, id: &NodeId) -> Result<&GoalNode, EngineError> {
        self.nodes
            .get(id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoalNode> {
        self.nodes.values()
    }

    pub(crate) fn get_mut(&mut self, id: &NodeId) -> Result<&mut GoalNode, EngineError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    fn next_id(&mut self, kind: NodeKind) -> NodeId {
        let counter = &mut self.counters[kind.ordinal()];
        *counter += 1;
        NodeId::for_kind(kind, *counter)
    }
}

pub(crate) fn normalize_title(raw: &str) -> Result<String, EngineError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidOperation("title must not be empty"));
    }
    Ok(trimmed.to_string())
}
