#![forbid(unsafe_code)]

use super::*;
use ql_core::model::{NodeStatus, clamp_weight};
use std::collections::BTreeSet;

impl GoalStore {
    /// Appends a new node to `parent_id`'s child sequence.
    pub fn insert(&mut self, parent_id: &NodeId, draft: NodeDraft) -> Result<NodeId, EngineError> {
        let parent = self.get(parent_id)?;
        match parent.kind.child_kind() {
            Some(kind) if kind == draft.kind => {}
            Some(_) => {
                return Err(EngineError::InvalidOperation(
                    "child kind does not match the parent tier",
                ));
            }
            None => return Err(EngineError::InvalidOperation("tasks cannot hold children")),
        }
        let title = normalize_title(&draft.title)?;
        let weight = if draft.kind == NodeKind::Task {
            clamp_weight(i64::from(draft.weight))
        } else {
            1
        };

        let id = self.next_id(draft.kind);
        let node = GoalNode::new(
            id.clone(),
            Some(parent_id.clone()),
            NodeDraft {
                kind: draft.kind,
                title,
                weight,
            },
        );
        self.nodes.insert(id.clone(), node);
        self.get_mut(parent_id)?.children.push(id.clone());
        Ok(id)
    }

    /// Deletes `id` with its whole subtree. Returns the removed ids in pre-order.
    pub fn remove(&mut self, id: &NodeId) -> Result<Vec<NodeId>, EngineError> {
        let Some(parent_id) = self.get(id)?.parent_id.clone() else {
            return Err(EngineError::InvalidOperation(
                "the root quest cannot be removed",
            ));
        };
        let removed = self.subtree_ids(id)?;
        for removed_id in &removed {
            self.nodes.remove(removed_id);
        }
        self.get_mut(&parent_id)?
            .children
            .retain(|child| child != id);
        Ok(removed)
    }

    /// Replaces the child sequence of `parent_id` with a permutation of itself.
    pub fn reorder(&mut self, parent_id: &NodeId, order: &[NodeId]) -> Result<(), EngineError> {
        let parent = self.get(parent_id)?;
        let current: BTreeSet<&NodeId> = parent.children.iter().collect();
        let proposed: BTreeSet<&NodeId> = order.iter().collect();
        if order.len() != parent.children.len()
            || proposed.len() != order.len()
            || current != proposed
        {
            return Err(EngineError::InvalidOperation(
                "new order must be a permutation of the current children",
            ));
        }
        self.get_mut(parent_id)?.children = order.to_vec();
        Ok(())
    }

    /// Moves `id` to position `index` within its own sibling sequence.
    pub fn move_to(&mut self, id: &NodeId, index: usize) -> Result<(), EngineError> {
        let parent_id = self.parent_of(id)?;
        let from = self.index_in_parent(id)?;
        let count = self.get(&parent_id)?.children.len();
        if index >= count {
            return Err(EngineError::OutOfRange {
                what: "sibling index",
                value: i64::try_from(index).unwrap_or(i64::MAX),
                max: i64::try_from(count).unwrap_or(i64::MAX) - 1,
            });
        }
        let children = &mut self.get_mut(&parent_id)?.children;
        let moved = children.remove(from);
        children.insert(index, moved);
        Ok(())
    }

    /// `id` and all of its descendants, pre-order.
    pub fn subtree_ids(&self, id: &NodeId) -> Result<Vec<NodeId>, EngineError> {
        let mut out = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(next) = stack.pop() {
            let node = self.get(&next)?;
            stack.extend(node.children.iter().rev().cloned());
            out.push(next);
        }
        Ok(out)
    }

    /// `id` followed by each ancestor up to and including the root.
    pub fn ancestors(&self, id: &NodeId) -> Result<Vec<NodeId>, EngineError> {
        let mut out = Vec::new();
        let mut cursor = Some(id.clone());
        while let Some(next) = cursor {
            cursor = self.get(&next)?.parent_id.clone();
            out.push(next);
        }
        Ok(out)
    }

    pub fn children_of(&self, id: &NodeId) -> Result<&[NodeId], EngineError> {
        Ok(&self.get(id)?.children)
    }

    pub fn parent_of(&self, id: &NodeId) -> Result<NodeId, EngineError> {
        self.get(id)?
            .parent_id
            .clone()
            .ok_or(EngineError::InvalidOperation(
                "the root quest has no sibling sequence",
            ))
    }

    pub fn index_in_parent(&self, id: &NodeId) -> Result<usize, EngineError> {
        let parent_id = self.parent_of(id)?;
        self.get(&parent_id)?
            .children
            .iter()
            .position(|child| child == id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    pub(crate) fn set_title(&mut self, id: &NodeId, raw: &str) -> Result<(), EngineError> {
        let title = normalize_title(raw)?;
        self.get_mut(id)?.title = title;
        Ok(())
    }

    pub(crate) fn set_weight(&mut self, id: &NodeId, weight: i64) -> Result<u32, EngineError> {
        let node = self.get_mut(id)?;
        if !node.is_task() {
            return Err(EngineError::InvalidOperation("weight applies to tasks only"));
        }
        node.weight = clamp_weight(weight);
        Ok(node.weight)
    }

    pub(crate) fn set_status(&mut self, id: &NodeId, status: NodeStatus) -> Result<(), EngineError> {
        let node = self.get_mut(id)?;
        if node.kind != NodeKind::Milestone {
            return Err(EngineError::InvalidOperation("status applies to milestones only"));
        }
        node.status = status;
        Ok(())
    }
}
