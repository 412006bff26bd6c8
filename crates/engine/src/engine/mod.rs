#![forbid(unsafe_code)]

mod completion;
mod importance;
mod journal;
mod nodes;
mod order;
mod overview;
mod status;

pub use journal::EventJournal;

use crate::config::EngineConfig;
use crate::store::{EngineError, EventRow, FocusState, GoalNode, GoalStore, MilestoneShare, TreeView};
use crate::transition::{TransitionBoard, TransitionTicket};
use ql_core::ids::NodeId;
use tracing::{debug, info, warn};

/// Outcome of one accepted mutation.
#[derive(Clone, Debug)]
pub struct OpResult {
    pub revision: u64,
    pub event: EventRow,
    /// The whole quest after the mutation; derived progress reaches the root on every change.
    pub tree: TreeView,
    pub transition: Option<TransitionTicket>,
}

/// Single owner of a quest and the only way to mutate it.
///
/// Every public mutation validates first, then applies the structural change, re-splits
/// importance where a child set changed, recomputes progress along the affected ancestor
/// chain and finally refreshes the focus markers of every sibling set on that chain.
#[derive(Debug)]
pub struct GoalEngine {
    store: GoalStore,
    config: EngineConfig,
    journal: EventJournal,
    transitions: TransitionBoard,
    revision: u64,
}

impl GoalEngine {
    pub fn new(title: &str) -> Result<Self, EngineError> {
        Self::with_config(title, EngineConfig::default())
    }

    pub fn with_config(title: &str, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let store = GoalStore::new(title)?;
        info!(
            root = %store.root_id(),
            freeze_policy = config.freeze_policy.as_str(),
            "goal engine created"
        );
        Ok(Self {
            store,
            journal: EventJournal::new(config.event_log_capacity),
            config,
            transitions: TransitionBoard::default(),
            revision: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn root_id(&self) -> &NodeId {
        self.store.root_id()
    }

    pub fn store(&self) -> &GoalStore {
        &self.store
    }

    pub fn get(&self, id: &NodeId) -> Result<&GoalNode, EngineError> {
        self.store.get(id)
    }

    /// Validates a caller-supplied id and checks that it names a live node.
    pub fn node_id(&self, raw: &str) -> Result<NodeId, EngineError> {
        let id = NodeId::try_new(raw.trim())?;
        if !self.store.contains(&id) {
            return Err(EngineError::NotFound(id));
        }
        Ok(id)
    }

    pub fn get_tree(&self, id: &NodeId) -> Result<TreeView, EngineError> {
        self.store.view(id, self.config.freeze_policy)
    }

    pub fn current_of(&self, parent_id: &NodeId) -> Result<Option<NodeId>, EngineError> {
        self.store.current_child(parent_id)
    }

    pub fn focus_state(&self, id: &NodeId) -> Result<FocusState, EngineError> {
        self.store.focus_state(id, self.config.freeze_policy)
    }

    pub fn focus_path(&self) -> Result<Vec<NodeId>, EngineError> {
        self.store.focus_path()
    }

    pub fn progress_breakdown(&self) -> Result<Vec<MilestoneShare>, EngineError> {
        self.store.progress_breakdown()
    }

    pub fn events_since(&self, after_seq: u64, limit: usize) -> Vec<EventRow> {
        self.journal.since(after_seq, limit)
    }

    /// Progress bottom-up from `from` to the root, then focus markers on every sibling set
    /// along the same chain.
    fn refresh_chain(&mut self, from: &NodeId) -> Result<(), EngineError> {
        let chain = self.store.ancestors(from)?;
        self.store.recompute_progress(from)?;
        for id in &chain {
            if self.store.get(id)?.children.is_empty() {
                continue;
            }
            self.store.recompute_current(id, self.config.freeze_policy)?;
        }
        self.store.recompute_root_current()
    }

    fn start_transition(
        &mut self,
        parent_id: &NodeId,
        before: &[(NodeId, u32)],
    ) -> Result<Option<TransitionTicket>, EngineError> {
        let after = self.store.sibling_importances(parent_id)?;
        if after.is_empty() || after.as_slice() == before {
            return Ok(None);
        }
        Ok(Some(self.transitions.start(
            parent_id.clone(),
            before,
            after,
            self.config.animation_duration_ms,
        )))
    }

    fn commit(
        &mut self,
        event_type: &'static str,
        node_id: &NodeId,
        payload: serde_json::Value,
        transition: Option<TransitionTicket>,
    ) -> Result<OpResult, EngineError> {
        self.revision += 1;
        let event = self.journal.append(
            self.revision,
            event_type,
            Some(node_id.clone()),
            payload.to_string(),
        );
        debug!(
            event_type,
            node_id = %node_id,
            revision = self.revision,
            "mutation applied"
        );
        let root = self.store.root_id().clone();
        let tree = self.get_tree(&root)?;
        Ok(OpResult {
            revision: self.revision,
            event,
            tree,
            transition,
        })
    }
}

fn log_rejected(op: &'static str, err: &EngineError) {
    warn!(op, error = %err, "mutation rejected");
}
