#![forbid(unsafe_code)]

mod config;
mod engine;
mod store;
mod transition;

pub use config::{
    ANIMATION_MS_ENV, ConfigError, EVENT_LOG_CAPACITY_ENV, EngineConfig, FRAME_MS_ENV,
    FREEZE_POLICY_ENV, FreezePolicy,
};
pub use engine::{EventJournal, GoalEngine, OpResult};
pub use store::*;
pub use transition::*;

pub use ql_core::ids::{NodeId, NodeIdError};
pub use ql_core::model::{NodeKind, NodeStatus};
