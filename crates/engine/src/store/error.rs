#![forbid(unsafe_code)]

use crate::config::ConfigError;
use ql_core::ids::{NodeId, NodeIdError};
use ql_core::split::SplitError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    NotFound(NodeId),
    InvalidOperation(&'static str),
    OutOfRange {
        what: &'static str,
        value: i64,
        max: i64,
    },
    InvalidId(NodeIdError),
    /// Milestone checklist entry that does not exist (or no longer does).
    OverviewItemNotFound { milestone: NodeId, item: u64 },
    InvalidConfig(ConfigError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "not found: {id}"),
            Self::InvalidOperation(message) => write!(f, "invalid operation: {message}"),
            Self::OutOfRange { what, value, max } => {
                write!(f, "{what} out of range (value={value}, max={max})")
            }
            Self::InvalidId(err) => write!(f, "invalid id: {}", err.message()),
            Self::OverviewItemNotFound { milestone, item } => {
                write!(f, "overview item {item} not found on {milestone}")
            }
            Self::InvalidConfig(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<NodeIdError> for EngineError {
    fn from(value: NodeIdError) -> Self {
        Self::InvalidId(value)
    }
}

impl From<ConfigError> for EngineError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfig(value)
    }
}

impl From<SplitError> for EngineError {
    fn from(value: SplitError) -> Self {
        Self::InvalidOperation(value.message())
    }
}
