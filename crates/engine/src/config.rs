#![forbid(unsafe_code)]

use ql_core::model::NodeStatus;
use serde::Deserialize;

pub const ANIMATION_MS_ENV: &str = "QUESTLINE_ANIMATION_MS";
pub const FRAME_MS_ENV: &str = "QUESTLINE_FRAME_MS";
pub const FREEZE_POLICY_ENV: &str = "QUESTLINE_FREEZE_POLICY";
pub const EVENT_LOG_CAPACITY_ENV: &str = "QUESTLINE_EVENT_LOG_CAPACITY";

const DEFAULT_ANIMATION_MS: u64 = 600;
const DEFAULT_FRAME_MS: u64 = 16;
const DEFAULT_EVENT_LOG_CAPACITY: usize = 256;

/// Whether a frozen milestone can still take the focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreezePolicy {
    /// Frozen is metadata only; only skipped milestones lose eligibility.
    #[default]
    Advisory,
    /// Frozen milestones are passed over like skipped ones.
    Exclude,
}

impl FreezePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Exclude => "exclude",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "advisory" => Some(Self::Advisory),
            "exclude" => Some(Self::Exclude),
            _ => None,
        }
    }

    pub fn admits(self, status: NodeStatus) -> bool {
        match status {
            NodeStatus::Active => true,
            NodeStatus::Skipped => false,
            NodeStatus::Frozen => self == Self::Advisory,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub animation_duration_ms: u64,
    pub frame_interval_ms: u64,
    pub freeze_policy: FreezePolicy,
    pub event_log_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_MS,
            frame_interval_ms: DEFAULT_FRAME_MS,
            freeze_policy: FreezePolicy::Advisory,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the `QUESTLINE_*` keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = parse_u64_var(&lookup, ANIMATION_MS_ENV)? {
            config.animation_duration_ms = value;
        }
        if let Some(value) = parse_u64_var(&lookup, FRAME_MS_ENV)? {
            config.frame_interval_ms = value;
        }
        if let Some(value) = parse_u64_var(&lookup, EVENT_LOG_CAPACITY_ENV)? {
            config.event_log_capacity = usize::try_from(value).unwrap_or(usize::MAX);
        }
        if let Some(raw) = non_empty_var(&lookup, FREEZE_POLICY_ENV) {
            config.freeze_policy =
                FreezePolicy::parse(&raw).ok_or(ConfigError::InvalidFreezePolicy(raw))?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if self.event_log_capacity == 0 {
            return Err(ConfigError::ZeroEventLogCapacity);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidFreezePolicy(String),
    ZeroFrameInterval,
    ZeroEventLogCapacity,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "{key}: expected a non-negative integer, got {value:?}")
            }
            Self::InvalidFreezePolicy(value) => write!(
                f,
                "{FREEZE_POLICY_ENV}: expected advisory|exclude, got {value:?}"
            ),
            Self::ZeroFrameInterval => write!(f, "frame interval must be at least 1ms"),
            Self::ZeroEventLogCapacity => write!(f, "event log capacity must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn non_empty_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let raw = lookup(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn parse_u64_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = non_empty_var(lookup, key) else {
        return Ok(None);
    };
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}
