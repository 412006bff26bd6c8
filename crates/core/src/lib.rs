#![forbid(unsafe_code)]

pub mod split;


pub mod ids {
    use super::model::NodeKind;

    #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct NodeId(String);

    impl NodeId {
        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn try_new(value: impl Into<String>) -> Result<Self, NodeIdError> {
            let value = value.into();
            validate_node_id(&value)?;
            Ok(Self(value))
        }

        /// Store-issued id, e.g. `MS-007`.
        pub fn for_kind(kind: NodeKind, seq: u64) -> Self {
            Self(format!("{}-{:03}", kind.id_prefix(), seq))
        }
    }

    impl std::fmt::Display for NodeId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum NodeIdError {
        Empty,
        TooLong,
        InvalidChar { ch: char, index: usize },
    }

    impl NodeIdError {
        pub fn message(&self) -> &'static str {
            match self {
                Self::Empty => "node id must not be empty",
                Self::TooLong => "node id is too long",
                Self::InvalidChar { .. } => "node id may only contain [A-Za-z0-9_-]",
            }
        }
    }

    fn validate_node_id(value: &str) -> Result<(), NodeIdError> {
        if value.is_empty() {
            return Err(NodeIdError::Empty);
        }
        if value.len() > 64 {
            return Err(NodeIdError::TooLong);
        }
        for (index, ch) in value.chars().enumerate() {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_') {
                continue;
            }
            return Err(NodeIdError::InvalidChar { ch, index });
        }
        Ok(())
    }
}

pub mod model {
    pub const IMPORTANCE_TOTAL: u32 = 100;
    pub const MIN_TASK_WEIGHT: u32 = 1;
    pub const MAX_TASK_WEIGHT: u32 = 1000;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum NodeKind {
        Quest,
        Milestone,
        Subgoal,
        Task,
    }

    impl NodeKind {
        pub fn as_str(self) -> &'static str {
            match self {
                NodeKind::Quest => "quest",
                NodeKind::Milestone => "milestone",
                NodeKind::Subgoal => "subgoal",
                NodeKind::Task => "task",
            }
        }

        pub fn id_prefix(self) -> &'static str {
            match self {
                NodeKind::Quest => "QUEST",
                NodeKind::Milestone => "MS",
                NodeKind::Subgoal => "SG",
                NodeKind::Task => "TASK",
            }
        }

        /// The only kind a node of this tier may hold as children.
        pub fn child_kind(self) -> Option<NodeKind> {
            match self {
                NodeKind::Quest => Some(NodeKind::Milestone),
                NodeKind::Milestone => Some(NodeKind::Subgoal),
                NodeKind::Subgoal => Some(NodeKind::Task),
                NodeKind::Task => None,
            }
        }

        pub fn ordinal(self) -> usize {
            match self {
                NodeKind::Quest => 0,
                NodeKind::Milestone => 1,
                NodeKind::Subgoal => 2,
                NodeKind::Task => 3,
            }
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub enum NodeStatus {
        #[default]
        Active,
        Skipped,
        Frozen,
    }

    impl NodeStatus {
        pub fn as_str(self) -> &'static str {
            match self {
                NodeStatus::Active => "active",
                NodeStatus::Skipped => "skipped",
                NodeStatus::Frozen => "frozen",
            }
        }
    }

    pub fn clamp_importance(value: i64) -> u32 {
        value.clamp(0, i64::from(IMPORTANCE_TOTAL)) as u32
    }

    pub fn clamp_weight(value: i64) -> u32 {
        value.clamp(i64::from(MIN_TASK_WEIGHT), i64::from(MAX_TASK_WEIGHT)) as u32
    }
}
