#![forbid(unsafe_code)]

mod board;
mod frames;


pub use board::*;
pub use frames::*;

use ql_core::ids::NodeId;
use ql_core::split::{ease_in_out_cubic, lerp};

/// Handle to one importance transition of one sibling set. A newer transition on the same
/// set makes every older ticket stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    parent: NodeId,
    generation: u64,
}

impl TransitionTicket {
    pub fn parent(&self) -> &NodeId {
        &self.parent
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportanceSample {
    pub id: NodeId,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransitionFrame {
    pub elapsed_ms: u64,
    pub samples: Vec<ImportanceSample>,
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TransitionPoll {
    Frame(TransitionFrame),
    Finished(TransitionFrame),
    /// Superseded by a newer transition, or the sibling set no longer exists.
    Cancelled,
}

/// Eased interpolation from one importance split to its deterministic target.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportanceTransition {
    ticket: TransitionTicket,
    origin: Vec<f64>,
    targets: Vec<(NodeId, u32)>,
    duration_ms: u64,
}

impl ImportanceTransition {
    pub fn ticket(&self) -> &TransitionTicket {
        &self.ticket
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn targets(&self) -> &[(NodeId, u32)] {
        &self.targets
    }

    /// Snapshot at `elapsed_ms`. At or past the duration every value is exactly its integer
    /// target.
    pub fn sample(&self, elapsed_ms: u64) -> TransitionFrame {
        if elapsed_ms >= self.duration_ms {
            return TransitionFrame {
                elapsed_ms,
                samples: self
                    .targets
                    .iter()
                    .map(|(id, target)| ImportanceSample {
                        id: id.clone(),
                        value: f64::from(*target),
                    })
                    .collect(),
                finished: true,
            };
        }

        let eased = ease_in_out_cubic(elapsed_ms as f64 / self.duration_ms as f64);
        TransitionFrame {
            elapsed_ms,
            samples: self
                .targets
                .iter()
                .zip(&self.origin)
                .map(|((id, target), from)| ImportanceSample {
                    id: id.clone(),
                    value: lerp(*from, f64::from(*target), eased),
                })
                .collect(),
            finished: false,
        }
    }

    pub fn frames(&self, interval_ms: u64) -> TransitionFrames<'_> {
        TransitionFrames::new(self, interval_ms)
    }
}
