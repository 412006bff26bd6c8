#![forbid(unsafe_code)]

use super::{ImportanceTransition, TransitionFrame, TransitionPoll, TransitionTicket};
use ql_core::ids::NodeId;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone, Debug)]
struct ActiveTransition {
    transition: ImportanceTransition,
    /// Last drawn values while the transition is mid-flight; `None` before the first sample
    /// and once the final frame has been drawn.
    in_flight: Option<Vec<(NodeId, f64)>>,
}

impl ActiveTransition {
    fn record(&mut self, frame: &TransitionFrame) {
        self.in_flight = (!frame.finished).then(|| {
            frame
                .samples
                .iter()
                .map(|sample| (sample.id.clone(), sample.value))
                .collect()
        });
    }
}

/// At most one live transition per sibling set, keyed by parent id.
#[derive(Clone, Debug, Default)]
pub struct TransitionBoard {
    active: BTreeMap<NodeId, ActiveTransition>,
    next_generation: u64,
}

impl TransitionBoard {
    /// Starts a transition from `before` to `after` for the children of `parent`.
    ///
    /// An in-flight transition on the same parent is cancelled. The new one starts from the
    /// values last drawn for it when it was caught mid-flight, otherwise from `before`. Ids
    /// absent from both start at zero.
    pub fn start(
        &mut self,
        parent: NodeId,
        before: &[(NodeId, u32)],
        after: Vec<(NodeId, u32)>,
        duration_ms: u64,
    ) -> TransitionTicket {
        self.next_generation += 1;
        let ticket = TransitionTicket {
            parent: parent.clone(),
            generation: self.next_generation,
        };

        let mut origin_by_id: BTreeMap<NodeId, f64> = before
            .iter()
            .map(|(id, value)| (id.clone(), f64::from(*value)))
            .collect();
        if let Some(previous) = self.active.remove(&parent) {
            debug!(
                parent = %parent,
                superseded = previous.transition.ticket.generation,
                generation = ticket.generation,
                "importance transition superseded"
            );
            if let Some(drawn) = previous.in_flight {
                origin_by_id.extend(drawn);
            }
        }

        let origin: Vec<f64> = after
            .iter()
            .map(|(id, _)| origin_by_id.get(id).copied().unwrap_or(0.0))
            .collect();
        self.active.insert(
            parent,
            ActiveTransition {
                transition: ImportanceTransition {
                    ticket: ticket.clone(),
                    origin,
                    targets: after,
                    duration_ms,
                },
                in_flight: None,
            },
        );
        ticket
    }

    /// Samples the transition behind `ticket`; stale tickets never yield frames.
    pub fn poll(&mut self, ticket: &TransitionTicket, elapsed_ms: u64) -> TransitionPoll {
        let Some(active) = self.active.get_mut(&ticket.parent) else {
            return TransitionPoll::Cancelled;
        };
        if active.transition.ticket != *ticket {
            return TransitionPoll::Cancelled;
        }
        let frame = active.transition.sample(elapsed_ms);
        active.record(&frame);
        if frame.finished {
            TransitionPoll::Finished(frame)
        } else {
            TransitionPoll::Frame(frame)
        }
    }

    /// Plays the whole transition at `interval_ms` steps and records the final frame, so a
    /// later transition on the same parent starts from the settled values.
    pub fn play(
        &mut self,
        ticket: &TransitionTicket,
        interval_ms: u64,
    ) -> Option<Vec<TransitionFrame>> {
        let active = self
            .active
            .get_mut(&ticket.parent)
            .filter(|active| active.transition.ticket == *ticket)?;
        let frames: Vec<TransitionFrame> = active.transition.frames(interval_ms).collect();
        if let Some(last) = frames.last() {
            active.record(last);
        }
        Some(frames)
    }

    pub fn get(&self, ticket: &TransitionTicket) -> Option<&ImportanceTransition> {
        self.active
            .get(&ticket.parent)
            .map(|active| &active.transition)
            .filter(|transition| transition.ticket == *ticket)
    }

    pub fn is_live(&self, ticket: &TransitionTicket) -> bool {
        self.get(ticket).is_some()
    }

    /// Drops transitions whose sibling set is gone.
    pub fn retain_parents(&mut self, keep: impl Fn(&NodeId) -> bool) {
        self.active.retain(|parent, _| keep(parent));
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
