#![forbid(unsafe_code)]

use super::{ImportanceTransition, TransitionFrame};

/// Fixed-step frame stream over a transition; the last item is always the finished frame.
#[derive(Clone, Debug)]
pub struct TransitionFrames<'a> {
    transition: &'a ImportanceTransition,
    interval_ms: u64,
    next_elapsed_ms: u64,
    done: bool,
}

impl<'a> TransitionFrames<'a> {
    pub(super) fn new(transition: &'a ImportanceTransition, interval_ms: u64) -> Self {
        Self {
            transition,
            interval_ms: interval_ms.max(1),
            next_elapsed_ms: 0,
            done: false,
        }
    }
}

impl Iterator for TransitionFrames<'_> {
    type Item = TransitionFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let frame = self.transition.sample(self.next_elapsed_ms);
        if frame.finished {
            self.done = true;
        } else {
            let next = self.next_elapsed_ms.saturating_add(self.interval_ms);
            // Land exactly on the duration so the final frame is never skipped over.
            self.next_elapsed_ms = next.min(self.transition.duration_ms());
        }
        Some(frame)
    }
}
