#![forbid(unsafe_code)]

use crate::store::EventRow;
use ql_core::ids::NodeId;
use std::collections::VecDeque;
use time::OffsetDateTime;

/// Bounded in-memory event log; the oldest rows fall off first.
#[derive(Clone, Debug)]
pub struct EventJournal {
    rows: VecDeque<EventRow>,
    capacity: usize,
    next_seq: u64,
}

impl EventJournal {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            capacity: capacity.max(1),
            next_seq: 1,
        }
    }

    pub(crate) fn append(
        &mut self,
        revision: u64,
        event_type: &str,
        node_id: Option<NodeId>,
        payload_json: String,
    ) -> EventRow {
        let row = EventRow {
            seq: self.next_seq,
            ts_ms: now_ms(),
            revision,
            event_type: event_type.to_string(),
            node_id,
            payload_json,
        };
        self.next_seq += 1;
        if self.rows.len() == self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(row.clone());
        row
    }

    pub fn since(&self, after_seq: u64, limit: usize) -> Vec<EventRow> {
        self.rows
            .iter()
            .filter(|row| row.seq > after_seq)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn now_ms() -> i64 {
    let ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(ms.max(0)).unwrap_or(i64::MAX)
}
