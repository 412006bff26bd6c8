#![forbid(unsafe_code)]

use ql_core::ids::NodeId;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRow {
    pub seq: u64,
    pub ts_ms: i64,
    pub revision: u64,
    pub event_type: String,
    pub node_id: Option<NodeId>,
    pub payload_json: String,
}

impl EventRow {
    pub fn event_id(&self) -> String {
        format!("evt_{:016}", self.seq)
    }

    /// `ts_ms` as an RFC 3339 UTC timestamp.
    pub fn timestamp(&self) -> String {
        let nanos = i128::from(self.ts_ms) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
            .format(&Rfc3339)
            .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
    }
}
