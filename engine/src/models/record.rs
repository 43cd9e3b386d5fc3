//! Simulation records and the log sink.
//!
//! The engine persists two kinds of records for later reporting: one per
//! dispatched event (arrival, service start, departure) capturing a snapshot
//! of every wait queue at that instant, and one per customer at departure
//! capturing its full timeline. The sink is append-only; querying and
//! statistical post-processing are downstream concerns.
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::{EventRecord, MemoryLog, RecordKind, SimulationLog};
//!
//! let mut log = MemoryLog::new();
//! log.record_event(EventRecord {
//!     kind: RecordKind::Arrival,
//!     time: 1.0,
//!     customer_serial: 1,
//!     queue_sizes: vec![0, 0],
//!     server: None,
//! });
//!
//! assert_eq!(log.events().len(), 1);
//! assert_eq!(log.events_of_kind(RecordKind::Arrival).len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Kind of a per-event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// A customer entered the system
    Arrival,
    /// A customer started service on a server
    Service,
    /// A customer finished service and left
    Departure,
}

/// Per-event record: system state at the moment of one dispatched event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub kind: RecordKind,

    /// Clock value at emission
    pub time: f64,

    pub customer_serial: u64,

    /// Size of every wait queue at emission, in server-slot order
    pub queue_sizes: Vec<usize>,

    /// Server the record refers to; `None` when the customer is not (yet)
    /// assigned to a server
    pub server: Option<usize>,
}

/// Per-customer record, persisted once when the customer departs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub serial: u64,
    pub arrival_time: f64,
    pub service_start_time: f64,
    pub departure_time: f64,
    pub server: usize,
}

/// Append-only sink for simulation records.
///
/// The engine only requires these two write operations; storage, querying,
/// and report formatting belong to the implementor.
pub trait SimulationLog {
    fn record_event(&mut self, record: EventRecord);
    fn record_customer(&mut self, record: CustomerRecord);
}

/// In-memory log with query helpers and JSON export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryLog {
    events: Vec<EventRecord>,
    customers: Vec<CustomerRecord>,
}

impl MemoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All event records, in emission order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// All customer records, in departure order.
    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.customers.is_empty()
    }

    /// Event records of a specific kind.
    pub fn events_of_kind(&self, kind: RecordKind) -> Vec<&EventRecord> {
        self.events.iter().filter(|r| r.kind == kind).collect()
    }

    /// Event records for a specific customer.
    pub fn events_for_customer(&self, serial: u64) -> Vec<&EventRecord> {
        self.events
            .iter()
            .filter(|r| r.customer_serial == serial)
            .collect()
    }

    /// Customer record for a specific serial, if that customer departed.
    pub fn customer(&self, serial: u64) -> Option<&CustomerRecord> {
        self.customers.iter().find(|r| r.serial == serial)
    }

    /// Export the full log as pretty-printed JSON for downstream reporting.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl SimulationLog for MemoryLog {
    fn record_event(&mut self, record: EventRecord) {
        self.events.push(record);
    }

    fn record_customer(&mut self, record: CustomerRecord) {
        self.customers.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(kind: RecordKind, serial: u64, server: Option<usize>) -> EventRecord {
        EventRecord {
            kind,
            time: 1.0,
            customer_serial: serial,
            queue_sizes: vec![0, 1],
            server,
        }
    }

    #[test]
    fn test_log_starts_empty() {
        let log = MemoryLog::new();
        assert!(log.is_empty());
        assert!(log.events().is_empty());
        assert!(log.customers().is_empty());
    }

    #[test]
    fn test_query_by_kind() {
        let mut log = MemoryLog::new();
        log.record_event(sample_event(RecordKind::Arrival, 1, None));
        log.record_event(sample_event(RecordKind::Service, 1, Some(0)));
        log.record_event(sample_event(RecordKind::Arrival, 2, None));

        assert_eq!(log.events_of_kind(RecordKind::Arrival).len(), 2);
        assert_eq!(log.events_of_kind(RecordKind::Service).len(), 1);
        assert_eq!(log.events_of_kind(RecordKind::Departure).len(), 0);
    }

    #[test]
    fn test_query_by_customer() {
        let mut log = MemoryLog::new();
        log.record_event(sample_event(RecordKind::Arrival, 1, None));
        log.record_event(sample_event(RecordKind::Service, 1, Some(0)));
        log.record_event(sample_event(RecordKind::Arrival, 2, None));

        assert_eq!(log.events_for_customer(1).len(), 2);
        assert_eq!(log.events_for_customer(2).len(), 1);
        assert_eq!(log.events_for_customer(99).len(), 0);
    }

    #[test]
    fn test_customer_lookup() {
        let mut log = MemoryLog::new();
        log.record_customer(CustomerRecord {
            serial: 5,
            arrival_time: 1.0,
            service_start_time: 1.0,
            departure_time: 2.0,
            server: 0,
        });

        assert_eq!(log.customer(5).unwrap().departure_time, 2.0);
        assert!(log.customer(6).is_none());
    }

    #[test]
    fn test_json_export() {
        let mut log = MemoryLog::new();
        log.record_event(sample_event(RecordKind::Arrival, 1, None));

        let json = log.to_json().unwrap();
        assert!(json.contains("\"Arrival\""));
        assert!(json.contains("\"customer_serial\": 1"));
    }
}
