//! Scheduled simulation events.
//!
//! An event is an instant at which the state of the system changes: a new
//! customer arrives, or a server finishes service. Events are immutable once
//! created and consumed exactly once by the dispatch loop.

use serde::{Deserialize, Serialize};

/// A scheduled state change.
///
/// The departure variant carries the index of the server whose service
/// completion it represents; arrivals are not tied to a server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A new customer enters the system
    Arrival { invoke_time: f64 },

    /// A server finishes serving its current customer
    Departure { invoke_time: f64, server: usize },
}

impl Event {
    /// Virtual time at which this event fires.
    pub fn invoke_time(&self) -> f64 {
        match self {
            Event::Arrival { invoke_time } => *invoke_time,
            Event::Departure { invoke_time, .. } => *invoke_time,
        }
    }

    /// Short description of the event type.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival { .. } => "Arrival",
            Event::Departure { .. } => "Departure",
        }
    }

    /// Server index for departures; `None` for arrivals.
    pub fn target_server(&self) -> Option<usize> {
        match self {
            Event::Arrival { .. } => None,
            Event::Departure { server, .. } => Some(*server),
        }
    }
}
