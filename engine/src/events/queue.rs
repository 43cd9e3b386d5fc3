//! Time-ordered event queue.
//!
//! A min-ordered priority structure over pending events. Ordering is strictly
//! by invoke time ascending; two events with identical invoke times are
//! dispatched in the order they were scheduled. The tie-break uses a
//! monotonically increasing insertion sequence number assigned by the queue,
//! so runs are reproducible regardless of how the underlying heap resolves
//! equal keys.
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::{Event, EventQueue};
//!
//! let mut queue = EventQueue::new();
//! queue.insert(Event::Arrival { invoke_time: 2.0 });
//! queue.insert(Event::Departure { invoke_time: 1.5, server: 0 });
//!
//! let first = queue.pop_earliest().unwrap();
//! assert_eq!(first.invoke_time(), 1.5);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::models::event::Event;

/// Popping from an empty event queue.
///
/// Only reachable through a programming defect; the dispatch loop checks for
/// emptiness itself. Treated as a fatal invariant violation, never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("event queue is empty")]
pub struct EmptyQueueError;

/// An event together with its insertion sequence number.
///
/// The heap is a max-heap, so the ordering is reversed: the greatest element
/// is the one with the smallest invoke time, and among equal times the one
/// scheduled first.
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    event: Event,
    seq: u64,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .event
            .invoke_time()
            .total_cmp(&self.event.invoke_time())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Multiset of pending events ordered by invoke time ascending.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an event.
    pub fn insert(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { event, seq });
    }

    /// Remove and return the earliest pending event.
    pub fn pop_earliest(&mut self) -> Result<Event, EmptyQueueError> {
        match self.heap.pop() {
            Some(scheduled) => Ok(scheduled.event),
            None => Err(EmptyQueueError),
        }
    }

    /// Earliest pending event without removing it.
    pub fn peek_earliest(&self) -> Option<&Event> {
        self.heap.peek().map(|scheduled| &scheduled.event)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
