//! Assignment policies
//!
//! A policy decides which server serves an arriving customer and which wait
//! queue a customer joins when every server is busy. Policies are stateless
//! observers of the server pool and wait queues; all state mutation stays in
//! the orchestrator.

mod first_fit;

pub use first_fit::FirstFitPolicy;

use crate::models::server::Server;
use crate::models::wait_queue::WaitQueue;

/// Decides server and wait-queue assignment for customers.
///
/// The orchestrator consults the policy at two points: when a customer
/// arrives (pick an idle server, or failing that a queue to join) and when a
/// server frees up (pick at most one queue to refill it from).
pub trait AssignmentPolicy {
    /// Index of the server to assign an arriving customer to, or `None` if
    /// every server is busy.
    fn select_server(&self, servers: &[Server]) -> Option<usize>;

    /// Index of the wait queue an arriving customer joins when no server is
    /// idle. `queues` is never empty.
    fn select_wait_queue(&self, queues: &[WaitQueue]) -> usize;

    /// Index of the wait queue to refill a freed server from, or `None` if
    /// every queue is empty.
    fn select_refill_queue(&self, queues: &[WaitQueue]) -> Option<usize>;
}
