//! First-fit server selection with join-shortest-queue.
//!
//! # Behavior
//!
//! - Servers are scanned in slot order; the first idle one wins, regardless
//!   of load history. Lowest index is always preferred.
//! - Wait queues are scanned in slot order tracking the running minimum
//!   size; the customer joins the strictly smallest queue, lowest index on
//!   ties. An empty queue is therefore always preferred over any non-empty
//!   one.
//! - Refill uses the same minimum-size scan restricted to non-empty queues,
//!   so a freed server pulls from the shortest backlog.

use super::AssignmentPolicy;
use crate::models::server::Server;
use crate::models::wait_queue::WaitQueue;

/// First-fit server selection, shortest-queue joining.
///
/// # Example
///
/// ```
/// use queue_simulator_core_rs::{AssignmentPolicy, FirstFitPolicy, Server};
///
/// let policy = FirstFitPolicy;
/// let servers = vec![Server::new(0), Server::new(1)];
/// assert_eq!(policy.select_server(&servers), Some(0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitPolicy;

impl FirstFitPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl AssignmentPolicy for FirstFitPolicy {
    fn select_server(&self, servers: &[Server]) -> Option<usize> {
        servers.iter().position(Server::is_idle)
    }

    fn select_wait_queue(&self, queues: &[WaitQueue]) -> usize {
        let mut min_index = 0;
        let mut min_size = queues[0].len();
        for (index, queue) in queues.iter().enumerate().skip(1) {
            if queue.len() < min_size {
                min_size = queue.len();
                min_index = index;
            }
        }
        min_index
    }

    fn select_refill_queue(&self, queues: &[WaitQueue]) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, queue) in queues.iter().enumerate() {
            if queue.is_empty() {
                continue;
            }
            match best {
                Some((_, size)) if size <= queue.len() => {}
                _ => best = Some((index, queue.len())),
            }
        }
        best.map(|(index, _)| index)
    }
}
