//! Server model
//!
//! A server is created at simulation initialization, persists for the whole
//! run, and toggles between Idle and Busy. The status and the held customer
//! are kept consistent structurally: the only mutators are `begin_service`
//! (Idle -> Busy, stores the customer) and `finish_service` (Busy -> Idle,
//! yields the customer), so a Busy server holds exactly one customer and an
//! Idle server holds none.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::customer::Customer;

/// Errors that can occur on server state transitions
#[derive(Debug, Error, PartialEq)]
pub enum ServerStateError {
    #[error("server {index} is already serving customer {serial}")]
    AlreadyBusy { index: usize, serial: u64 },

    #[error("server {index} has no customer in service")]
    NoCustomerInService { index: usize },
}

/// Server status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerStatus {
    Idle,
    Busy,
}

/// A service station in the server pool.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::{Customer, Server, ServerStatus};
///
/// let mut server = Server::new(0);
/// assert!(server.is_idle());
///
/// server.begin_service(Customer::new(1, 0.0)).unwrap();
/// assert_eq!(server.status(), ServerStatus::Busy);
///
/// let customer = server.finish_service().unwrap();
/// assert_eq!(customer.serial(), 1);
/// assert!(server.is_idle());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Slot index, stable for the whole run
    index: usize,

    status: ServerStatus,

    /// Present iff status is Busy
    current_customer: Option<Customer>,
}

impl Server {
    /// Create a new idle server for the given slot.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            status: ServerStatus::Idle,
            current_customer: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn status(&self) -> ServerStatus {
        self.status
    }

    pub fn is_idle(&self) -> bool {
        self.status == ServerStatus::Idle
    }

    /// Customer currently in service, if any.
    pub fn current_customer(&self) -> Option<&Customer> {
        self.current_customer.as_ref()
    }

    /// Take ownership of a customer and switch to Busy.
    pub fn begin_service(&mut self, customer: Customer) -> Result<(), ServerStateError> {
        if let Some(current) = &self.current_customer {
            return Err(ServerStateError::AlreadyBusy {
                index: self.index,
                serial: current.serial(),
            });
        }
        self.status = ServerStatus::Busy;
        self.current_customer = Some(customer);
        Ok(())
    }

    /// Release the served customer and switch to Idle.
    pub fn finish_service(&mut self) -> Result<Customer, ServerStateError> {
        match self.current_customer.take() {
            Some(customer) => {
                self.status = ServerStatus::Idle;
                Ok(customer)
            }
            None => Err(ServerStateError::NoCustomerInService { index: self.index }),
        }
    }
}
