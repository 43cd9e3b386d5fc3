//! Customer entity.
//!
//! A customer is created when an arrival event fires and is consumed when its
//! final record is persisted at departure. Between those points it is owned
//! by exactly one wait queue (while waiting) or exactly one server (while in
//! service), never both. Customers are moved, not copied, through queues and
//! server slots so that state mutations are never lost to copy divergence.

use serde::{Deserialize, Serialize};

use crate::models::record::CustomerRecord;

/// A customer moving through the system.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::Customer;
///
/// let mut customer = Customer::new(1, 0.5);
/// assert_eq!(customer.serial(), 1);
/// assert_eq!(customer.assigned_server(), None);
///
/// customer.begin_service(0, 0.5);
/// assert_eq!(customer.assigned_server(), Some(0));
/// assert_eq!(customer.service_start_time(), Some(0.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Monotonically increasing identifier, assigned at construction and
    /// never reused. The counter is owned by the simulation engine.
    serial: u64,

    /// Virtual time at which the customer entered the system
    arrival_time: f64,

    /// Unset until the customer is assigned a server
    service_start_time: Option<f64>,

    /// Unset until service completes
    departure_time: Option<f64>,

    /// Index of the server this customer is (or was) served by
    assigned_server: Option<usize>,
}

impl Customer {
    /// Create a new customer at its arrival time.
    pub fn new(serial: u64, arrival_time: f64) -> Self {
        Self {
            serial,
            arrival_time,
            service_start_time: None,
            departure_time: None,
            assigned_server: None,
        }
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn service_start_time(&self) -> Option<f64> {
        self.service_start_time
    }

    pub fn departure_time(&self) -> Option<f64> {
        self.departure_time
    }

    pub fn assigned_server(&self) -> Option<usize> {
        self.assigned_server
    }

    /// Mark the customer as entering service on the given server.
    pub fn begin_service(&mut self, server_index: usize, time: f64) {
        self.assigned_server = Some(server_index);
        self.service_start_time = Some(time);
    }

    /// Mark the customer's service as complete.
    pub fn complete_service(&mut self, time: f64) {
        self.departure_time = Some(time);
    }

    /// Consume the customer into its persisted record.
    ///
    /// Returns `None` if the customer never entered or completed service;
    /// only fully departed customers have a complete record.
    pub fn into_record(self) -> Option<CustomerRecord> {
        Some(CustomerRecord {
            serial: self.serial,
            arrival_time: self.arrival_time,
            service_start_time: self.service_start_time?,
            departure_time: self.departure_time?,
            server: self.assigned_server?,
        })
    }
}
