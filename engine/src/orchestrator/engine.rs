//! Simulation engine
//!
//! Main dispatch loop integrating all components:
//! - Event queue (time-ordered, deterministic tie-break)
//! - Server pool and per-server wait queues
//! - Assignment policy (first-fit server, shortest-queue joining)
//! - Variate sources (inter-arrival and service durations)
//! - Record emission (per-event and per-customer)
//!
//! # Architecture
//!
//! The engine seeds one arrival event, then repeatedly pops the earliest
//! pending event, advances the clock to its invoke time, and dispatches:
//!
//! ```text
//! while the event queue is non-empty:
//! 1. Pop the earliest event, set clock := event.invoke_time
//! 2. Arrival   -> create customer, maybe schedule next arrival,
//!                 assign to an idle server or enqueue
//! 3. Departure -> free the server, persist the customer record,
//!                 refill from at most one wait queue
//! ```
//!
//! Termination is emergent: once the configured number of customers has been
//! created, no further arrivals are scheduled, in-flight departures drain,
//! and the queue empties. There is no explicit stop check inside the loop.
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::{RecordKind, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     number_of_servers: 2,
//!     inter_arrival_time_mean: 1.0,
//!     service_time_mean: 0.8,
//!     number_of_customers: 10,
//!     rng_seed: 42,
//! };
//!
//! let mut simulation = Simulation::new(config).unwrap();
//! let summary = simulation.run().unwrap();
//!
//! assert_eq!(summary.customers_served, 10);
//! assert_eq!(simulation.log().events_of_kind(RecordKind::Arrival).len(), 10);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::clock::SimulationClock;
use crate::events::queue::{EmptyQueueError, EventQueue};
use crate::models::customer::Customer;
use crate::models::event::Event;
use crate::models::record::{EventRecord, MemoryLog, RecordKind, SimulationLog};
use crate::models::server::{Server, ServerStateError};
use crate::models::wait_queue::WaitQueue;
use crate::policy::{AssignmentPolicy, FirstFitPolicy};
use crate::rng::{ExponentialVariate, VariateSource};

/// Seed salt decorrelating the service-duration stream from the
/// inter-arrival stream when both are derived from one configured seed.
const SERVICE_STREAM_SALT: u64 = 0x5851_F42D_4C95_7F2D;

// ============================================================================
// Configuration
// ============================================================================

/// Complete simulation configuration.
///
/// All parameters are required; validation happens at construction, before
/// any event is scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of servers (and wait queues, one per server slot)
    pub number_of_servers: usize,

    /// Mean of the inter-arrival duration distribution
    pub inter_arrival_time_mean: f64,

    /// Mean of the service duration distribution
    pub service_time_mean: f64,

    /// Target number of customers to generate
    pub number_of_customers: usize,

    /// Seed for deterministic variate generation
    pub rng_seed: u64,
}

/// Simulation error types.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation failed at construction
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The dispatch loop popped an empty event queue (programming defect)
    #[error(transparent)]
    EmptyQueue(#[from] EmptyQueueError),

    /// A server transition contradicted its state
    #[error(transparent)]
    ServerState(#[from] ServerStateError),

    /// Internal bookkeeping contradiction
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result of draining the event queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total events dispatched
    pub events_dispatched: usize,

    /// Customers that completed service and departed
    pub customers_served: usize,

    /// Clock value after the last dispatched event
    pub final_clock: f64,
}

// ============================================================================
// Simulation
// ============================================================================

/// Discrete-event simulation of a multi-server queueing process.
///
/// The simulation owns all mutable state (clock, event queue, servers, wait
/// queues, counters) and mutates it only from within the dispatch loop, one
/// event at a time. Runs are deterministic given the configuration seed.
pub struct Simulation {
    config: SimulationConfig,

    clock: SimulationClock,

    event_queue: EventQueue,

    servers: Vec<Server>,

    /// One FIFO wait queue per server slot
    wait_queues: Vec<WaitQueue>,

    policy: Box<dyn AssignmentPolicy>,

    /// Inter-arrival duration source
    inter_arrival: Box<dyn VariateSource>,

    /// Service duration source
    service: Box<dyn VariateSource>,

    log: MemoryLog,

    /// Customers created so far; compared against the configured target to
    /// decide whether to keep scheduling arrivals
    customers_created: usize,

    /// Customers that completed service
    customers_departed: usize,

    /// Next customer serial, monotonically increasing, never reused
    next_serial: u64,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("customers_created", &self.customers_created)
            .field("customers_departed", &self.customers_departed)
            .field("next_serial", &self.next_serial)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Create a simulation with exponential variate sources derived from the
    /// configured seed, and schedule the initial arrival.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidConfig` if the server count is zero or
    /// either mean is not a positive finite number.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate(&config)?;

        let inter_arrival = Box::new(ExponentialVariate::new(
            config.inter_arrival_time_mean,
            config.rng_seed,
        ));
        let service = Box::new(ExponentialVariate::new(
            config.service_time_mean,
            config.rng_seed ^ SERVICE_STREAM_SALT,
        ));

        Self::with_sources(config, inter_arrival, service)
    }

    /// Create a simulation with caller-provided variate sources.
    ///
    /// This is the collaborator seam: scenario tests inject constant sources
    /// to obtain exact event traces.
    pub fn with_sources(
        config: SimulationConfig,
        inter_arrival: Box<dyn VariateSource>,
        service: Box<dyn VariateSource>,
    ) -> Result<Self, SimulationError> {
        Self::validate(&config)?;

        let servers = (0..config.number_of_servers).map(Server::new).collect();
        let wait_queues = (0..config.number_of_servers)
            .map(|_| WaitQueue::new())
            .collect();

        let mut simulation = Self {
            config,
            clock: SimulationClock::new(),
            event_queue: EventQueue::new(),
            servers,
            wait_queues,
            policy: Box::new(FirstFitPolicy::new()),
            inter_arrival,
            service,
            log: MemoryLog::new(),
            customers_created: 0,
            customers_departed: 0,
            next_serial: 1,
        };

        // Seed the initial arrival. A zero-customer target schedules nothing
        // so that exactly zero arrivals are dispatched.
        if simulation.config.number_of_customers > 0 {
            let invoke_time = simulation.clock.now() + simulation.inter_arrival.sample();
            simulation.event_queue.insert(Event::Arrival { invoke_time });
        }

        Ok(simulation)
    }

    fn validate(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.number_of_servers == 0 {
            return Err(SimulationError::InvalidConfig(
                "number_of_servers must be > 0".to_string(),
            ));
        }

        if !(config.inter_arrival_time_mean.is_finite() && config.inter_arrival_time_mean > 0.0) {
            return Err(SimulationError::InvalidConfig(
                "inter_arrival_time_mean must be a positive finite number".to_string(),
            ));
        }

        if !(config.service_time_mean.is_finite() && config.service_time_mean > 0.0) {
            return Err(SimulationError::InvalidConfig(
                "service_time_mean must be a positive finite number".to_string(),
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current clock value.
    pub fn clock(&self) -> f64 {
        self.clock.now()
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn wait_queues(&self) -> &[WaitQueue] {
        &self.wait_queues
    }

    /// The record log accumulated so far.
    pub fn log(&self) -> &MemoryLog {
        &self.log
    }

    pub fn customers_created(&self) -> usize {
        self.customers_created
    }

    pub fn customers_departed(&self) -> usize {
        self.customers_departed
    }

    /// Number of events still pending.
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    // ========================================================================
    // Dispatch loop
    // ========================================================================

    /// Dispatch the single earliest pending event.
    ///
    /// Advances the clock to the event's invoke time, runs the matching
    /// handler to completion, and returns the dispatched event. Returns
    /// `Ok(None)` once the queue is empty.
    pub fn step(&mut self) -> Result<Option<Event>, SimulationError> {
        if self.event_queue.is_empty() {
            return Ok(None);
        }

        let event = self.event_queue.pop_earliest()?;
        self.clock.advance_to(event.invoke_time());

        match event {
            Event::Arrival { .. } => self.handle_arrival()?,
            Event::Departure { server, .. } => self.handle_departure(server)?,
        }

        Ok(Some(event))
    }

    /// Drain the event queue, dispatching every event in time order.
    pub fn run(&mut self) -> Result<RunSummary, SimulationError> {
        let mut events_dispatched = 0;
        while self.step()?.is_some() {
            events_dispatched += 1;
        }

        Ok(RunSummary {
            events_dispatched,
            customers_served: self.customers_departed,
            final_clock: self.clock.now(),
        })
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    /// Handle an arrival: create the customer, keep the arrival stream going
    /// while the target is unmet, then assign a server or join a queue.
    fn handle_arrival(&mut self) -> Result<(), SimulationError> {
        let serial = self.next_serial;
        self.next_serial += 1;
        self.customers_created += 1;

        let customer = Customer::new(serial, self.clock.now());

        // Schedule the next arrival only while the target is unmet; this is
        // what terminates the run.
        if self.customers_created < self.config.number_of_customers {
            let invoke_time = self.clock.now() + self.inter_arrival.sample();
            self.event_queue.insert(Event::Arrival { invoke_time });
        }

        match self.policy.select_server(&self.servers) {
            None => {
                // Every server busy: join a wait queue. The snapshot in the
                // arrival record is taken after the enqueue.
                let slot = self.policy.select_wait_queue(&self.wait_queues);
                let queue = self.wait_queues.get_mut(slot).ok_or_else(|| {
                    SimulationError::InvariantViolation(format!(
                        "policy selected wait queue {slot} of {}",
                        self.config.number_of_servers
                    ))
                })?;
                queue.push_back(customer);
                self.emit_event_record(RecordKind::Arrival, serial, None);
            }
            Some(index) => {
                // The arrival record describes the arrival act itself, so the
                // server field stays unassigned even on direct assignment.
                self.emit_event_record(RecordKind::Arrival, serial, None);
                self.start_service(index, customer)?;
            }
        }

        Ok(())
    }

    /// Handle a departure: free the server, persist the customer record,
    /// then refill the server from at most one wait queue.
    fn handle_departure(&mut self, server_index: usize) -> Result<(), SimulationError> {
        let server = self.servers.get_mut(server_index).ok_or_else(|| {
            SimulationError::InvariantViolation(format!(
                "departure targets server {server_index} of {}",
                self.config.number_of_servers
            ))
        })?;

        let mut customer = server.finish_service()?;

        self.emit_event_record(RecordKind::Departure, customer.serial(), Some(server_index));

        customer.complete_service(self.clock.now());
        self.customers_departed += 1;

        let record = customer.into_record().ok_or_else(|| {
            SimulationError::InvariantViolation(
                "departing customer never entered service".to_string(),
            )
        })?;
        self.log.record_customer(record);

        // Refill from at most one queue per freed server; multiple non-empty
        // queues wait for further departures.
        if let Some(slot) = self.policy.select_refill_queue(&self.wait_queues) {
            let next = self
                .wait_queues
                .get_mut(slot)
                .and_then(WaitQueue::pop_front)
                .ok_or_else(|| {
                    SimulationError::InvariantViolation(format!(
                        "refill selected empty wait queue {slot}"
                    ))
                })?;
            self.start_service(server_index, next)?;
        }

        Ok(())
    }

    /// Put a customer into service on the given server and schedule the
    /// matching departure.
    fn start_service(
        &mut self,
        server_index: usize,
        mut customer: Customer,
    ) -> Result<(), SimulationError> {
        customer.begin_service(server_index, self.clock.now());
        let serial = customer.serial();

        let server = self.servers.get_mut(server_index).ok_or_else(|| {
            SimulationError::InvariantViolation(format!(
                "assignment targets server {server_index} of {}",
                self.config.number_of_servers
            ))
        })?;
        server.begin_service(customer)?;

        let invoke_time = self.clock.now() + self.service.sample();
        self.event_queue.insert(Event::Departure {
            invoke_time,
            server: server_index,
        });

        self.emit_event_record(RecordKind::Service, serial, Some(server_index));
        Ok(())
    }

    /// Emit a per-event record with a snapshot of every wait queue size.
    fn emit_event_record(&mut self, kind: RecordKind, serial: u64, server: Option<usize>) {
        let queue_sizes = self.wait_queues.iter().map(WaitQueue::len).collect();
        self.log.record_event(EventRecord {
            kind,
            time: self.clock.now(),
            customer_serial: serial,
            queue_sizes,
            server,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedVariate;

    fn base_config() -> SimulationConfig {
        SimulationConfig {
            number_of_servers: 1,
            inter_arrival_time_mean: 1.0,
            service_time_mean: 0.5,
            number_of_customers: 1,
            rng_seed: 7,
        }
    }

    #[test]
    fn test_zero_servers_rejected() {
        let config = SimulationConfig {
            number_of_servers: 0,
            ..base_config()
        };
        let err = Simulation::new(config).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_non_positive_means_rejected() {
        let config = SimulationConfig {
            inter_arrival_time_mean: 0.0,
            ..base_config()
        };
        assert!(matches!(
            Simulation::new(config).unwrap_err(),
            SimulationError::InvalidConfig(_)
        ));

        let config = SimulationConfig {
            service_time_mean: -1.0,
            ..base_config()
        };
        assert!(matches!(
            Simulation::new(config).unwrap_err(),
            SimulationError::InvalidConfig(_)
        ));

        let config = SimulationConfig {
            service_time_mean: f64::NAN,
            ..base_config()
        };
        assert!(matches!(
            Simulation::new(config).unwrap_err(),
            SimulationError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_validation_precedes_scheduling() {
        let config = SimulationConfig {
            number_of_servers: 0,
            ..base_config()
        };
        // Construction fails outright; no half-built simulation escapes
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_single_customer_run() {
        let mut simulation = Simulation::with_sources(
            base_config(),
            Box::new(FixedVariate::new(1.0)),
            Box::new(FixedVariate::new(0.5)),
        )
        .unwrap();

        let summary = simulation.run().unwrap();
        assert_eq!(summary.customers_served, 1);
        assert_eq!(summary.events_dispatched, 2); // one arrival, one departure
        assert_eq!(summary.final_clock, 1.5);
        assert_eq!(simulation.customers_created(), 1);
        assert!(simulation.servers()[0].is_idle());
    }

    #[test]
    fn test_zero_customer_target_schedules_nothing() {
        let config = SimulationConfig {
            number_of_customers: 0,
            ..base_config()
        };
        let mut simulation = Simulation::new(config).unwrap();

        assert_eq!(simulation.pending_events(), 0);
        let summary = simulation.run().unwrap();
        assert_eq!(summary.events_dispatched, 0);
        assert_eq!(summary.customers_served, 0);
        assert!(simulation.log().is_empty());
    }

    #[test]
    fn test_step_returns_dispatched_event() {
        let mut simulation = Simulation::with_sources(
            base_config(),
            Box::new(FixedVariate::new(1.0)),
            Box::new(FixedVariate::new(0.5)),
        )
        .unwrap();

        let first = simulation.step().unwrap().unwrap();
        assert_eq!(first, Event::Arrival { invoke_time: 1.0 });
        assert_eq!(simulation.clock(), 1.0);

        let second = simulation.step().unwrap().unwrap();
        assert_eq!(
            second,
            Event::Departure {
                invoke_time: 1.5,
                server: 0
            }
        );

        assert_eq!(simulation.step().unwrap(), None);
    }
}
