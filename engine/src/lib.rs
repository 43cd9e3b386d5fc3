//! Queue Simulator Core - Rust Engine
//!
//! Discrete-event simulation of a multi-server queueing process with
//! deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Simulation clock
//! - **models**: Domain types (Customer, Server, Event, WaitQueue, records)
//! - **events**: Time-ordered future-event list
//! - **policy**: Server and wait-queue assignment policies
//! - **orchestrator**: Main dispatch loop
//! - **rng**: Deterministic random number generation and variate sources
//!
//! # Critical Invariants
//!
//! 1. The clock advances only by dispatching events, and never decreases
//! 2. All randomness is deterministic (seeded RNG)
//! 3. A customer is owned by exactly one wait queue or one server at a time

// Module declarations
pub mod core;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod rng;

// Re-exports for convenience
pub use self::core::clock::SimulationClock;
pub use events::queue::{EmptyQueueError, EventQueue};
pub use models::{
    customer::Customer,
    event::Event,
    record::{CustomerRecord, EventRecord, MemoryLog, RecordKind, SimulationLog},
    server::{Server, ServerStateError, ServerStatus},
    wait_queue::WaitQueue,
};
pub use orchestrator::{RunSummary, Simulation, SimulationConfig, SimulationError};
pub use policy::{AssignmentPolicy, FirstFitPolicy};
pub use rng::{ExponentialVariate, FixedVariate, SimRng, VariateSource};
