//! Simulation orchestrator.
//!
//! Owns the clock, the event queue, the server pool and the wait queues, and
//! drives the event-dispatch loop.

mod engine;

pub use engine::{RunSummary, Simulation, SimulationConfig, SimulationError};
