//! Replay identity: same seed and configuration, same log.

use queue_simulator_core_rs::{RecordKind, Simulation, SimulationConfig};

fn config_with_seed(rng_seed: u64) -> SimulationConfig {
    SimulationConfig {
        number_of_servers: 3,
        inter_arrival_time_mean: 1.0,
        service_time_mean: 2.5,
        number_of_customers: 50,
        rng_seed,
    }
}

#[test]
fn test_same_seed_same_log() {
    let mut first = Simulation::new(config_with_seed(12345)).unwrap();
    let mut second = Simulation::new(config_with_seed(12345)).unwrap();

    let summary_a = first.run().unwrap();
    let summary_b = second.run().unwrap();

    assert_eq!(summary_a, summary_b);
    assert_eq!(first.log(), second.log());
}

#[test]
fn test_different_seeds_diverge() {
    let mut first = Simulation::new(config_with_seed(1)).unwrap();
    let mut second = Simulation::new(config_with_seed(2)).unwrap();

    first.run().unwrap();
    second.run().unwrap();

    assert_ne!(first.log().events(), second.log().events());
}

#[test]
fn test_snapshot_width_matches_server_count() {
    let mut simulation = Simulation::new(config_with_seed(99)).unwrap();
    simulation.run().unwrap();

    for record in simulation.log().events() {
        assert_eq!(record.queue_sizes.len(), 3);
    }
}

#[test]
fn test_serials_assigned_in_arrival_order() {
    let mut simulation = Simulation::new(config_with_seed(7)).unwrap();
    simulation.run().unwrap();

    let serials: Vec<u64> = simulation
        .log()
        .events_of_kind(RecordKind::Arrival)
        .iter()
        .map(|r| r.customer_serial)
        .collect();

    let expected: Vec<u64> = (1..=50).collect();
    assert_eq!(serials, expected);
}
