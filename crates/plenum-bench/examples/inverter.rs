//! End-to-end pilot valve example.
//!
//! Demonstrates: build a layout → Circuit → settle → drive the control
//! input → watch the shuttle cut the supply line, then the same machine
//! running on the realtime tick thread.

use std::time::Duration;

use plenum_bench::pilot_valve_layout;
use plenum_engine::{Circuit, DriverConfig, RealtimeCircuit};
use plenum_test_utils::pressure_diagram;

fn settle(circuit: &mut Circuit) {
    for _ in 0..3 {
        circuit.step().unwrap();
    }
}

fn levels_as_bits(levels: &[bool]) -> String {
    levels.iter().map(|high| if *high { '1' } else { '0' }).collect()
}

fn main() {
    println!("=== Plenum Pilot Valve Example ===\n");

    let mut circuit = Circuit::new(pilot_valve_layout());
    settle(&mut circuit);

    println!("At rest, supply flows through the shuttle bore:");
    println!("{}\n", circuit.to_diagram());
    println!("{}\n", pressure_diagram(&circuit));
    println!("outputs = {}\n", levels_as_bits(&circuit.output_levels()));

    // --- Drive the pilot ---
    println!("Driving the control input high...");
    circuit.set_inputs(&[true]);
    settle(&mut circuit);
    println!("{}\n", circuit.to_diagram());
    println!("outputs = {}\n", levels_as_bits(&circuit.output_levels()));

    println!("Releasing the control input...");
    circuit.set_inputs(&[false]);
    settle(&mut circuit);
    println!("outputs = {}\n", levels_as_bits(&circuit.output_levels()));

    // --- Truth table ---
    println!("Truth table:");
    for value in [false, true] {
        circuit.set_inputs(&[value]);
        settle(&mut circuit);
        println!(
            "  in = {} | out = {}",
            u8::from(value),
            levels_as_bits(&circuit.output_levels()),
        );
    }

    // --- Realtime ---
    println!("\nHanding the circuit to the realtime driver...");
    let driver = RealtimeCircuit::new(circuit, DriverConfig::default()).unwrap();
    driver.submit_inputs(&[(0, true)]).unwrap();
    std::thread::sleep(Duration::from_millis(100));

    if let Some(snapshot) = driver.latest_snapshot() {
        println!(
            "published {} snapshots, faulted: {}",
            driver.published_steps(),
            snapshot.is_faulted(),
        );
    }

    let circuit = driver.shutdown().unwrap();
    println!("recovered at tick {}, outputs = {}", circuit.tick(), levels_as_bits(&circuit.output_levels()));
    println!("Done.");
}
