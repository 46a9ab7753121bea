//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic machine over a map record.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Records are never mutated; each trigger builds a successor
//! - A wildcard callback observing every arrival
//! - Introspection with `triggerable_events`
//!
//! Run with: cargo run --example traffic_light

use statefold::{
    current, trigger, triggerable_events, MachineBuilder, MapRecord, StateKey, StateRecord,
};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    // Create the cyclic machine: go -> caution -> stop -> go -> ...
    let machine = MachineBuilder::new()
        .current("red")
        .transition("go", "red", "green")
        .transition("caution", "green", "yellow")
        .transition("stop", "yellow", "red")
        .callback(StateKey::Any, |light: MapRecord<&str, u32>, _event, _payload| {
            let changes = light.get("changes").copied().unwrap_or(0);
            Ok(light.insert("changes", changes + 1))
        })
        .build()
        .unwrap();

    let mut light = MapRecord::new().with_machine(machine);
    println!("Initial state: {}\n", current(&light).unwrap());

    println!("Running two full cycles:");
    for event in ["go", "caution", "stop", "go", "caution", "stop"] {
        light = trigger(&light, event, None).unwrap();
        println!("  {:8} -> {}", event, current(&light).unwrap());
    }

    println!(
        "\nLight changed {} times",
        light.get("changes").copied().unwrap_or(0)
    );

    // Only one event is ever possible from a given color.
    let possible = triggerable_events(&light).unwrap();
    println!(
        "From {}, the only possible event is {:?}",
        current(&light).unwrap(),
        possible
    );

    println!("\nKey Characteristics:");
    println!("- No final state (cycles indefinitely)");
    println!("- The wildcard callback fires on every arrival");
    println!("- Each trigger returns a fresh record; nothing is mutated");

    println!("\n=== Example Complete ===");
}
