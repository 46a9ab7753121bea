//! E-commerce Order Processing
//!
//! This example demonstrates an order lifecycle over a custom record type
//! instead of the ready-made map record.
//!
//! Key concepts:
//! - Implementing `StateRecord` for a domain struct
//! - Callbacks with a typed payload (the payment amount)
//! - A failing callback abandoning the transition
//! - Wildcard cancellation from any state
//!
//! Run with: cargo run --example order_processing

use chrono::Utc;
use statefold::core::{Machine, StateRecord};
use statefold::{current, trigger, triggerable_events, MachineBuilder, StateKey};

/// A domain entity carrying its own machine slot.
#[derive(Clone, Debug)]
struct Order {
    machine: Option<Machine<Order>>,
    id: u64,
    paid: f64,
    log: Vec<String>,
}

impl Order {
    fn new(id: u64) -> Self {
        Self {
            machine: None,
            id,
            paid: 0.0,
            log: Vec::new(),
        }
    }

    fn logged(mut self, entry: String) -> Self {
        self.log.push(entry);
        self
    }
}

impl StateRecord for Order {
    type Name = &'static str;
    type Payload = f64;

    fn machine(&self) -> Option<&Machine<Self>> {
        self.machine.as_ref()
    }

    fn with_machine(&self, machine: Machine<Self>) -> Self {
        Self {
            machine: Some(machine),
            ..self.clone()
        }
    }
}

fn main() {
    println!("=== E-commerce Order Processing ===\n");

    let machine = MachineBuilder::new()
        .current("cart")
        .transition("place", "cart", "placed")
        .transition("pay", "placed", "paid")
        .transition("ship", "paid", "shipped")
        .transition("deliver", "shipped", "delivered")
        .transition("cancel", StateKey::Any, "cancelled")
        .callback("paid", |order: Order, _event, payload| {
            let amount = payload.copied().ok_or("payment without an amount")?;
            if amount <= 0.0 {
                return Err(format!("invalid payment amount: {amount}").into());
            }
            Ok(Order {
                paid: amount,
                ..order
            })
        })
        .callback(StateKey::Any, |order: Order, event, _payload| {
            let stamp = Utc::now().format("%H:%M:%S");
            let entry = format!("[{stamp}] order {}: {event}", order.id);
            Ok(order.logged(entry))
        })
        .build()
        .unwrap();

    let order = Order::new(12345).with_machine(machine);
    println!("Order {} starts in: {}", order.id, current(&order).unwrap());

    println!("\nStep 1: Place the order");
    let order = trigger(&order, "place", None).unwrap();
    println!("  now in: {}", current(&order).unwrap());

    // Paying without an amount makes the "paid" callback fail; the
    // transition is abandoned and the original record stays usable.
    println!("\nStep 2: Attempt payment without an amount");
    match trigger(&order, "pay", None) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => {
            println!("  rejected: {err}");
            if let Some(source) = std::error::Error::source(&err) {
                println!("  caused by: {source}");
            }
        }
    }
    println!("  still in: {}", current(&order).unwrap());

    println!("\nStep 3: Pay for real");
    let order = trigger(&order, "pay", Some(&149.99)).unwrap();
    println!(
        "  now in: {} (paid ${:.2})",
        current(&order).unwrap(),
        order.paid
    );

    println!("\nStep 4: Ship and deliver");
    let order = trigger(&order, "ship", None).unwrap();
    let order = trigger(&order, "deliver", None).unwrap();
    println!("  now in: {}", current(&order).unwrap());

    // Cancellation is wildcard-routed, so even a delivered order takes it.
    let possible = triggerable_events(&order).unwrap();
    println!("\nStill possible from delivered: {possible:?}");

    println!("\nActivity log:");
    for entry in &order.log {
        println!("  - {entry}");
    }

    println!("\nKey Takeaways:");
    println!("- Domain structs implement StateRecord directly");
    println!("- The payload is typed (f64), not stringly data");
    println!("- A failing callback abandons the whole transition");
    println!("- The wildcard route keeps `cancel` available everywhere");

    println!("\n=== Example Complete ===");
}
