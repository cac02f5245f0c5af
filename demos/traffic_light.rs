//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - A transition table declared with the `states!` macro
//! - A global exit hook counting completed cycles
//!
//! Run with: RUST_LOG=actionfsm=debug cargo run --example traffic_light

use actionfsm::builder::FsmBuilder;
use actionfsm::core::ActionEvent;
use actionfsm::{states, Fsm};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Cycles {
    completed: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light: Fsm<Cycles> = FsmBuilder::new()
        .initial_state("red")
        .states(states! {
            "red" => { "next" => "green" },
            "green" => { "next" => "yellow" },
            "yellow" => { "next" => "red" },
        })
        .on_action_exit(|cycles: &mut Cycles, event: &ActionEvent<'_>| {
            if event.to == "red" {
                cycles.completed += 1;
            }
            Ok(())
        })
        .build()
        .unwrap();

    println!("Initial state: {}", light.current_state());
    println!("Is final: {}\n", light.is_final_state());

    println!("Transition sequence:");
    for _ in 0..6 {
        let from = light.current_state().to_string();
        let to = light.do_action("next").unwrap();
        println!("  {from} -> {to}");
    }

    println!("\nCompleted cycles: {}", light.completed);
    println!("Possible actions: {:?}", light.possible_actions());

    match light.do_action("blink") {
        Ok(state) => println!("Unexpectedly moved to {state}"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\n=== Example Complete ===");
}
