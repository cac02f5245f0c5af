//! Counter Machine
//!
//! This example loads a transition table from JSON and attaches hooks at all
//! three scopes, sharing a counter between them.
//!
//! Key concepts:
//! - Declarative schema loading
//! - Global, state and action scoped hooks
//! - Caller data exposed on the machine and shared with every callback
//!
//! Run with: RUST_LOG=actionfsm=trace cargo run --example counter_machine

use actionfsm::builder::FsmBuilder;
use actionfsm::core::{ActionDefinition, ActionEvent};
use actionfsm::schema::MachineSchema;
use actionfsm::{Error, Fsm};
use tracing_subscriber::EnvFilter;

const TABLE: &str = r#"{
    "initialState": "one",
    "states": {
        "one": { "actions": { "inc": { "targetState": "two" } } },
        "two": { "actions": { "reset": { "targetState": "one" } } }
    }
}"#;

#[derive(Debug, Default)]
struct Counter {
    counter: u32,
    log: Vec<String>,
}

#[derive(Debug)]
struct LimitReached(u32);

impl std::fmt::Display for LimitReached {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "counter limit {} reached", self.0)
    }
}

fn note(scope: &'static str) -> impl Fn(&mut Counter, &ActionEvent<'_>) -> Result<(), LimitReached> {
    move |ctx: &mut Counter, event: &ActionEvent<'_>| {
        ctx.log.push(format!("{scope}: {event}"));
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Machine Example ===\n");

    let schema = MachineSchema::from_json(TABLE).unwrap();

    let mut fsm: Fsm<Counter, LimitReached> = FsmBuilder::from_schema(schema, Counter::default())
        .initialize(|| {
            println!("Initializing machine");
            Ok(())
        })
        .on_action_enter(note("global enter"))
        .on_action_exit(note("global exit"))
        .configure_state("one", |state| {
            state.on_action_enter(note("state enter")).action(
                "inc",
                ActionDefinition::new("two").body(|ctx: &mut Counter, _: &ActionEvent<'_>| {
                    if ctx.counter >= 2 {
                        return Err(LimitReached(ctx.counter));
                    }
                    ctx.counter += 1;
                    Ok(())
                }),
            )
        })
        .build()
        .unwrap();

    for action in ["inc", "reset", "inc", "reset", "inc", "bogus"] {
        match fsm.do_action(action) {
            Ok(state) => println!("{action:>6} -> {state}"),
            Err(Error::Callback(limit)) => println!("{action:>6} failed in callback: {limit}"),
            Err(Error::Fsm(err)) => println!("{action:>6} rejected: {err}"),
        }
    }

    println!("\nCounter: {}", fsm.counter);
    println!("Current state: {}", fsm.current_state());
    println!("\nHook log:");
    for line in &fsm.log {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
