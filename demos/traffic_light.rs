//! Traffic Light State Machine
//!
//! A cyclic machine with typed identifiers and an emergency override.
//!
//! Key concepts:
//! - Typed states and events via `state_enum!` / `event_enum!`
//! - Event-driven transitions with `trigger`
//! - Unconditional jumps with `change_state`
//! - Undo/redo over the visited states
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use rewind::builder::{ConfigurationBuilder, FsmBuilder};
use rewind::{event_enum, state_enum, Fsm};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
        Flashing,
    }
}

event_enum! {
    enum Signal {
        Next,
        Fault,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = ConfigurationBuilder::new()
        .initial(TrafficLight::Red)
        .transition(TrafficLight::Red, Signal::Next, TrafficLight::Green)
        .transition(TrafficLight::Green, Signal::Next, TrafficLight::Yellow)
        .transition(TrafficLight::Yellow, Signal::Next, TrafficLight::Red)
        .transition(TrafficLight::Red, Signal::Fault, TrafficLight::Flashing)
        .transition(TrafficLight::Green, Signal::Fault, TrafficLight::Flashing)
        .transition(TrafficLight::Yellow, Signal::Fault, TrafficLight::Flashing)
        .state(TrafficLight::Flashing)
        .build()?;

    let mut light: Fsm<TrafficLight, Signal> = FsmBuilder::new().configuration(config).build()?;
    println!("Initial state: {:?}", light.state());

    for _ in 0..4 {
        light.trigger(&Signal::Next)?;
        println!("  Next  -> {:?}", light.state());
    }

    println!(
        "\nStates that react to a fault: {:?}",
        light.states(Some(&Signal::Fault))
    );

    light.trigger(&Signal::Fault)?;
    println!("  Fault -> {:?}", light.state());

    match light.trigger(&Signal::Next) {
        Ok(()) => println!("  Next  -> {:?}", light.state()),
        Err(err) => println!("  Next rejected: {err}"),
    }

    println!("\nTechnician restores service:");
    light.change_state(TrafficLight::Red)?;
    println!("  Jump  -> {:?}", light.state());

    println!("\nStepping back through the log:");
    while light.undo() {
        println!("  Undo  -> {:?}", light.state());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
