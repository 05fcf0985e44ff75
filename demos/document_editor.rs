//! Document Workflow With Undo/Redo
//!
//! A string-keyed machine loaded from JSON, driven like an editor's
//! review workflow.
//!
//! Key concepts:
//! - Loading a `Configuration` through serde
//! - Undo/redo, and how a new transition discards the redo stack
//! - `reset` returning home without touching history
//!
//! Run with: RUST_LOG=debug cargo run --example document_editor

use rewind::{Configuration, Fsm};
use tracing_subscriber::EnvFilter;

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived", "revise": "draft" } },
        "archived": {}
    }
}"#;

fn print_status(fsm: &Fsm) {
    println!(
        "  state={:<10} undo={:<5} redo={}",
        fsm.state(),
        fsm.can_undo(),
        fsm.can_redo()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Workflow ===\n");

    let config: Configuration = serde_json::from_str(WORKFLOW)?;
    let mut fsm: Fsm = Fsm::new(config);

    println!("Declared states: {:?}", fsm.states(None));
    println!("Revisable from:  {:?}\n", fsm.states(Some(&"revise".to_string())));

    for event in ["submit", "approve", "archive"] {
        fsm.trigger(&event.to_string())?;
        println!("{event}:");
        print_status(&fsm);
    }

    println!("undo x2:");
    fsm.undo();
    fsm.undo();
    print_status(&fsm);

    println!("reject (discards redo):");
    fsm.trigger(&"reject".to_string())?;
    print_status(&fsm);

    println!("reset (history kept):");
    fsm.change_state("published".to_string())?;
    fsm.reset();
    print_status(&fsm);

    println!("clear history:");
    fsm.clear_history();
    print_status(&fsm);

    if let Err(err) = fsm.trigger(&"approve".to_string()) {
        println!("\napprove from draft rejected: {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
