//! Reldux Todo Example
//!
//! Replays a script of Redux-style actions through the TodoMVC reducer and
//! prints the resulting todos as JSON.
//!
//! Run with: cargo run -p rust_todo -- [--seed todos.json] [actions.json]

use clap::Parser;
use rust_todo::{Action, Todo, TodoApp};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay TodoMVC actions over a Reldux table-space.
#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON array of actions; a built-in script is used when omitted
    actions: Option<PathBuf>,

    /// JSON array of todos to start from instead of the initial state
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn builtin_script() -> Vec<Action> {
    vec![
        Action::AddTodo {
            text: "Run the tests".into(),
        },
        Action::CompleteTodo { id: 1 },
        Action::AddTodo {
            text: "Write the docs".into(),
        },
        Action::EditTodo {
            id: 2,
            text: "Write better docs".into(),
        },
        Action::ClearCompleted,
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = TodoApp::new()?;

    let state = match &cli.seed {
        Some(path) => {
            let todos: Vec<Todo> = serde_json::from_str(&fs::read_to_string(path)?)?;
            info!(count = todos.len(), path = %path.display(), "seeding todos");
            app.from_todos(&todos)?
        }
        None => app.initial()?,
    };

    let actions = match &cli.actions {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => builtin_script(),
    };
    info!(count = actions.len(), "replaying actions");

    let state = app.reduce_all(state, &actions)?;
    let todos = app.todos(&state)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&todos)?
    } else {
        serde_json::to_string(&todos)?
    };
    println!("{output}");

    Ok(())
}
