//! Command-line driver.
//!
//! Composes a store for the chosen application, renders the starting state,
//! subscribes a renderer, and dispatches every action given on the command
//! line (or on stdin, one per line).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::counter::CounterReducer;
use crate::input::{parse_action, ActionSource, RawAction};
use crate::render::{self, View};
use crate::store::{Reducer, Store};
use crate::todo::{TodoAction, TodoList, TodoReducer};

#[derive(Parser, Debug)]
#[command(
    name = "unistore",
    version,
    about = "Dispatch actions to a counter or todo store and print each state"
)]
pub struct Cli {
    /// Config file (default: <config dir>/unistore/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Integer counter handling ADD and MINUS
    Counter {
        /// Actions to dispatch; read from stdin when omitted
        actions: Vec<String>,
    },
    /// Todo list handling ADD_TODO and DELETE_TODO
    Todo {
        /// Actions to dispatch; read from stdin when omitted
        actions: Vec<String>,
    },
}

/// Load config and run the parsed command against stdin/stdout.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli.format.unwrap_or(config.output.format);

    let stdin = io::stdin();
    execute(&cli.command, &config, format, stdin.lock(), io::stdout())
}

/// Run `command`, reading actions from `input` when none were passed as
/// arguments and writing every rendered state to `out`.
pub fn execute<I, W>(
    command: &Command,
    config: &Config,
    format: OutputFormat,
    input: I,
    out: W,
) -> anyhow::Result<()>
where
    I: BufRead,
    W: Write + 'static,
{
    match command {
        Command::Counter { actions } => {
            let actions = ActionSource::new(actions, input);
            let count = drive(CounterReducer, config.counter.initial, actions, format, out)?;
            tracing::info!(count, "Counter session finished");
        }
        Command::Todo { actions } => {
            let actions = ActionSource::new(actions, input);
            let initial = seed_todos(&config.todo.seed);
            let todos = drive(TodoReducer, initial, actions, format, out)?;
            tracing::info!(todos = todos.len(), "Todo session finished");
        }
    }
    Ok(())
}

/// Starting todo list for `seed`, with the first seed shown first.
pub fn seed_todos(seed: &[String]) -> TodoList {
    seed.iter().rev().fold(TodoList::new(), |list, text| {
        TodoReducer.reduce(&list, TodoAction::add_todo(text.as_str()))
    })
}

fn drive<R, A, W>(
    reducer: R,
    initial: R::State,
    actions: A,
    format: OutputFormat,
    out: W,
) -> anyhow::Result<R::State>
where
    R: Reducer,
    R::State: View + Serialize,
    R::Action: DeserializeOwned,
    A: IntoIterator<Item = io::Result<RawAction>>,
    W: Write + 'static,
{
    let mut view = render::observer::<R::State, W>(format, out);
    let mut store = Store::with_state(reducer, initial);
    view(store.state());
    let subscription = store.subscribe(view);

    for raw in actions {
        let raw = raw.context("Failed to read actions")?;
        let action: R::Action = parse_action(&raw.text)
            .with_context(|| format!("Invalid action at {}", raw.origin))?;
        store.dispatch(action);
    }

    store.unsubscribe(subscription);
    Ok(store.into_state())
}
