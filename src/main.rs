use anyhow::{Context, Result};
use clap::Parser;
use history_state::HistoryState;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod completion;
mod parser;
mod repl;
mod util;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::App::parse();

    let mut builder = HistoryState::builder().max_heap(args.max_heap);
    if let Some(initial) = args.initial {
        builder = builder.initial(initial);
    }
    let mut state = builder.build().context("invalid --max-heap")?;

    if let Some(path) = &args.histfile {
        repl::load_histfile(&mut state, path)?;
    }

    repl::start_repl(state)
}
