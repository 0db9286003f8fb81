// repl.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use history_state::HistoryState;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use tracing::{debug, warn};

use crate::commands::{render_status, run_command, Flow};
use crate::completion::CommandCompleter;
use crate::parser::split_words;
use crate::util::writeln_ignore_broken_pipe;

/// Replays every non-blank line of `path` through `set`. A missing file is not an
/// error, and lines that are not valid UTF-8 are skipped.
pub fn load_histfile(state: &mut HistoryState<String>, path: &Path) -> Result<usize> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), "skipping histfile: {}", err);
            return Ok(0);
        }
    };
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut loaded = 0;
    let mut lineno = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("reading {}", path.display()))?;
        if read == 0 {
            break;
        }
        lineno += 1;
        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(_) => {
                warn!(path = %path.display(), lineno, "skipping line that is not valid UTF-8");
                continue;
            }
        };
        let line = line.trim_end_matches(['\n', '\r']);
        if !line.trim().is_empty() {
            state.set(line.to_string());
            loaded += 1;
        }
    }
    debug!(loaded, path = %path.display(), "replayed histfile");
    Ok(loaded)
}

pub fn start_repl(mut state: HistoryState<String>) -> Result<()> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(CommandCompleter::new()));
    state.take_changed();
    writeln_ignore_broken_pipe(io::stdout(), render_status(&state))?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                let tokens = split_words(trimmed);
                let result = run_command(&tokens, &mut state, &mut io::stdout().lock());
                match result {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {
                        if state.take_changed() {
                            writeln_ignore_broken_pipe(io::stdout(), render_status(&state))?;
                        }
                    }
                    Err(err) => {
                        writeln_ignore_broken_pipe(io::stderr(), format!("{:#}", err))?;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read line"),
        }
    }
    Ok(())
}
