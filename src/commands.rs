// commands.rs

use std::io::Write;

use anyhow::{bail, Context, Result};
use history_state::HistoryState;
use itertools::Itertools;

use crate::util::writeln_ignore_broken_pipe;

pub const COMMANDS: [&str; 8] = ["set", "undo", "delete", "clear", "show", "resize", "help", "exit"];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run_command<W: Write>(tokens: &[String], state: &mut HistoryState<String>, out: &mut W) -> Result<Flow> {
    let Some((command, args)) = tokens.split_first() else {
        return Ok(Flow::Continue);
    };
    match command.as_str() {
        "set" => {
            if args.is_empty() {
                bail!("set: missing value");
            }
            state.set(args.join(" "));
        }
        "undo" => match state.pop() {
            Some(value) => writeln_ignore_broken_pipe(&mut *out, format!("restored {}", value))?,
            None => writeln_ignore_broken_pipe(&mut *out, "nothing to undo")?,
        },
        "delete" => {
            if args.is_empty() {
                bail!("delete: missing value");
            }
            state.delete_item(&args.join(" "));
        }
        "clear" => state.clear_items(),
        "show" => writeln_ignore_broken_pipe(&mut *out, render_history(state))?,
        "resize" => {
            let size = args.first().context("resize: missing size")?;
            let max_heap: usize = size
                .parse()
                .with_context(|| format!("resize: {}: not a number", size))?;
            state.set_max_heap(max_heap).context("resize")?;
        }
        "help" => writeln_ignore_broken_pipe(&mut *out, HELP)?,
        "exit" => return Ok(Flow::Exit),
        other => bail!("{}: command not found", other),
    }
    Ok(Flow::Continue)
}

/// One-line summary printed whenever the state changed.
pub fn render_status(state: &HistoryState<String>) -> String {
    format!(
        "current: {}  [{}/{}]",
        state.current().map_or("(none)", String::as_str),
        state.len(),
        state.max_heap()
    )
}

pub fn render_history(state: &HistoryState<String>) -> String {
    let snapshot = state.snapshot();
    let current = snapshot.current.map_or("(none)", String::as_str);
    if snapshot.histories.is_empty() {
        return format!("current: {}\n(history empty)", current);
    }
    let entries = snapshot
        .histories
        .iter()
        .enumerate()
        .map(|(i, value)| format!("{:>5}  {}", i + 1, value))
        .join("\n");
    format!("current: {}\n{}", current, entries)
}

const HELP: &str = "\
set <value>     replace the current value
undo            restore the most recent previous value
delete <value>  remove every copy of <value> from the history
clear           empty the history
show            print the current value and the history
resize <n>      keep at most <n> previous values
exit            quit";

#[cfg(test)]
mod test {
    use super::{render_history, render_status, run_command, Flow};
    use history_state::HistoryState;

    fn run(line: &str, state: &mut HistoryState<String>) -> (anyhow::Result<Flow>, String) {
        let tokens = crate::parser::split_words(line);
        let mut out = Vec::new();
        let result = run_command(&tokens, state, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn set_joins_words_into_one_value() {
        let mut state = HistoryState::new();
        run("set hello world", &mut state).0.unwrap();
        run("set 'second   value'", &mut state).0.unwrap();

        assert_eq!(state.current().map(String::as_str), Some("second   value"));
        assert_eq!(state.histories(), &["hello world".to_string()]);
    }

    #[test]
    fn undo_reports_restored_value() {
        let mut state = HistoryState::new();
        run("set a", &mut state).0.unwrap();
        run("set b", &mut state).0.unwrap();

        assert_eq!(run("undo", &mut state).1, "restored a\n");
        assert_eq!(run("undo", &mut state).1, "nothing to undo\n");
        assert_eq!(state.current().map(String::as_str), Some("a"));
    }

    #[test]
    fn delete_and_clear() {
        let mut state = HistoryState::new();
        for line in ["set x", "set y", "set x", "set z"] {
            run(line, &mut state).0.unwrap();
        }
        run("delete x", &mut state).0.unwrap();
        assert_eq!(state.histories(), &["y".to_string()]);
        assert_eq!(state.current().map(String::as_str), Some("y"));

        run("set w", &mut state).0.unwrap();
        run("clear", &mut state).0.unwrap();
        assert!(state.is_empty());
        assert_eq!(state.current().map(String::as_str), Some("w"));
    }

    #[test]
    fn resize_validates_its_argument() {
        let mut state = HistoryState::new();
        assert!(run("resize", &mut state).0.is_err());
        assert!(run("resize many", &mut state).0.is_err());
        assert!(run("resize 0", &mut state).0.is_err());

        run("resize 3", &mut state).0.unwrap();
        assert_eq!(state.max_heap(), 3);
    }

    #[test]
    fn unknown_and_incomplete_commands_fail() {
        let mut state = HistoryState::new();
        let err = run("frobnicate", &mut state).0.unwrap_err();
        assert_eq!(err.to_string(), "frobnicate: command not found");
        assert!(run("set", &mut state).0.is_err());
        assert!(run("delete", &mut state).0.is_err());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut state = HistoryState::new();
        assert_eq!(run("exit", &mut state).0.unwrap(), Flow::Exit);
        assert_eq!(run("", &mut state).0.unwrap(), Flow::Continue);
    }

    #[test]
    fn rendering() {
        let mut state = HistoryState::builder().max_heap(4).build().unwrap();
        assert_eq!(render_history(&state), "current: (none)\n(history empty)");

        state.set("one".to_string());
        state.set("two".to_string());
        state.set("three".to_string());
        assert_eq!(render_history(&state), "current: three\n    1  one\n    2  two");
        assert_eq!(render_status(&state), "current: three  [2/4]");
    }
}
