// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::commands::COMMANDS;

/// Completes command names in the first word of the line.
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let word = &prefix[start..];
        if word.contains(char::is_whitespace) {
            return (pos, Vec::new());
        }
        let pairs = COMMANDS
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect();
        (start, pairs)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod test {
    use super::CommandCompleter;

    fn names(line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = CommandCompleter::new().candidates(line, line.len());
        (start, pairs.into_iter().map(|pair| pair.display).collect())
    }

    #[test]
    fn completes_command_prefix() {
        assert_eq!(names("re"), (0, vec!["resize".to_string()]));
        assert_eq!(names("  e"), (2, vec!["exit".to_string()]));
        assert_eq!(names("").1.len(), 8);
    }

    #[test]
    fn arguments_are_not_completed() {
        assert_eq!(names("set re"), (6, vec![]));
    }
}
