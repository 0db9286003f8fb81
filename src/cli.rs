// cli.rs

use std::path::PathBuf;

use clap::Parser;
use history_state::DEFAULT_MAX_HEAP;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive value editor with bounded undo history", long_about = None)]
pub struct App {
    #[arg(short, long, env = "HISTORY_STATE_MAX_HEAP", default_value_t = DEFAULT_MAX_HEAP)]
    #[arg(help = "number of previous values kept for undo")]
    pub max_heap: usize,
    #[arg(short, long, help = "initial current value")]
    pub initial: Option<String>,
    #[arg(long, env = "HISTORY_STATE_HISTFILE", help = "file whose lines are replayed as values at startup")]
    pub histfile: Option<PathBuf>,
}

#[cfg(test)]
mod test {
    use super::App;
    use clap::Parser;

    #[test]
    fn parses_flags() {
        let app = App::try_parse_from(["histstate", "-m", "5", "--initial", "draft"]).unwrap();
        assert_eq!(app.max_heap, 5);
        assert_eq!(app.initial.as_deref(), Some("draft"));
    }

    #[test]
    fn shell_histfile_is_not_picked_up() {
        std::env::set_var("HISTFILE", "/home/u/.zsh_history");
        let app = App::try_parse_from(["histstate"]).unwrap();
        assert_eq!(app.histfile, None);

        std::env::set_var("HISTORY_STATE_HISTFILE", "/tmp/values");
        let app = App::try_parse_from(["histstate"]).unwrap();
        assert_eq!(app.histfile.as_deref(), Some(std::path::Path::new("/tmp/values")));
        std::env::remove_var("HISTORY_STATE_HISTFILE");
    }

    #[test]
    fn rejects_non_numeric_max_heap() {
        assert!(App::try_parse_from(["histstate", "--max-heap", "lots"]).is_err());
    }
}
