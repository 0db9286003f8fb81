// util.rs

use std::fmt::Display;
use std::io::{self, Write};

/// Writes one line, treating a closed reader (`histstate | head`) as success.
pub fn writeln_ignore_broken_pipe<W: Write, S: Display>(mut w: W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
