use std::io::{BufRead, Write};

use crate::error::DrillError;
use crate::sorting::SortMode;

/// Prompts on `out`, reads one line from `input` and parses it as a
/// sort mode.
///
/// Only the trailing newline is stripped before comparison, so `" 1"`
/// is rejected like any other stray value. An empty line or a closed
/// stream rejects too.
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<SortMode, DrillError> {
    write!(out, "\nEnter 1 or 2: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DrillError::invalid_input());
    }

    SortMode::from_choice(line.trim_end_matches(['\r', '\n']))
        .ok_or_else(DrillError::invalid_input)
}
