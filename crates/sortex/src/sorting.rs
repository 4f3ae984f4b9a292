use std::cmp::Ordering;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::DrillError;
use crate::input;

/// Sort order selector, parsed from the console choices `"1"` / `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Ascending,
    Descending,
}

impl SortMode {
    /// Maps a console choice onto a mode; anything outside `"1"`/`"2"`
    /// has no mode.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Ascending),
            "2" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Comparison strategy for this mode. Ordinal, never locale-aware.
    pub fn comparator(self) -> fn(&String, &String) -> Ordering {
        match self {
            Self::Ascending => |a, b| a.cmp(b),
            Self::Descending => |a, b| b.cmp(a),
        }
    }
}

/// The fixed list the sorting part works on.
pub fn sample_names() -> Vec<String> {
    ["Борис", "Дмитрий", "Григорий", "Андрей", "Владимир"]
        .map(String::from)
        .to_vec()
}

/// Sorts `names` in place with the comparator selected by `mode`.
pub fn sort_names(names: &mut [String], mode: SortMode) {
    debug!("sorting {} names, mode {:?}", names.len(), mode);
    names.sort_by(mode.comparator());
}

/// Part 2: ask for an order, sort the sample list, print the result.
///
/// An invalid choice is reported on `out` and the list is not printed.
pub fn run_sorting<R: BufRead, W: Write>(
    input_handle: &mut R,
    out: &mut W,
) -> Result<(), DrillError> {
    let mut names = sample_names();

    writeln!(out, "Choose a sort order: 1 ascending or 2 descending:")?;

    match input::read_choice(input_handle, out) {
        Ok(mode) => {
            sort_names(&mut names, mode);
            writeln!(out, "\nSorted list:")?;
            for name in &names {
                writeln!(out, "{name}")?;
            }
        },
        Err(DrillError::InvalidInput(message)) => {
            writeln!(out, "Invalid input: {message}")?;
        },
        Err(other) => return Err(other),
    }

    Ok(())
}
