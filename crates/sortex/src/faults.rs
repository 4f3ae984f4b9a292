use std::io::{BufRead, Write};

use log::debug;

use crate::error::DrillError;
use crate::input;

/// The five error kinds the demonstration provokes, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    InvalidInput,
    DivideByZero,
    NullArgument,
    IndexOutOfRange,
    Format,
}

/// One demonstration entry: the kind to provoke and the label its
/// report line carries.
#[derive(Debug, Clone, Copy)]
pub struct FaultProbe {
    pub label: &'static str,
    pub kind: FaultKind,
}

/// Probe list, in the order the demonstration runs them.
pub fn probes() -> [FaultProbe; 5] {
    [
        FaultProbe { label: "Invalid input", kind: FaultKind::InvalidInput },
        FaultProbe { label: "Division by zero", kind: FaultKind::DivideByZero },
        FaultProbe { label: "Null argument", kind: FaultKind::NullArgument },
        FaultProbe {
            label: "Index out of range",
            kind: FaultKind::IndexOutOfRange,
        },
        FaultProbe { label: "Formatting error", kind: FaultKind::Format },
    ]
}

/// Checked integer division.
pub fn divide(dividend: i32, divisor: i32) -> Result<i32, DrillError> {
    dividend.checked_div(divisor).ok_or(DrillError::DivideByZero)
}

/// Parses a number from a value that may be absent.
pub fn parse_number(raw: Option<&str>) -> Result<i32, DrillError> {
    let text = raw.ok_or(DrillError::NullArgument)?;
    text.parse()
        .map_err(|_| DrillError::Format(format!("'{text}' is not a number")))
}

/// Stores `item` at `index`, rejecting writes past the end.
pub fn store_at(
    slots: &mut [String],
    index: usize,
    item: String,
) -> Result<(), DrillError> {
    let len = slots.len();
    let slot = slots
        .get_mut(index)
        .ok_or(DrillError::IndexOutOfRange { index, len })?;
    *slot = item;
    Ok(())
}

/// Formats `amount` with a numeric format code. `F<n>` is fixed-point
/// with `n` decimal places (two when `n` is omitted); any other code is
/// rejected.
pub fn format_amount(amount: f64, code: &str) -> Result<String, DrillError> {
    let unknown =
        || DrillError::Format(format!("unrecognized format code '{code}'"));

    let mut chars = code.chars();
    let kind = chars.next().ok_or_else(unknown)?;
    let digits = match chars.as_str() {
        "" => 2,
        rest => rest.parse::<usize>().map_err(|_| unknown())?,
    };

    match kind {
        'F' => Ok(format!("{amount:.digits$}")),
        _ => Err(unknown()),
    }
}

/// Part 1: provoke each fault in order, report what was caught, keep
/// going regardless of the outcome.
///
/// A probe that succeeds (the validator probe can, if the stream
/// happens to supply `1` or `2`) prints nothing.
pub fn run_demonstration<R: BufRead, W: Write>(
    input_handle: &mut R,
    out: &mut W,
) -> Result<(), DrillError> {
    for probe in probes() {
        debug!("probing {:?}", probe.kind);
        if let Err(caught) = trigger(probe.kind, input_handle, out) {
            writeln!(
                out,
                "Checking exception \"{}\": {}",
                probe.label, caught
            )?;
        }
    }
    Ok(())
}

/// Runs the operation matching `kind` inside the probe's error
/// boundary.
fn trigger<R: BufRead, W: Write>(
    kind: FaultKind,
    input_handle: &mut R,
    out: &mut W,
) -> Result<(), DrillError> {
    match kind {
        FaultKind::InvalidInput => {
            input::read_choice(input_handle, out).map(|_| ())
        },
        FaultKind::DivideByZero => {
            let value = 1;
            divide(value, value - value).map(|_| ())
        },
        FaultKind::NullArgument => parse_number(None).map(|_| ()),
        FaultKind::IndexOutOfRange => {
            let mut slots = [String::from("1"), String::from("2")];
            store_at(&mut slots, 2, String::from("3"))
        },
        FaultKind::Format => format_amount(169.32, "Q2").map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn divide_rejects_a_zero_divisor() {
        assert!(matches!(divide(1, 0), Err(DrillError::DivideByZero)));
        assert_eq!(divide(9, 3).unwrap(), 3);
    }

    #[test]
    fn parse_number_flags_a_missing_value() {
        assert!(matches!(parse_number(None), Err(DrillError::NullArgument)));
        assert_eq!(parse_number(Some("42")).unwrap(), 42);
    }

    #[test]
    fn parse_number_flags_garbage_as_a_format_error() {
        match parse_number(Some("4x")) {
            Err(DrillError::Format(message)) => {
                assert_eq!(message, "'4x' is not a number");
            },
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn store_at_writes_in_range() {
        let mut slots = [String::from("1"), String::from("2")];
        store_at(&mut slots, 1, String::from("3")).unwrap();
        assert_eq!(slots, ["1", "3"]);
    }

    #[test]
    fn store_at_rejects_a_write_past_the_end() {
        let mut slots = [String::from("1"), String::from("2")];
        let err = store_at(&mut slots, 2, String::from("3")).unwrap_err();
        assert_eq!(err.to_string(), "index 2 is out of range for an array of 2");
        assert_eq!(slots, ["1", "2"]);
    }

    #[test]
    fn format_amount_handles_fixed_point() {
        assert_eq!(format_amount(169.32, "F2").unwrap(), "169.32");
        assert_eq!(format_amount(169.32, "F0").unwrap(), "169");
        assert_eq!(format_amount(1.5, "F").unwrap(), "1.50");
    }

    #[test]
    fn format_amount_rejects_unknown_codes() {
        for code in ["Q2", "", "F-1", "Fx", "Z"] {
            assert!(
                matches!(format_amount(169.32, code), Err(DrillError::Format(_))),
                "code {code:?}"
            );
        }
    }

    #[test]
    fn demonstration_reports_all_five_when_input_is_bad() {
        let mut input = Cursor::new("nope\n");
        let mut out = Vec::new();
        run_demonstration(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Checking exception").count(), 5);
        assert!(text.contains(
            "Checking exception \"Division by zero\": attempt to divide by zero"
        ));
        assert!(text
            .contains("Checking exception \"Null argument\": value to parse was null"));
    }

    #[test]
    fn demonstration_reports_all_five_on_a_closed_stream() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        run_demonstration(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Checking exception").count(), 5);
    }

    #[test]
    fn demonstration_skips_a_probe_that_succeeds() {
        let mut input = Cursor::new("1\n");
        let mut out = Vec::new();
        run_demonstration(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Checking exception").count(), 4);
        assert!(!text.contains("\"Invalid input\""));
    }

    #[test]
    fn report_lines_follow_probe_order() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        run_demonstration(&mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let labels: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("Checking exception"))
            .collect();
        assert!(labels[0].contains("Invalid input"));
        assert!(labels[4].contains("Formatting error"));
    }
}
