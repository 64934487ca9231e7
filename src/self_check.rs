//! Built-in check of the date parser, run when no input file is given.

use crate::calendar::parse_temporal;
use log::{error, info};

/// Supported spellings and the stamp each must produce.
pub const STAMP_CASES: &[(&str, &str)] = &[
    ("Wed Nov 7 14:35 2018", "20181107T143500"),
    ("Thu Nov 8 2018", "20181108"),
    ("Nov 7 14:35 2018", "20181107T143500"),
    ("Nov 01 2018", "20181101"),
    ("Nov 1 2018", "20181101"),
    ("Nov 07 14:35 2018", "20181107T143500"),
    ("Nov 7 2:35PM 2018", "20181107T143500"),
    ("11/7/2018 2:35PM", "20181107T143500"),
];

/// Inputs that must be rejected.
pub const REJECT_CASES: &[&str] = &["foo"];

/// Run every case and return the number of failures.
pub fn run() -> usize {
    let mut failures = 0;

    for (input, expected) in STAMP_CASES {
        match parse_temporal(input) {
            Ok(value) if value.to_stamp() == *expected => {}
            Ok(value) => {
                error!("'{}': expected {}, got {}", input, expected, value);
                failures += 1;
            }
            Err(e) => {
                error!("'{}': expected {}, got error: {}", input, expected, e);
                failures += 1;
            }
        }
    }

    for input in REJECT_CASES {
        match parse_temporal(input) {
            Err(e) if e.value == *input => {}
            Err(e) => {
                error!("'{}': error carries '{}' instead of the input", input, e.value);
                failures += 1;
            }
            Ok(value) => {
                error!("'{}': expected a parse error, got {}", input, value);
                failures += 1;
            }
        }
    }

    let total = STAMP_CASES.len() + REJECT_CASES.len();
    info!("Self-check: {}/{} cases passed", total - failures, total);
    failures
}
