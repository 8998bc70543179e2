//! Human-readable sequential numbers

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::clock::Clock;

static EQUIPMENT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"EQ-(\d+)").expect("equipment code pattern is valid"));

/// Builds `PREFIX-YYYY-NNN` numbers.
///
/// The sequence is the collection size plus one at creation time, so numbers
/// are only unique while creations are not interleaved.
#[derive(Clone)]
pub struct Numbering {
    fixed_year: Option<i32>,
    clock: Arc<dyn Clock>,
}

impl Numbering {
    pub fn new(fixed_year: Option<i32>, clock: Arc<dyn Clock>) -> Self {
        Self { fixed_year, clock }
    }

    pub fn year(&self) -> i32 {
        self.fixed_year.unwrap_or_else(|| self.clock.now().year())
    }

    /// `existing` is the number of records already in the collection
    pub fn next(&self, prefix: &str, existing: usize) -> String {
        format!("{}-{}-{:03}", prefix, self.year(), existing + 1)
    }
}

/// Code following `last` (`EQ-007` gives `EQ-008`); `EQ-001` when there is
/// no usable previous code or the sequence is exhausted
pub fn next_equipment_code(last: Option<&str>) -> String {
    let next = last
        .and_then(|code| EQUIPMENT_CODE.captures(code))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .and_then(|n| n.checked_add(1))
        .unwrap_or(1);
    format!("EQ-{:03}", next)
}
