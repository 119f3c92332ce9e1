use std::collections::HashSet;

use smilestudio::core::{Catalog, SlotSelector};
use tempfile::NamedTempFile;
use time::{Date, Month};

/// Builds a date, panicking on invalid input.
pub fn ymd(year: i32, month: u8, day: u8) -> Date {
    let month = Month::try_from(month).expect("valid month");
    Date::from_calendar_date(year, month, day).expect("valid date")
}

/// The labels offered by the default opening hours.
pub fn default_slot_labels() -> Vec<String> {
    Catalog::default().slot_labels()
}

/// A selector over the default labels with the given disabled set and default.
pub fn make_selector(disabled: &[&str], default_label: &str) -> SlotSelector {
    let disabled: HashSet<String> = disabled.iter().map(|s| s.to_string()).collect();
    SlotSelector::new(default_slot_labels(), &disabled, default_label)
}

/// Writes `contents` to a temporary `.toml` file.
/// The file is removed when the returned handle is dropped.
pub fn write_catalog(contents: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp catalog file");
    std::fs::write(file.path(), contents).expect("Failed to write catalog");
    file
}
