//! Integration tests for time-slot generation and selection.

mod common;

use smilestudio::core::slots::{half_hour_labels, slot_label};
use time::macros::time;

use common::*;

#[test]
fn test_default_labels() {
    let labels = default_slot_labels();
    assert_eq!(labels.len(), 18);
    assert_eq!(labels[0], "9:00 AM");
    assert_eq!(labels[3], "10:30 AM");
    assert_eq!(labels[6], "12:00 PM");
    assert_eq!(labels[8], "1:00 PM");
    assert_eq!(labels[17], "5:30 PM");
}

#[test]
fn test_slot_label_edges() {
    assert_eq!(slot_label(time!(0:00)), "12:00 AM");
    assert_eq!(slot_label(time!(11:30)), "11:30 AM");
    assert_eq!(slot_label(time!(12:30)), "12:30 PM");
    assert_eq!(slot_label(time!(23:30)), "11:30 PM");
}

#[test]
fn test_half_hour_labels_window() {
    assert_eq!(
        half_hour_labels(time!(8:30), time!(10:00)),
        vec!["8:30 AM", "9:00 AM", "9:30 AM"]
    );
    assert!(half_hour_labels(time!(10:00), time!(10:00)).is_empty());
    // a trailing partial half hour is not offered
    assert_eq!(half_hour_labels(time!(9:00), time!(9:45)), vec!["9:00 AM"]);
    assert!(half_hour_labels(time!(18:00), time!(9:00)).is_empty());
}

#[test]
fn test_default_selection() {
    let selector = Catalog::default().slot_selector();
    assert_eq!(selector.selected_label(), Some("10:30 AM"));
    let disabled: Vec<&str> = selector
        .slots()
        .iter()
        .filter(|s| s.is_disabled)
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(disabled, vec!["12:00 PM", "5:30 PM"]);
}

#[test]
fn test_disabled_slot_is_rejected() {
    let mut selector = make_selector(&["12:00 PM", "5:30 PM"], "10:30 AM");
    assert!(!selector.select("12:00 PM"));
    assert_eq!(selector.selected_label(), Some("10:30 AM"));
    assert!(!selector.select("5:30 PM"));
    assert_eq!(selector.selected_label(), Some("10:30 AM"));
}

#[test]
fn test_select_available_and_unknown() {
    let mut selector = make_selector(&["12:00 PM"], "10:30 AM");
    assert!(selector.select("2:00 PM"));
    assert_eq!(selector.selected_label(), Some("2:00 PM"));
    assert!(selector.is_selected("2:00 PM"));
    assert!(!selector.is_selected("10:30 AM"));

    assert!(!selector.select("7:00 PM"));
    assert_eq!(selector.selected_label(), Some("2:00 PM"));
}

#[test]
fn test_disabled_default_selects_nothing() {
    let selector = make_selector(&["10:30 AM"], "10:30 AM");
    assert_eq!(selector.selected(), None);
}
