use std::collections::HashSet;

use time::{Duration, Time, macros::time};

pub const DEFAULT_OPEN: Time = time!(9:00);
pub const DEFAULT_CLOSE: Time = time!(18:00);
pub const SLOT_MINUTES: i64 = 30;

/// A bookable interval, identified by its start label ("10:30 AM").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub is_disabled: bool,
}

/// 12-hour label without a leading zero, e.g. "9:00 AM", "12:30 PM".
pub fn slot_label(start: Time) -> String {
    let (hour, minute, _) = start.as_hms();
    let period = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {period}")
}

/// Start labels of every full half-hour slot that ends by `close`.
pub fn half_hour_labels(open: Time, close: Time) -> Vec<String> {
    let span = (close - open).whole_minutes();
    if span <= 0 {
        return Vec::new();
    }
    (0..span / SLOT_MINUTES)
        .map(|i| slot_label(open + Duration::minutes(i * SLOT_MINUTES)))
        .collect()
}

/// Fixed slot list for one business day with a single current selection.
///
/// Disabled slots can never become the selection; attempts are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelector {
    slots: Vec<TimeSlot>,
    selected: Option<usize>,
}

impl SlotSelector {
    pub fn new<I, S>(labels: I, disabled: &HashSet<String>, default_label: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<TimeSlot> = labels
            .into_iter()
            .map(Into::into)
            .map(|label| TimeSlot {
                is_disabled: disabled.contains(&label),
                label,
            })
            .collect();
        let selected = slots
            .iter()
            .position(|s| s.label == default_label && !s.is_disabled);
        if selected.is_none() {
            log::warn!("default slot {default_label:?} is not offered; no slot selected");
        }
        Self { slots, selected }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected(&self) -> Option<&TimeSlot> {
        self.selected.and_then(|i| self.slots.get(i))
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected().map(|s| s.label.as_str())
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected_label() == Some(label)
    }

    /// Select the slot with `label`. Unknown or disabled labels leave the selection unchanged.
    pub fn select(&mut self, label: &str) -> bool {
        match self.slots.iter().position(|s| s.label == label) {
            Some(i) if self.slots[i].is_disabled => {
                log::debug!("ignoring disabled slot {label}");
                false
            }
            Some(i) => {
                log::debug!("selected slot {label}");
                self.selected = Some(i);
                true
            }
            None => {
                log::debug!("ignoring unknown slot {label}");
                false
            }
        }
    }
}
