//! Plain-text renderings of the booking derivations, used by the command line.

use std::fmt::Write;

use crate::{
    core::{
        CalendarState, Paginator, SlotSelector,
        calendar::{WEEKDAY_HEADERS, format_long_date},
    },
    models::Doctor,
};

/// Month title, weekday header and one line per week. The selected day is
/// bracketed and the promotional day is starred.
pub fn month(calendar: &CalendarState) -> String {
    let grid = calendar.month_grid();
    let mut out = String::new();
    let _ = writeln!(out, "{:^35}", calendar.title());
    for day in WEEKDAY_HEADERS {
        let _ = write!(out, "{day:^5}");
    }
    out.push('\n');
    for week in grid.weeks() {
        for cell in week {
            let label = cell.label();
            let cell_text = if cell.is_selected {
                format!("[{label}]")
            } else if cell.is_highlighted {
                format!("*{label}")
            } else {
                label
            };
            let _ = write!(out, "{cell_text:^5}");
        }
        out.push('\n');
    }
    if let Some(date) = calendar.selected_date() {
        let _ = writeln!(out, "Selected: {}", format_long_date(date));
    }
    out
}

/// One directory page followed by the page indicator.
pub fn doctors_page(doctors: &[Doctor], paginator: &Paginator) -> String {
    let mut out = String::new();
    for doctor in paginator.slice(doctors) {
        let _ = writeln!(
            out,
            "{:>3}  {:<2}  {:<22} {}",
            doctor.id,
            doctor.initials(),
            doctor.name,
            doctor.email
        );
    }
    let _ = writeln!(
        out,
        "Page {} of {}",
        paginator.page(),
        paginator.total_pages()
    );
    out
}

/// Every slot on its own line, flagged as selected or unavailable.
pub fn slots(selector: &SlotSelector) -> String {
    let mut out = String::new();
    for slot in selector.slots() {
        let flag = if selector.is_selected(&slot.label) {
            "selected"
        } else if slot.is_disabled {
            "unavailable"
        } else {
            ""
        };
        let _ = writeln!(out, "{:>8}  {flag}", slot.label);
    }
    out
}
