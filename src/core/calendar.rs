use time::{Date, Month, macros::date};

/// Date flagged as the promotional highlight, regardless of selection.
pub const PROMO_DATE: Date = date!(2024 - 07 - 05);

pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_MONTH_INDEX: u8 = 6;
pub const DEFAULT_SELECTED: Date = date!(2024 - 07 - 05);

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Monday first to match the grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// One grid position. `date` is `None` for padding before the 1st and after the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: Option<Date>,
    pub is_selected: bool,
    pub is_highlighted: bool,
}

impl CalendarCell {
    pub fn padding() -> Self {
        Self {
            date: None,
            is_selected: false,
            is_highlighted: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    /// Day-of-month label, empty for padding.
    pub fn label(&self) -> String {
        self.date.map(|d| d.day().to_string()).unwrap_or_default()
    }
}

/// Derived month layout; length is always a multiple of 7.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthGrid {
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of seven cells, Monday to Sunday.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_padding()).count()
    }

    pub fn selected(&self) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.is_selected)
    }
}

/// Zero-based month index to `time::Month`, clamping out-of-range input.
pub fn month_from_index(month_index: u8) -> Month {
    match Month::try_from(month_index.min(11) + 1) {
        Ok(month) => month,
        Err(_) => Month::December,
    }
}

pub fn month_index_of(date: Date) -> u8 {
    u8::from(date.month()) - 1
}

/// Gregorian month length, leap years included.
pub fn days_in_month(year: i32, month_index: u8) -> u8 {
    time::util::days_in_year_month(year, month_from_index(month_index))
}

/// Column of the 1st of the month with Monday = 0 ... Sunday = 6.
pub fn first_weekday(year: i32, month_index: u8) -> Option<u8> {
    Date::from_calendar_date(year, month_from_index(month_index), 1)
        .ok()
        .map(|first| first.weekday().number_days_from_monday())
}

/// Two dates are the same day iff year, month and day all match. `None` never matches.
pub fn is_same_day(a: Option<Date>, b: Option<Date>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.year() == b.year() && a.month() == b.month() && a.day() == b.day(),
        _ => false,
    }
}

pub fn is_promo_date(date: Date) -> bool {
    is_same_day(Some(date), Some(PROMO_DATE))
}

pub fn month_name(month_index: u8) -> &'static str {
    MONTH_NAMES[usize::from(month_index.min(11))]
}

/// "July 5, 2024"
pub fn format_long_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        month_name(month_index_of(date)),
        date.day(),
        date.year()
    )
}

/// Derive the grid for a month: Monday-first leading blanks, one cell per day,
/// then trailing blanks up to a whole week. Calling it twice with the same
/// arguments yields equal grids.
pub fn month_grid(year: i32, month_index: u8, selected: Option<Date>) -> MonthGrid {
    let month = month_from_index(month_index);
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return MonthGrid::default();
    };
    let leading = usize::from(first.weekday().number_days_from_monday());
    let days = usize::from(time::util::days_in_year_month(year, month));

    let mut cells = Vec::with_capacity(42);
    cells.extend(std::iter::repeat_n(CalendarCell::padding(), leading));
    cells.extend(
        std::iter::successors(Some(first), |d| d.next_day())
            .take(days)
            .map(|date| CalendarCell {
                date: Some(date),
                is_selected: is_same_day(Some(date), selected),
                is_highlighted: is_promo_date(date),
            }),
    );
    while cells.len() % 7 != 0 {
        cells.push(CalendarCell::padding());
    }
    log::trace!(
        "month grid {year}-{:02}: {leading} leading blanks, {days} days, {} cells",
        u8::from(month),
        cells.len()
    );
    MonthGrid { cells }
}

/// Visible month plus the selected date for the booking calendar.
///
/// Month navigation never crosses a year boundary: moving before January or
/// after December stays on the boundary month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    year: i32,
    month_index: u8,
    selected: Option<Date>,
}

impl Default for CalendarState {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month_index: DEFAULT_MONTH_INDEX,
            selected: Some(DEFAULT_SELECTED),
        }
    }
}

impl CalendarState {
    pub fn new(year: i32, month_index: u8) -> Result<Self, CalendarError> {
        if Date::from_calendar_date(year, Month::January, 1).is_err()
            || Date::from_calendar_date(year, Month::December, 31).is_err()
        {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(Self {
            year,
            month_index: month_index.min(11),
            selected: None,
        })
    }

    /// Show `year`/`month_index`, keeping the default selection when it falls in that month.
    pub fn for_month(year: i32, month_index: u8) -> Result<Self, CalendarError> {
        let calendar = Self::new(year, month_index)?;
        if DEFAULT_SELECTED.year() == calendar.year
            && month_index_of(DEFAULT_SELECTED) == calendar.month_index
        {
            return Ok(calendar.with_selected(DEFAULT_SELECTED));
        }
        Ok(calendar)
    }

    pub fn with_selected(mut self, date: Date) -> Self {
        self.selected = Some(date);
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_index(&self) -> u8 {
        self.month_index
    }

    pub fn selected_date(&self) -> Option<Date> {
        self.selected
    }

    /// Shift the visible month by `delta`, clamped to `[0, 11]`.
    /// Returns whether the visible month changed.
    pub fn set_month(&mut self, delta: i32) -> bool {
        let target = i32::from(self.month_index).saturating_add(delta).clamp(0, 11);
        let target = u8::try_from(target).unwrap_or(self.month_index);
        if target == self.month_index {
            if delta != 0 {
                log::debug!(
                    "month navigation by {delta} clamped at {}",
                    month_name(self.month_index)
                );
            }
            return false;
        }
        log::debug!(
            "calendar month {} -> {}",
            month_name(self.month_index),
            month_name(target)
        );
        self.month_index = target;
        true
    }

    pub fn prev_month(&mut self) -> bool {
        self.set_month(-1)
    }

    pub fn next_month(&mut self) -> bool {
        self.set_month(1)
    }

    /// Select a date; padding cells (`None`) are ignored.
    pub fn select_date(&mut self, date: Option<Date>) -> bool {
        let Some(date) = date else {
            log::debug!("ignoring selection of a padding cell");
            return false;
        };
        log::debug!("selected date {date}");
        self.selected = Some(date);
        true
    }

    pub fn month_grid(&self) -> MonthGrid {
        month_grid(self.year, self.month_index, self.selected)
    }

    pub fn month_label(&self) -> &'static str {
        month_name(self.month_index)
    }

    /// "July 2024"
    pub fn title(&self) -> String {
        format!("{} {}", self.month_label(), self.year)
    }
}
