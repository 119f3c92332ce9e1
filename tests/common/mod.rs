mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from smilestudio for tests
pub use smilestudio::core::{
    CalendarCell, CalendarState, Catalog, MonthGrid, Navigation, Paginator, SlotSelector, Tab,
};
