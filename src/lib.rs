pub mod core;
pub mod models;
pub mod text;

pub use crate::core::{
    CalendarCell, CalendarState, Catalog, MonthGrid, Navigation, Paginator, SlotSelector, Tab,
    TimeSlot,
};
pub use models::{Doctor, Review};

#[cfg(feature = "gui")]
pub mod gui;
