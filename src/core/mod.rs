pub mod calendar;
pub mod catalog;
pub mod navigation;
pub mod pagination;
pub mod slots;

pub use calendar::{CalendarCell, CalendarError, CalendarState, MonthGrid};
pub use catalog::{Catalog, CatalogError, OpeningHours};
pub use navigation::{Navigation, Tab};
pub use pagination::Paginator;
pub use slots::{SlotSelector, TimeSlot};
