use std::sync::Arc;

use crate::core::{Catalog, Navigation, Tab};

/// Application-wide state handed to every screen: sidebar navigation and the clinic data.
///
/// Page-local state (calendar, slot selection, pagination, form fields) lives in the
/// screen itself and is dropped when another tab becomes active.
#[derive(Debug, Clone)]
pub struct AppState {
    pub navigation: Navigation,
    pub catalog: Arc<Catalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            navigation: Navigation::default(),
            catalog: Arc::new(Catalog::default()),
        }
    }
}

impl AppState {
    pub fn new(catalog: Catalog, initial_tab: Tab, collapsed: bool) -> Self {
        Self {
            navigation: Navigation::new(initial_tab, collapsed),
            catalog: Arc::new(catalog),
        }
    }
}
