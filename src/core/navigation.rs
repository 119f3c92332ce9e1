use std::fmt;

/// The six pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Tab {
    Home,
    #[default]
    Services,
    Doctors,
    Reviews,
    Contact,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Services,
        Tab::Doctors,
        Tab::Reviews,
        Tab::Contact,
        Tab::Profile,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Services => "services",
            Tab::Doctors => "doctors",
            Tab::Reviews => "reviews",
            Tab::Contact => "contact",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Services => "Services",
            Tab::Doctors => "Doctors",
            Tab::Reviews => "Reviews",
            Tab::Contact => "Contact",
            Tab::Profile => "Profile",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sidebar state: exactly one active tab and the collapsed flag. No history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    active: Tab,
    collapsed: bool,
}

impl Navigation {
    pub fn new(active: Tab, collapsed: bool) -> Self {
        Self { active, collapsed }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Switch unconditionally. Returns whether the active tab changed.
    pub fn set_active(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        if changed {
            log::debug!("active tab {} -> {}", self.active.key(), tab.key());
        }
        self.active = tab;
        changed
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        log::debug!("sidebar collapsed = {}", self.collapsed);
    }
}
