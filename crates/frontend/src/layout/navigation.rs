use leptos::prelude::*;
use once_cell::sync::Lazy;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Rooms,
    Bookings,
    Billing,
    Inventory,
    Menu,
    Reports,
}

/// One sidebar entry.
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar group: front desk, administration, dining.
pub struct NavGroup {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

pub static NAV_GROUPS: Lazy<Vec<NavGroup>> = Lazy::new(|| {
    vec![
        NavGroup {
            title: "Front desk",
            items: &[
                NavItem { page: Page::Rooms, label: "Rooms", icon: "rooms" },
                NavItem { page: Page::Bookings, label: "Bookings", icon: "bookings" },
            ],
        },
        NavGroup {
            title: "Administration",
            items: &[
                NavItem { page: Page::Billing, label: "Billing", icon: "billing" },
                NavItem { page: Page::Inventory, label: "Inventory", icon: "inventory" },
                NavItem { page: Page::Reports, label: "Reports", icon: "reports" },
            ],
        },
        NavGroup {
            title: "Dining",
            items: &[NavItem { page: Page::Menu, label: "Menu", icon: "menu" }],
        },
    ]
});

/// Navigation state shared between the sidebar and the center pane.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub current: RwSignal<Page>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Page::default()),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.current.set(page);
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}
