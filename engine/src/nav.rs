//! Navigation drawer state.

use qrfolio_types::content::{NAV_ITEMS, NavItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks a nav item by zero-based index and closes the drawer.
    ///
    /// Out-of-range indices leave the drawer open and return `None`.
    pub fn choose(&mut self, index: usize) -> Option<NavItem> {
        let item = NAV_ITEMS.get(index).copied()?;
        self.open = false;
        Some(item)
    }
}
