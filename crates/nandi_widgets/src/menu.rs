//! Mobile navigation menu toggle

use nandi_core::Tracked;

#[derive(Debug, Default)]
pub struct MenuToggle {
    open: Tracked<bool>,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu and return the new state
    pub fn toggle(&mut self) -> bool {
        let open = !*self.open.get();
        self.open.set(open);
        open
    }

    /// Close the menu (following a menu link). Skips the write if already closed.
    pub fn close(&mut self) -> bool {
        self.open.set_if_changed(false)
    }

    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    pub fn writes(&self) -> u64 {
        self.open.writes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = MenuToggle::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
        assert_eq!(menu.writes(), 2);
    }
}
