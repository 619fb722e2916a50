#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the mobile navigation drawer.
///
/// Provided via context as `RwSignal<MenuState>` by the root component so
/// the trigger button (in the shell header) and the overlay itself share
/// one flag. Scoped to the provider's lifetime, never a true global.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the drawer is currently shown.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Transition closed -> open. Idempotent.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Transition open -> closed. Idempotent: closing an already-closed
    /// menu is a no-op, so backdrop clicks and item selections can both
    /// fire without coordination.
    pub fn close(&mut self) {
        self.open = false;
    }
}
