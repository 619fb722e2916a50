/// UI chrome state shared across the shell.
///
/// Kept separate from [`crate::state::menu::MenuState`] so the mobile
/// drawer flag stays a narrowly-scoped context value of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
