use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn open_transitions_closed_to_open() {
    let mut menu = MenuState::default();
    menu.open();
    assert!(menu.is_open());
}

#[test]
fn close_transitions_open_to_closed() {
    let mut menu = MenuState::default();
    menu.open();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn close_when_already_closed_is_a_no_op() {
    let mut menu = MenuState::default();
    menu.close();
    assert_eq!(menu, MenuState::default());
}

#[test]
fn open_is_idempotent() {
    let mut menu = MenuState::default();
    menu.open();
    menu.open();
    assert!(menu.is_open());
}
