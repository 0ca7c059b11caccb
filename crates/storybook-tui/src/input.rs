use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{App, Mode};
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    // Letter page scrolling
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    ShowHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let action = keymap
        .lookup(key.code, key.modifiers)
        .cloned()
        .unwrap_or(Action::None);

    match app.mode {
        // Any key closes help, but quitting still works
        Mode::Help => match action {
            Action::Quit => Action::Quit,
            _ => Action::ExitMode,
        },
        Mode::Normal => action,
    }
}

/// Handle a mouse press: clicks on the visible Prev/Next controls navigate
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::None;
    }
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let position = Position::new(mouse.column, mouse.row);
    if app.controls.prev.is_some_and(|r| r.contains(position)) {
        Action::PrevPage
    } else if app.controls.next.is_some_and(|r| r.contains(position)) {
        Action::NextPage
    } else {
        Action::None
    }
}
