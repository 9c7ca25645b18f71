//! Input handling for the interactive player.
//!
//! Translates crossterm events into page operations and returns a control
//! flow signal for the main loop.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::page::Page;
use crate::sequencer::ControlKind;

/// Rows reserved below the page for the key hints.
pub const FOOTER_ROWS: u16 = 1;

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: isize = 3;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, page: &mut Page) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, page),
        Event::Mouse(mouse) => {
            handle_mouse_event(mouse, page);
            InputResult::Continue
        }
        Event::Resize(_, rows) => {
            page.set_viewport(rows.saturating_sub(FOOTER_ROWS) as usize);
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}

pub fn handle_key_event(key: KeyEvent, page: &mut Page) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }
        KeyCode::Char('f') => {
            page.activate(ControlKind::FastForward);
        }
        KeyCode::Char('r') => {
            page.activate(ControlKind::Restart);
        }
        KeyCode::Tab => page.focus_next(),
        KeyCode::BackTab => page.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') => page.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => page.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => page.page_down(),
        KeyCode::PageUp => page.page_up(),
        KeyCode::Home | KeyCode::Char('g') => page.scroll_home(),
        KeyCode::End | KeyCode::Char('G') => page.scroll_end(),
        _ => {}
    }
    InputResult::Continue
}

pub fn handle_mouse_event(mouse: MouseEvent, page: &mut Page) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            page.click(mouse.column as usize, mouse.row as usize);
        }
        MouseEventKind::ScrollDown => page.scroll_by(WHEEL_ROWS),
        MouseEventKind::ScrollUp => page.scroll_by(-WHEEL_ROWS),
        _ => {}
    }
}
