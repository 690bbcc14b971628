//! Keyboard event handling.
//!
//! Editing mode:
//! - printable keys: type into the focused field
//! - `Tab` / `Shift+Tab`: switch field
//! - `Enter`: compare
//! - `F2`: toggle frequency / positional comparison
//! - `F1`: show help
//! - `Ctrl+L`: clear the focused field
//! - `Esc`: enter command mode
//!   - `:q` or `:quit`: quit the application
//!   - `:mode freq|pos`, `:policy first|longer|compared`
//!   - `:clear`, `:swap`, `:compare`, `:help`
//! - `Ctrl+C`: quit from anywhere

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Type a character into the focused field
    InsertChar(char),
    /// Insert pasted text into the focused field
    Paste(String),
    /// Delete before the cursor
    Backspace,
    /// Delete under the cursor
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Focus the other field
    NextField,
    /// Clear the focused field
    ClearField,
    /// Run the comparison
    Compare,
    /// Toggle frequency / positional comparison
    ToggleMode,
    /// Show the help overlay
    ShowHelp,
    /// Dismiss the help overlay
    DismissHelp,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for terminal events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, mode, show_help)
        }
        Event::Paste(text) if matches!(mode, AppMode::Editing) && !show_help => Action::Paste(text),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        AppMode::Editing => handle_editing_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events while typing into a field.
fn handle_editing_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') | KeyCode::Char('u') => Action::ClearField,
            KeyCode::Char('a') => Action::CursorHome,
            KeyCode::Char('e') => Action::CursorEnd,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter => Action::Compare,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Action::NextField,
        KeyCode::F(1) => Action::ShowHelp,
        KeyCode::F(2) => Action::ToggleMode,
        KeyCode::Esc => Action::EnterCommandMode,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::InsertChar(c),
        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::InsertChar(c) => {
            state.focused_mut().insert(c);
        }
        Action::Paste(text) => {
            state.focused_mut().insert_str(&text);
        }
        Action::Backspace => {
            state.focused_mut().backspace();
        }
        Action::Delete => {
            state.focused_mut().delete();
        }
        Action::CursorLeft => {
            state.focused_mut().move_left();
        }
        Action::CursorRight => {
            state.focused_mut().move_right();
        }
        Action::CursorHome => {
            state.focused_mut().move_home();
        }
        Action::CursorEnd => {
            state.focused_mut().move_end();
        }
        Action::NextField => {
            state.focus_next();
        }
        Action::ClearField => {
            state.focused_mut().clear();
        }
        Action::Compare => {
            state.compare();
        }
        Action::ToggleMode => {
            state.toggle_comparison_mode();
        }
        Action::ShowHelp => {
            state.show_help = true;
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::EnterCommandMode => {
            state.enter_command_mode();
        }
        Action::CommandChar(c) => {
            state.command_input(c);
        }
        Action::ExecuteCommand => {
            state.execute_command();
        }
        Action::CancelCommand => {
            state.cancel_command();
        }
        Action::CommandBackspace => {
            state.command_backspace();
        }
        Action::Resize(_, _) => {
            // Layout is recomputed on every draw
        }
    }

    !state.should_quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::pipeline::ComparisonMode;
    use crate::translate::TranslatorKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_editing_keys() {
        let mode = AppMode::Editing;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('A')), &mode, false),
            Action::InsertChar('A')
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::Compare);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &mode, false), Action::NextField);
        assert_eq!(handle_key_event(key(KeyCode::BackTab), &mode, false), Action::NextField);
        assert_eq!(handle_key_event(key(KeyCode::F(2)), &mode, false), Action::ToggleMode);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::EnterCommandMode);
        assert_eq!(handle_key_event(key(KeyCode::Backspace), &mode, false), Action::Backspace);
    }

    #[test]
    fn test_ctrl_keys() {
        let mode = AppMode::Editing;
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl('c'), &mode, false), Action::Quit);
        assert_eq!(handle_key_event(ctrl('l'), &mode, false), Action::ClearField);
        assert_eq!(handle_key_event(ctrl('x'), &mode, false), Action::None);
        // Ctrl+C also quits from the help overlay
        assert_eq!(handle_key_event(ctrl('c'), &mode, true), Action::Quit);
    }

    #[test]
    fn test_command_mode_input() {
        let mode = AppMode::Command(String::new());
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &mode, false),
            Action::CommandChar('q')
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mode, false), Action::ExecuteCommand);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, false), Action::CancelCommand);
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &mode, false),
            Action::CommandBackspace
        );
    }

    #[test]
    fn test_dismiss_help() {
        let mode = AppMode::Editing;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &mode, true), Action::DismissHelp);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mode, true), Action::DismissHelp);
    }

    #[test]
    fn test_paste_and_release_events() {
        let mode = AppMode::Editing;
        assert_eq!(
            handle_event(Event::Paste("ATG".into()), &mode, false),
            Action::Paste("ATG".into())
        );
        assert_eq!(
            handle_event(Event::Paste("ATG".into()), &AppMode::Command(String::new()), false),
            Action::None
        );
        let mut release = key(KeyCode::Char('A'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(release), &mode, false), Action::None);
        assert_eq!(handle_event(Event::Resize(80, 24), &mode, false), Action::Resize(80, 24));
    }

    #[test]
    fn test_typing_then_compare() {
        let mut state = AppState::new(TranslatorKind::CodonTable);
        for c in "atggcc".chars() {
            assert!(apply_action(&mut state, Action::InsertChar(c)));
        }
        apply_action(&mut state, Action::NextField);
        apply_action(&mut state, Action::Paste("ATGGCA\n".into()));
        assert_eq!(state.focus, Field::Second);
        assert_eq!(state.second.text(), "ATGGCA");

        apply_action(&mut state, Action::ToggleMode);
        assert_eq!(state.comparison_mode, ComparisonMode::Positional);
        apply_action(&mut state, Action::Compare);
        assert!(matches!(state.outcome, Some(Ok(_))));

        assert!(!apply_action(&mut state, Action::Quit));
    }
}
