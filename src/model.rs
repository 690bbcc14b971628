//! Application state for the interactive comparer.
//!
//! This module contains:
//! - Text input fields with a cursor
//! - The current comparison settings
//! - The outcome of the last compare request
//!
//! The outcome is replaced on every compare; nothing else carries over
//! between requests.

use crate::compare::MismatchPolicy;
use crate::pipeline::{
    run_comparison, ComparisonError, ComparisonMode, ComparisonReport, ComparisonRequest,
};
use crate::translate::TranslatorKind;
use crate::ui::glyphs::{self, Glyphs};

/// A single-line text input with a cursor (in characters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    /// Creates a field holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Inserts pasted text, dropping line breaks.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert(c);
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Which input field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    First,
    Second,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::First => Field::Second,
            Field::Second => Field::First,
        }
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Typing into the focused field
    #[default]
    Editing,
    /// Command input mode (after pressing Esc)
    Command(String),
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    pub first: InputField,
    pub second: InputField,
    pub focus: Field,
    /// Current application mode
    pub mode: AppMode,
    pub comparison_mode: ComparisonMode,
    pub policy: MismatchPolicy,
    pub translator: TranslatorKind,
    /// Remove whitespace from the inputs before translating
    pub strip_whitespace: bool,
    /// Result of the last compare request, if any
    pub outcome: Option<Result<ComparisonReport, ComparisonError>>,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
    pub glyphs: Glyphs,
}

impl AppState {
    /// Creates a new application state using the given translator.
    pub fn new(translator: TranslatorKind) -> Self {
        Self {
            first: InputField::default(),
            second: InputField::default(),
            focus: Field::First,
            mode: AppMode::Editing,
            comparison_mode: ComparisonMode::default(),
            policy: MismatchPolicy::default(),
            translator,
            strip_whitespace: false,
            outcome: None,
            show_help: false,
            should_quit: false,
            status_message: None,
            glyphs: glyphs::ascii(),
        }
    }

    /// Pre-fills both input fields.
    pub fn with_inputs(mut self, first: &str, second: &str) -> Self {
        self.first = InputField::new(first);
        self.second = InputField::new(second);
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn field(&self, field: Field) -> &InputField {
        match field {
            Field::First => &self.first,
            Field::Second => &self.second,
        }
    }

    /// The focused input field.
    pub fn focused_mut(&mut self) -> &mut InputField {
        match self.focus {
            Field::First => &mut self.first,
            Field::Second => &mut self.second,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    /// Builds the request for the current inputs and settings.
    pub fn request(&self) -> ComparisonRequest {
        ComparisonRequest {
            first: self.first.text().to_string(),
            second: self.second.text().to_string(),
            mode: self.comparison_mode,
            policy: self.policy,
            strip_whitespace: self.strip_whitespace,
        }
    }

    /// Runs one compare request and stores the outcome.
    pub fn compare(&mut self) {
        let translator = match self.translator.build() {
            Ok(translator) => translator,
            Err(err) => {
                self.status_message = Some(err.to_string());
                return;
            }
        };
        let outcome = run_comparison(&self.request(), translator.as_ref());
        self.status_message = Some(match &outcome {
            Ok(_) => format!(
                "Compared by {} using {}",
                self.comparison_mode.label(),
                translator.name()
            ),
            Err(err) => err.to_string(),
        });
        self.outcome = Some(outcome);
    }

    /// Switches between frequency and positional comparison.
    ///
    /// Re-runs the comparison if a report is currently shown.
    pub fn toggle_comparison_mode(&mut self) {
        self.set_comparison_mode(self.comparison_mode.toggled());
    }

    pub fn set_comparison_mode(&mut self, mode: ComparisonMode) {
        self.comparison_mode = mode;
        if matches!(self.outcome, Some(Ok(_))) {
            self.compare();
        } else {
            self.status_message = Some(format!("Mode: {}", mode.label()));
        }
    }

    pub fn set_policy(&mut self, policy: MismatchPolicy) {
        self.policy = policy;
        if matches!(self.outcome, Some(Ok(_))) {
            self.compare();
        } else {
            self.status_message = Some(format!("Mismatch policy: {}", policy.label()));
        }
    }

    /// Turns whitespace stripping on or off.
    pub fn toggle_strip_whitespace(&mut self) {
        self.strip_whitespace = !self.strip_whitespace;
        if matches!(self.outcome, Some(Ok(_))) {
            self.compare();
        } else {
            let state = if self.strip_whitespace { "on" } else { "off" };
            self.status_message = Some(format!("Whitespace stripping: {}", state));
        }
    }

    /// Clears both fields and the last outcome.
    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
        self.focus = Field::First;
        self.outcome = None;
        self.status_message = None;
    }

    /// Swaps the two input fields.
    pub fn swap_inputs(&mut self) {
        std::mem::swap(&mut self.first, &mut self.second);
        if matches!(self.outcome, Some(Ok(_))) {
            self.compare();
        }
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            if cmd.pop().is_none() {
                self.mode = AppMode::Editing;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(cmd) = std::mem::take(&mut self.mode) {
            let mut words = cmd.split_whitespace();
            match (words.next(), words.next()) {
                (Some("q" | "quit"), None) => self.should_quit = true,
                (Some("h" | "help"), None) => self.show_help = true,
                (Some("c" | "compare"), None) => self.compare(),
                (Some("clear"), None) => self.clear(),
                (Some("swap"), None) => self.swap_inputs(),
                (Some("strip"), None) => self.toggle_strip_whitespace(),
                (Some("mode"), Some(name)) => match ComparisonMode::parse(name) {
                    Some(mode) => self.set_comparison_mode(mode),
                    None => self.status_message = Some(format!("Unknown mode: {}", name)),
                },
                (Some("policy"), Some(name)) => match MismatchPolicy::parse(name) {
                    Some(policy) => self.set_policy(policy),
                    None => self.status_message = Some(format!("Unknown policy: {}", name)),
                },
                (None, _) => {}
                _ => self.status_message = Some(format!("Unknown command: {}", cmd.trim())),
            }
        }
        self.mode = AppMode::Editing;
    }

    /// Cancels command mode and returns to editing.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Editing;
    }

    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{ComparisonResult, Side};

    #[test]
    fn test_input_editing() {
        let mut field = InputField::new("ATG");
        assert_eq!(field.cursor(), 3);
        field.move_left();
        field.insert('C');
        assert_eq!(field.text(), "ATCG");
        field.move_home();
        field.delete();
        assert_eq!(field.text(), "TCG");
        field.backspace(); // nothing before the cursor
        assert_eq!(field.text(), "TCG");
        field.move_end();
        field.backspace();
        assert_eq!(field.text(), "TC");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_input_multibyte() {
        let mut field = InputField::new("aé");
        field.backspace();
        assert_eq!(field.text(), "a");
        field.insert('ü');
        field.move_left();
        field.insert('x');
        assert_eq!(field.text(), "axü");
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_paste_drops_line_breaks() {
        let mut field = InputField::default();
        field.insert_str("ATG\r\nGCC\n");
        assert_eq!(field.text(), "ATGGCC");
    }

    #[test]
    fn test_compare_success() {
        let mut state =
            AppState::new(TranslatorKind::CodonTable).with_inputs("ATGGCCATT", "ATGGCAATT");
        state.comparison_mode = ComparisonMode::Positional;
        state.compare();
        match &state.outcome {
            Some(Ok(report)) => match &report.result {
                ComparisonResult::Positional(cmp) => assert_eq!(cmp.matches, 3),
                other => panic!("unexpected result: {:?}", other),
            },
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(state.status_message.as_deref().unwrap().contains("positional"));
    }

    #[test]
    fn test_compare_missing_input() {
        let mut state = AppState::new(TranslatorKind::CodonTable).with_inputs("ATG", "");
        state.compare();
        assert_eq!(
            state.outcome,
            Some(Err(ComparisonError::MissingInput(Side::Second)))
        );
    }

    #[test]
    fn test_toggle_mode_recompares() {
        let mut state = AppState::new(TranslatorKind::CodonTable).with_inputs("ATG", "ATG");
        state.compare();
        assert!(matches!(
            state.outcome,
            Some(Ok(ComparisonReport { result: ComparisonResult::Frequency(_), .. }))
        ));
        state.toggle_comparison_mode();
        assert!(matches!(
            state.outcome,
            Some(Ok(ComparisonReport { result: ComparisonResult::Positional(_), .. }))
        ));
    }

    #[test]
    fn test_commands() {
        let mut state = AppState::new(TranslatorKind::CodonTable).with_inputs("ATG", "TAA");

        state.enter_command_mode();
        for c in "mode pos".chars() {
            state.command_input(c);
        }
        state.execute_command();
        assert_eq!(state.comparison_mode, ComparisonMode::Positional);
        assert_eq!(state.mode, AppMode::Editing);

        state.enter_command_mode();
        for c in "policy first".chars() {
            state.command_input(c);
        }
        state.execute_command();
        assert_eq!(state.policy, MismatchPolicy::FirstLength);

        state.enter_command_mode();
        for c in "swap".chars() {
            state.command_input(c);
        }
        state.execute_command();
        assert_eq!(state.first.text(), "TAA");

        state.enter_command_mode();
        for c in "bogus".chars() {
            state.command_input(c);
        }
        state.execute_command();
        assert_eq!(state.status_message.as_deref(), Some("Unknown command: bogus"));

        state.enter_command_mode();
        state.command_input('q');
        state.execute_command();
        assert!(state.should_quit);
    }

    #[test]
    fn test_strip_command_recompares() {
        let mut state =
            AppState::new(TranslatorKind::CodonTable).with_inputs("ATG GCC", "ATGGCC");
        state.comparison_mode = ComparisonMode::Positional;
        state.compare();
        let matches = |state: &AppState| match &state.outcome {
            Some(Ok(ComparisonReport {
                result: ComparisonResult::Positional(cmp),
                ..
            })) => cmp.matches,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(matches(&state), 1);

        state.enter_command_mode();
        for c in "strip".chars() {
            state.command_input(c);
        }
        state.execute_command();
        assert!(state.strip_whitespace);
        assert!(state.request().strip_whitespace);
        assert_eq!(matches(&state), 2);
    }

    #[test]
    fn test_command_backspace_leaves_command_mode() {
        let mut state = AppState::new(TranslatorKind::CodonTable);
        state.enter_command_mode();
        state.command_input('q');
        state.command_backspace();
        assert_eq!(state.mode, AppMode::Command(String::new()));
        state.command_backspace();
        assert_eq!(state.mode, AppMode::Editing);
    }

    #[test]
    fn test_clear() {
        let mut state = AppState::new(TranslatorKind::CodonTable).with_inputs("ATG", "ATG");
        state.focus_next();
        state.compare();
        state.clear();
        assert!(state.first.is_empty() && state.second.is_empty());
        assert!(state.outcome.is_none());
        assert_eq!(state.focus, Field::First);
    }

    #[test]
    fn test_bad_genetic_code_reports_status() {
        let mut state = AppState::new(TranslatorKind::GeneticCode(99)).with_inputs("ATG", "ATG");
        state.compare();
        assert!(state.outcome.is_none());
        assert_eq!(state.status_message.as_deref(), Some("Unknown genetic code: 99"));
    }
}
