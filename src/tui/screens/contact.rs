//! Contact form screen — live-validated input plus the last submission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ContactForm, FieldName, Snapshot, SubmitOutcome};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, draw_form};

/// State for the contact form screen.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    contact: ContactForm,
    focus: FieldName,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    /// Creates the screen with an empty form and focus on the first name.
    pub fn new() -> Self {
        Self {
            contact: ContactForm::new(),
            focus: FieldName::FirstName,
        }
    }

    /// Returns the focused field.
    pub fn focus(&self) -> FieldName {
        self.focus
    }

    /// Returns the underlying form model.
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Builds the form view for rendering.
    pub fn form(&self) -> Form {
        Form::from_contact(&self.contact, self.focus)
    }

    fn submit(&mut self) -> Action {
        match self.contact.submit() {
            SubmitOutcome::Accepted(_) => {}
            SubmitOutcome::Rejected { errors } => {
                // Jump to the first offending field.
                if let Some((field, _)) = errors.iter().next() {
                    self.focus = field;
                }
            }
        }
        Action::None
    }
}

impl ScreenState for ContactFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.contact.push_char(self.focus, ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.contact.pop_char(self.focus);
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

fn submitted_lines(snapshot: &Snapshot) -> Vec<Line<'_>> {
    let label_style = Style::default().fg(Color::Yellow);
    snapshot
        .display_rows()
        .into_iter()
        .map(|(field, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", field.label()), label_style),
                Span::raw(value),
            ])
        })
        .collect()
}

/// Renders the contact form screen.
#[mutants::skip]
pub fn draw_contact(state: &ContactFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", Screen::Contact.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = state.form();
    let [form_area, button_area, _spacer, submitted_area, footer_area] = Layout::vertical([
        Constraint::Length(form.height()),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(&form, frame, form_area);

    let button = Paragraph::new(Line::from(Span::styled(
        "[ Submit ]",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(button, button_area);

    if let Some(snapshot) = state.contact().snapshot() {
        let panel = Paragraph::new(submitted_lines(snapshot)).block(
            Block::default()
                .title(" You Submitted: ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(panel, submitted_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    const FIRST: &str = "Eddie";
    const LAST: &str = "Burke";
    const EMAIL: &str = "eddieburke@gmail.com";
    const MESSAGE: &str = "Please send me an email.";

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn shift_press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut ContactFormState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn focus_on(state: &mut ContactFormState, field: FieldName) {
        while state.focus() != field {
            state.handle_key(press(KeyCode::Tab));
        }
    }

    fn fill(state: &mut ContactFormState, first: &str, last: &str, email: &str, message: &str) {
        for (field, value) in [
            (FieldName::FirstName, first),
            (FieldName::LastName, last),
            (FieldName::Email, email),
            (FieldName::Message, message),
        ] {
            focus_on(state, field);
            type_string(state, value);
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = ContactFormState::new();
            type_string(&mut state, "Ed");
            assert_eq!(state.contact().value(FieldName::FirstName), "Ed");
        }

        #[test]
        fn case_is_preserved() {
            let mut state = ContactFormState::new();
            focus_on(&mut state, FieldName::Email);
            type_string(&mut state, "Eddie@Gmail.com");
            assert_eq!(state.contact().value(FieldName::Email), "Eddie@Gmail.com");
        }

        #[test]
        fn backspace_deletes_char() {
            let mut state = ContactFormState::new();
            type_string(&mut state, "AB");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.contact().value(FieldName::FirstName), "A");
        }

        #[test]
        fn two_chars_in_first_name_show_one_error() {
            let mut state = ContactFormState::new();
            type_string(&mut state, "Ed");
            assert_eq!(state.form().error_count(), 1);
        }
    }

    mod tab_cycling {
        use super::*;

        #[test]
        fn tab_cycles_focus_forward() {
            let mut state = ContactFormState::new();
            assert_eq!(state.focus(), FieldName::FirstName);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), FieldName::LastName);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), FieldName::Email);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), FieldName::Message);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.focus(), FieldName::FirstName);
        }

        #[test]
        fn backtab_cycles_focus_backward() {
            let mut state = ContactFormState::new();
            state.handle_key(shift_press(KeyCode::BackTab));
            assert_eq!(state.focus(), FieldName::Message);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn f1_opens_help() {
            let mut state = ContactFormState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::F(1))),
                Action::Navigate(Screen::Help)
            );
        }

        #[test]
        fn esc_quits() {
            let mut state = ContactFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn ctrl_c_quits_without_typing() {
            let mut state = ContactFormState::new();
            let key = KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            };
            assert_eq!(state.handle_key(key), Action::Quit);
            assert_eq!(state.contact().value(FieldName::FirstName), "");
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = ContactFormState::new();
            assert_eq!(state.handle_key(press(KeyCode::F(5))), Action::None);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn empty_submit_shows_three_errors() {
            let mut state = ContactFormState::new();
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.form().error_count(), 3);
            assert!(state.contact().snapshot().is_none());
        }

        #[test]
        fn rejected_submit_focuses_first_error() {
            let mut state = ContactFormState::new();
            fill(&mut state, FIRST, LAST, "", "");
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.focus(), FieldName::Email);
            assert_eq!(state.form().error_count(), 1);
        }

        #[test]
        fn valid_submit_takes_snapshot() {
            let mut state = ContactFormState::new();
            fill(&mut state, FIRST, LAST, EMAIL, MESSAGE);
            state.handle_key(press(KeyCode::Enter));
            let snapshot = state.contact().snapshot().expect("snapshot");
            assert_eq!(snapshot.message(), Some(MESSAGE));
            assert_eq!(state.focus(), FieldName::Message);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_contact(state: &ContactFormState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_contact(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_header_fields_and_button() {
            let state = ContactFormState::new();
            let output = render_contact(&state, 70, 30);
            assert!(output.to_lowercase().contains("contact form"));
            assert!(output.contains("First Name*"));
            assert!(output.contains("Last Name*"));
            assert!(output.contains("Email*"));
            assert!(output.contains("[ Submit ]"));
        }

        #[test]
        fn mount_renders_no_errors_or_submission() {
            let state = ContactFormState::new();
            let output = render_contact(&state, 70, 30);
            assert!(!output.contains("required field"));
            assert!(!output.contains("You Submitted"));
        }

        #[test]
        fn renders_last_name_required_after_empty_submit() {
            let mut state = ContactFormState::new();
            state.handle_key(press(KeyCode::Enter));
            let output = render_contact(&state, 70, 30);
            assert!(output.contains("lastName is a required field"));
            assert!(output.to_lowercase().contains("contact form"));
        }

        #[test]
        fn renders_one_line_per_error_after_empty_submit() {
            let mut state = ContactFormState::new();
            state.handle_key(press(KeyCode::Enter));
            let output = render_contact(&state, 70, 30);
            let error_lines: Vec<&str> = output
                .lines()
                .filter(|l| l.contains("is a required field") || l.contains(" must "))
                .collect();
            assert_eq!(error_lines.len(), 3, "got {error_lines:?}");
            for key in ["firstName", "lastName", "email"] {
                assert!(
                    error_lines.iter().any(|l| l.contains(&format!("{key} is a required field"))),
                    "missing {key} error"
                );
            }
        }

        #[test]
        fn renders_one_line_for_short_first_name() {
            let mut state = ContactFormState::new();
            type_string(&mut state, "Ed");
            let output = render_contact(&state, 70, 30);
            let error_lines = output
                .lines()
                .filter(|l| l.contains("is a required field") || l.contains(" must "))
                .count();
            assert_eq!(error_lines, 1);
        }

        #[test]
        fn renders_submission_without_message_row() {
            let mut state = ContactFormState::new();
            fill(&mut state, FIRST, LAST, EMAIL, "");
            state.handle_key(press(KeyCode::Enter));
            let output = render_contact(&state, 70, 30);
            assert!(output.to_lowercase().contains("contact form"));
            assert!(output.contains("You Submitted"));
            assert!(output.contains(&format!("First Name: {FIRST}")));
            assert!(output.contains(&format!("Last Name: {LAST}")));
            assert!(output.contains(&format!("Email: {EMAIL}")));
            assert!(!output.contains("Message:"));
        }

        #[test]
        fn renders_submission_with_message_row() {
            let mut state = ContactFormState::new();
            fill(&mut state, FIRST, LAST, EMAIL, MESSAGE);
            state.handle_key(press(KeyCode::Enter));
            let output = render_contact(&state, 70, 30);
            assert!(output.to_lowercase().contains("contact form"));
            assert!(output.contains(&format!("Message: {MESSAGE}")));
        }
    }
}
