//! Help screen — key reference and field rules for the contact form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FIRST_NAME_MIN_LEN, FieldName};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::FormField;

static KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Backspace", "delete last character"),
    ("Enter", "submit"),
    ("F1", "this help"),
    ("Esc / Ctrl-c", "quit"),
];

/// Scroll position of the help text. Dismissing always returns to the form.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1) => {
                return Action::Navigate(Screen::Contact);
            }
            _ => {}
        }
        Action::None
    }
}

/// Describes what a field accepts, derived from its validation rules.
fn rule_summary(field: FieldName) -> String {
    match field {
        FieldName::FirstName => format!("required, at least {FIRST_NAME_MIN_LEN} characters"),
        FieldName::Email => "required, name@domain.tld".to_string(),
        f if f.is_required() => "required".to_string(),
        _ => "optional".to_string(),
    }
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry(left: String, right: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {left:<20}"), Style::default().fg(Color::Yellow)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Keys")];
    lines.extend(
        KEYS.iter()
            .map(|(key, desc)| entry((*key).to_string(), (*desc).to_string())),
    );
    lines.push(Line::from(""));
    lines.push(heading("Fields"));
    lines.extend(FieldName::ALL.into_iter().map(|field| {
        let label = FormField::for_field(field).display_label();
        entry(label, rule_summary(field))
    }));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} – {} ", Screen::Help.label(), Screen::Contact.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines = help_lines();
    let max_scroll = (lines.len() as u16).saturating_sub(content_area.height);
    frame.render_widget(
        Paragraph::new(lines).scroll((state.scroll().min(max_scroll), 0)),
        content_area,
    );

    let footer = Paragraph::new("↑/↓: scroll  q/Esc/F1: back to form")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
