//! Status bar widget — one-line submission state display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{ContactForm, Phase};

/// Data passed to the status bar widget; decoupled from [`ContactForm`] for testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBarContext {
    /// Whether a submission has succeeded.
    pub phase: Phase,
    /// Number of errors currently shown in the form.
    pub visible_errors: usize,
}

impl StatusBarContext {
    pub fn from_contact(contact: &ContactForm) -> Self {
        Self {
            phase: contact.phase(),
            visible_errors: contact.visible_errors().len(),
        }
    }
}

fn error_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => "1 error".to_string(),
        n => format!("{n} errors"),
    }
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned):
/// - Nothing submitted yet: `EDITING  2 errors` (errors in Red, omitted when zero)
/// - After a successful submit: `SUBMITTED` (Green), followed by any errors
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);

    let mut spans: Vec<Span> = match ctx.phase {
        Phase::Editing => vec![Span::styled("EDITING", cyan)],
        Phase::Submitted => vec![Span::styled("SUBMITTED", green)],
    };

    if ctx.visible_errors > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(error_label(ctx.visible_errors), red));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
