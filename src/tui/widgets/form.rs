//! Form widget: labeled text inputs with inline error lines.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{ContactForm, FieldName};

/// Height of one input row, borders included.
pub const ROW_HEIGHT: u16 = 3;

/// A single field within a [`Form`], ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Display label shown in the input's border.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message to show, if any.
    pub error: Option<String>,
    /// Whether the label carries the required marker.
    pub required: bool,
}

impl FormField {
    /// Creates an empty, error-free field labeled after `name`.
    pub fn for_field(name: FieldName) -> Self {
        Self {
            label: name.label().to_string(),
            value: String::new(),
            error: None,
            required: name.is_required(),
        }
    }

    /// Label as displayed, e.g. `First Name*` for required fields.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{}*", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// A view of the form fields plus which one has focus.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a form view. `focus` indexes into `fields`.
    pub fn new(fields: Vec<FormField>, focus: usize) -> Self {
        Self { fields, focus }
    }

    /// Builds the view for a [`ContactForm`], showing only its visible errors.
    pub fn from_contact(contact: &ContactForm, focus: FieldName) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| FormField {
                value: contact.value(name).to_string(),
                error: contact.visible_error(name),
                ..FormField::for_field(name)
            })
            .collect();
        let focus = FieldName::ALL
            .iter()
            .position(|f| *f == focus)
            .unwrap_or(0);
        Self::new(fields, focus)
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the number of fields currently showing an error.
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Total height needed to draw every row.
    pub fn height(&self) -> u16 {
        ROW_HEIGHT.saturating_mul(self.fields.len() as u16)
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus();

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.display_label())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(&field.value)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // One error per field, drawn over the bottom border
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + ROW_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
