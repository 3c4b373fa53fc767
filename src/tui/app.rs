use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::model::Snapshot;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactFormState, HelpState, draw_contact, draw_help};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// The contact form itself.
    #[default]
    Contact,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label used in titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact Form",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct App {
    screen: Screen,
    contact: ContactFormState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Contact`] screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        tracing::info!("contact form started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        tracing::info!(submitted = self.snapshot().is_some(), "contact form closed");
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Contact => draw_contact(&self.contact, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        let ctx = StatusBarContext::from_contact(self.contact.contact());
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event by dispatching to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::Contact => self.contact.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Help) => {
                self.help.reset();
                self.screen = Screen::Help;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact form screen state.
    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    /// Returns the most recent successful submission, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.contact.contact().snapshot()
    }
}
