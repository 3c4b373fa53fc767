//! TUI screen implementations.

pub mod contact;
pub mod help;

pub use contact::{ContactFormState, draw_contact};
pub use help::{HelpState, draw_help};
