#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal contact form with live validation.
//!
//! [`model`] holds the field store, validator and submission controller;
//! [`tui`] presents them with ratatui.

pub mod logging;
pub mod model;
pub mod tui;
