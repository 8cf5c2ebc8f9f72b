//! # Needleguide - microneedling explained in the terminal
//!
//! An interactive explainer of the five steps of a microneedling treatment,
//! built with Rust and Ratatui. The same immutable step catalog can be shown
//! through four presenters: collapsible panels, a wheel, a step-by-step
//! wizard and an animated gallery.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): Application state, one mounted presenter at a time
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Effects the host performs (resize, render)
//! - **View** (`components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use needleguide::core::{
//!     msg::{wizard::WizardMsg, Msg},
//!     state::{view::{PresenterKind, PresenterState}, AppState},
//!     update::update,
//! };
//!
//! let state = AppState::new(PresenterKind::Wizard);
//! let (state, _commands) = update(Msg::Wizard(WizardMsg::Next), state);
//!
//! match state.view.presenter {
//!     PresenterState::Wizard(wizard) => assert_eq!(wizard.cursor(), 1),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, update and the raw event translator
//! - [`domain`] - Step catalog, wheel geometry, glyphs and motifs
//! - [`infrastructure`] - Terminal, CLI and configuration loading
//! - [`integration`] - Runtime and the app runner
//! - [`presentation`] - Components, widgets and UI configuration
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
