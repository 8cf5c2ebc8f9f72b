//! Presentation layer
//!
//! Stateless rendering of [`AppState`](crate::core::state::AppState):
//! - Components, one per presenter plus the surrounding chrome
//! - Reusable widgets
//! - Keybinding and style configuration types

pub mod components;
pub mod config;
pub mod text;
pub mod widgets;
