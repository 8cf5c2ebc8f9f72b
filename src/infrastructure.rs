//! Infrastructure layer
//!
//! This module handles everything that touches the outside world:
//! - TUI foundation (real terminal and in-memory test terminal)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
