//! Integration layer
//!
//! Glue between the pure core and the terminal:
//! - `Runtime` owns the state and the message/command queues
//! - `AppRunner` drives a [`TuiLike`](crate::infrastructure::tui::TuiLike)
//!   terminal with it

pub mod app_runner;
pub mod runtime;
