//! Reusable widgets
//!
//! Stateless building blocks shared by the presenter components.

pub mod detail_card;
pub mod motif;
pub mod skin_layers;
pub mod status_bar;
pub mod step_dots;
pub mod tab_bar;
