//! Presentational components shared by the portal pages.
//!
//! Components know nothing about schools or sessions: they take strings,
//! flags and children. Each component links its own stylesheet.

pub mod components;

pub use components::*;
