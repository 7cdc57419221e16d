//! skycard: a terminal weather card.
//!
//! Fetches current conditions for the device position or a searched place
//! and renders them over a condition/time/temperature-driven gradient.

pub mod config;
pub mod error;
pub mod gradient;
pub mod location;
pub mod render;
pub mod screen;
pub mod weather;
