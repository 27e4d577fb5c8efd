//! loopreel
//!
//! Terminal showcase carousel with an infinite-scroll illusion.
//!
//! The crate follows a Pure Core / Impure Shell split: [`carousel`] is a
//! deterministic state machine driven by explicit timestamps, and [`view`]
//! owns the terminal, turning events into carousel operations and scroll
//! commands into frames.

pub mod carousel;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod promo;
pub mod source;
pub mod view;
