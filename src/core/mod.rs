//! Core types for the animation engine.
//!
//! This module provides the fundamental data structures: time
//! representation, state snapshots, timed behaviors, and the per-actor
//! timeline that sequences them. All time values are in seconds (f64).

pub mod action;
pub mod state;
pub mod time;
pub mod timeline;

// Re-export core data structures for easier access.
pub use action::{Action, Behavior, Move, Recolor, Rotate, Stop};
pub use state::{State, Value};
pub use time::{Time, ZERO};
pub use timeline::{Timeline, TimelineError};
