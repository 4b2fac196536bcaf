//! Troupe: a declarative timeline animation engine for visual actors.
//!
//! Callers queue time-bounded behaviors (move, rotate, recolor, pause,
//! or custom) on actors; the engine answers "what is this actor's state
//! at absolute time T" exactly, without replaying intermediate frames.
//! A scene coordinates many actors against one global clock and can
//! re-synchronize their timelines so independently queued actors finish
//! together.
//!
//! ```
//! use troupe::{Actor, Move, Rotate};
//!
//! let mut actor = Actor::new();
//! actor.act(Move { dest: (100.0, 200.0) }, 2.0)?;
//! actor.act(Rotate { dest: 90.0 }, 1.0)?;
//!
//! actor.update(1.0);
//! assert_eq!(actor.position, (50.0, 100.0));
//! # Ok::<(), troupe::TimelineError>(())
//! ```
//!
//! Rendering is not part of this crate: a rendering sink reads an
//! actor's `position`, `color` and `angle` after each scene update and
//! draws however it likes.

pub mod core;
pub mod scene;

pub use crate::core::{
    Action, Behavior, Move, Recolor, Rotate, State, Stop, Time, Timeline, TimelineError, Value,
};
pub use crate::scene::{Actor, ActorGroup, ActorHandle, FrameClock, Scene, DEFAULT_GROUP};
