//! Actor: a visual entity owning live state and one timeline.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::action::Behavior;
use crate::core::state::State;
use crate::core::time::Time;
use crate::core::timeline::{Timeline, TimelineError};

/// Shared handle to an actor.
///
/// Actors are created by the caller and shared by reference with groups
/// and scenes; the engine is single-threaded, so plain reference
/// counting with interior mutability is enough.
pub type ActorHandle = Rc<RefCell<Actor>>;

/// A visual entity: live visible state plus the timeline that drives it.
///
/// The live fields may be written directly at any time; a direct write
/// takes effect immediately and becomes the baseline captured by the
/// next `act` call on an empty timeline. Rendering reads the live fields
/// after each `update`.
#[derive(Debug)]
pub struct Actor {
    pub position: (f64, f64),
    pub color: (f64, f64, f64),
    pub angle: f64,
    pub time: Time, // Last absolute scene time pushed in via update()
    pub timeline: Timeline,
}

impl Actor {
    /// Create an actor at the origin, white, unrotated, with an empty
    /// timeline.
    pub fn new() -> Self {
        Self {
            position: (0.0, 0.0),
            color: (255.0, 255.0, 255.0),
            angle: 0.0,
            time: 0.0,
            timeline: Timeline::new(),
        }
    }

    /// Wrap this actor in the shared handle used by groups and scenes.
    pub fn into_handle(self) -> ActorHandle {
        Rc::new(RefCell::new(self))
    }

    /// Snapshot of the live fields (no custom keys).
    pub fn live_state(&self) -> State {
        State {
            position: self.position,
            color: self.color,
            angle: self.angle,
            custom: Default::default(),
        }
    }

    /// Queue a behavior on this actor's timeline.
    ///
    /// Does not advance time; the new action starts where the timeline
    /// currently ends (or at the live state if nothing is queued yet).
    pub fn act(
        &mut self,
        behavior: impl Behavior + 'static,
        duration: Time,
    ) -> Result<(), TimelineError> {
        let resting = self.live_state();
        self.timeline.push(Box::new(behavior), duration, &resting)
    }

    /// Move this actor to absolute time `t` and refresh the live fields
    /// from the timeline.
    ///
    /// `t` is an absolute scene time, not a delta. Because timeline
    /// queries are pure, `update` is idempotent and order-independent:
    /// `update(5)` followed by `update(2)` leaves the same live state as
    /// `update(2)` alone.
    pub fn update(&mut self, t: Time) {
        self.time = t;
        let state = self.timeline.state_at(t, &self.live_state());
        self.position = state.position;
        self.color = state.color;
        self.angle = state.angle;
    }

    /// The full snapshot at absolute time `t`. Pure query.
    pub fn state_at(&self, t: Time) -> State {
        self.timeline.state_at(t, &self.live_state())
    }

    /// The kind tag of the action in effect at `t` (`"stop"` past the
    /// end of the queue).
    pub fn kind_at(&self, t: Time) -> &'static str {
        self.timeline.kind_at(t)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}
