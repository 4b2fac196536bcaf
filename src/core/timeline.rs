//! Timeline data structure: an actor's append-only queue of timed actions.

use crate::core::action::{Action, Behavior, Stop};
use crate::core::state::State;
use crate::core::time::Time;

/// Error type for timeline operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// A negative duration was supplied; the append was rejected.
    #[error("invalid action duration {0}: durations must be non-negative")]
    InvalidDuration(Time),
}

/// An ordered, append-only sequence of actions with derived cumulative
/// timing.
///
/// Actions are contiguous and gapless: the k-th action starts where the
/// (k-1)-th ends, so a single running sum resolves any absolute time to
/// "which action, and how far into it". Queries never mutate the
/// timeline; `state_at` can be called out of order and repeatedly.
///
/// The timeline itself holds no notion of an actor's live state. The
/// owning actor passes it in as `resting`, used only when the timeline
/// is empty.
#[derive(Debug, Default)]
pub struct Timeline {
    actions: Vec<Action>,
    end_time: Time, // Sum of all queued durations
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            end_time: 0.0,
        }
    }

    /// Append a behavior with the given duration.
    ///
    /// The new action's start state is captured here, once: it is the
    /// previous action's end state, or `resting` (the owning actor's
    /// live state) when the timeline is empty. Returns
    /// `Err(TimelineError::InvalidDuration)` for a negative duration and
    /// leaves the timeline unmodified.
    pub fn push(
        &mut self,
        behavior: Box<dyn Behavior>,
        duration: Time,
        resting: &State,
    ) -> Result<(), TimelineError> {
        if duration < 0.0 {
            return Err(TimelineError::InvalidDuration(duration));
        }

        let start_state = self.final_state(resting);
        tracing::trace!(
            kind = behavior.kind(),
            duration,
            end_time = self.end_time + duration,
            "queued action"
        );
        self.actions.push(Action::new(behavior, duration, start_state));
        self.end_time += duration;
        Ok(())
    }

    /// Shorthand for padding the timeline with a hold of the given length.
    pub fn push_stop(&mut self, duration: Time, resting: &State) -> Result<(), TimelineError> {
        self.push(Box::new(Stop), duration, resting)
    }

    /// Resolve an absolute time to the queued action covering it.
    ///
    /// Each action covers the half-open interval
    /// `[cum_start, cum_start + duration)`: at an exact boundary the
    /// action that begins there wins, never the one ending there. A
    /// zero-duration action covers an empty interval and is never
    /// returned; its effect is visible through its successor's start
    /// state.
    ///
    /// Returns the action and the local elapsed time into it, or `None`
    /// for `t >= end_time` (the unbounded domain of the virtual terminal
    /// stop). `t` must be non-negative.
    pub fn resolve(&self, t: Time) -> Option<(&Action, Time)> {
        debug_assert!(t >= 0.0, "timeline queried at negative time {t}");

        let mut cum_start = 0.0;
        for action in &self.actions {
            if t < cum_start + action.duration() {
                return Some((action, t - cum_start));
            }
            cum_start += action.duration();
        }
        None
    }

    /// The state the timeline ends on: the last action evaluated at its
    /// full duration, or `resting` when no actions are queued.
    pub fn final_state(&self, resting: &State) -> State {
        match self.actions.last() {
            Some(action) => action.end_state(),
            None => resting.clone(),
        }
    }

    /// The state at absolute time `t`. Pure: repeated and out-of-order
    /// queries return identical results.
    pub fn state_at(&self, t: Time, resting: &State) -> State {
        match self.resolve(t) {
            Some((action, elapsed)) => action.state_after(elapsed),
            None => self.final_state(resting),
        }
    }

    /// The kind tag of the action covering `t`, or `"stop"` past the end
    /// of the queue (the virtual terminal sentinel).
    pub fn kind_at(&self, t: Time) -> &'static str {
        match self.resolve(t) {
            Some((action, _)) => action.kind(),
            None => "stop",
        }
    }

    /// Total duration of all queued actions.
    pub fn end_time(&self) -> Time {
        self.end_time
    }

    /// The queued actions, in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of queued actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are queued.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Move, Recolor, Rotate};

    fn push(timeline: &mut Timeline, behavior: impl Behavior + 'static, duration: Time) {
        timeline
            .push(Box::new(behavior), duration, &State::new())
            .unwrap();
    }

    /// Move 1s, rotate 2s, move 0.5s.
    fn staged_timeline() -> Timeline {
        let mut timeline = Timeline::new();
        push(&mut timeline, Move { dest: (100.0, 200.0) }, 1.0);
        push(&mut timeline, Rotate { dest: 90.0 }, 2.0);
        push(&mut timeline, Move { dest: (200.0, 100.0) }, 0.5);
        timeline
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.len(), 0);
        assert!(timeline.is_empty());
        assert_eq!(timeline.end_time(), 0.0);
        assert!(timeline.resolve(0.0).is_none());
    }

    #[test]
    fn test_push_metadata() {
        let timeline = staged_timeline();
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.end_time(), 3.5);
        assert_eq!(timeline.actions()[0].kind(), "move");
        assert_eq!(timeline.actions()[0].duration(), 1.0);
        assert_eq!(timeline.actions()[1].kind(), "rotate");
        assert_eq!(timeline.actions()[2].duration(), 0.5);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let mut timeline = staged_timeline();
        let result = timeline.push(Box::new(Rotate { dest: 10.0 }), -1.0, &State::new());
        assert_eq!(result, Err(TimelineError::InvalidDuration(-1.0)));

        // Rejected append leaves the timeline untouched
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.end_time(), 3.5);
    }

    #[test]
    fn test_resolve_half_open_boundaries() {
        let timeline = staged_timeline();

        assert_eq!(timeline.kind_at(0.0), "move");
        assert_eq!(timeline.kind_at(0.5), "move");
        assert_eq!(timeline.kind_at(1.0), "rotate");
        assert_eq!(timeline.kind_at(1.5), "rotate");
        assert_eq!(timeline.kind_at(2.0), "rotate");
        assert_eq!(timeline.kind_at(2.5), "rotate");
        assert_eq!(timeline.kind_at(3.0), "move");
        assert_eq!(timeline.kind_at(3.5), "stop");
        assert_eq!(timeline.kind_at(4.0), "stop");
    }

    #[test]
    fn test_resolve_local_elapsed() {
        let timeline = staged_timeline();

        let (action, elapsed) = timeline.resolve(1.5).unwrap();
        assert_eq!(action.kind(), "rotate");
        assert_eq!(elapsed, 0.5);

        let (action, elapsed) = timeline.resolve(3.0).unwrap();
        assert_eq!(action.kind(), "move");
        assert_eq!(elapsed, 0.0);
    }

    #[test]
    fn test_start_state_chains() {
        let timeline = staged_timeline();

        // The rotate starts where the first move ended
        let rotate = &timeline.actions()[1];
        assert_eq!(rotate.start_state().position, (100.0, 200.0));

        // The second move starts at the rotated angle
        let second_move = &timeline.actions()[2];
        assert_eq!(second_move.start_state().angle, 90.0);
        assert_eq!(second_move.start_state().position, (100.0, 200.0));
    }

    #[test]
    fn test_state_at_is_pure() {
        let timeline = staged_timeline();
        let resting = State::new();

        let first = timeline.state_at(1.5, &resting);
        // Probe future and past offsets between identical queries
        let _ = timeline.state_at(10.0, &resting);
        let _ = timeline.state_at(0.0, &resting);
        assert_eq!(timeline.state_at(1.5, &resting), first);
    }

    #[test]
    fn test_terminal_state() {
        let timeline = staged_timeline();
        let resting = State::new();

        let end = timeline.state_at(3.5, &resting);
        assert_eq!(end.position, (200.0, 100.0));
        assert_eq!(end.angle, 90.0);
        assert_eq!(timeline.state_at(100.0, &resting), end);
    }

    #[test]
    fn test_empty_timeline_passthrough() {
        let timeline = Timeline::new();
        let mut resting = State::new();
        resting.position = (10.0, 10.0);

        assert_eq!(timeline.state_at(0.0, &resting), resting);
        assert_eq!(timeline.state_at(100.0, &resting), resting);
        assert_eq!(timeline.kind_at(0.0), "stop");
    }

    #[test]
    fn test_zero_duration_action() {
        let mut timeline = Timeline::new();
        push(&mut timeline, Move { dest: (5.0, 5.0) }, 0.0);
        push(&mut timeline, Recolor { dest: (0.0, 0.0, 0.0) }, 1.0);

        // The zero-duration move is never resolved directly...
        assert_eq!(timeline.kind_at(0.0), "color");
        // ...but its destination is the successor's starting point.
        let state = timeline.state_at(0.0, &State::new());
        assert_eq!(state.position, (5.0, 5.0));
        assert_eq!(state.color, (255.0, 255.0, 255.0));
    }
}
