//! Scene: the global clock and the groups of actors it drives.

use std::collections::HashMap;

use crate::core::time::Time;
use crate::scene::actor::ActorHandle;
use crate::scene::clock::FrameClock;
use crate::scene::group::ActorGroup;

/// Name of the group actors land in when no group is named.
pub const DEFAULT_GROUP: &str = "default";

/// Coordinates many actors against one global clock.
///
/// The scene owns the only mutable clock state in the engine: `time`
/// starts at zero on construction and advances monotonically, only
/// inside `update`. Groups are held by handle, so a group registered
/// from outside stays shared with its external owner.
#[derive(Debug)]
pub struct Scene {
    pub time: Time, // Absolute scene time, advanced only by update()
    clock: FrameClock,
    groups: HashMap<String, ActorGroup>,
}

impl Scene {
    /// Create a scene at time zero with a 60 fps tick floor and an empty
    /// default group.
    pub fn new() -> Self {
        let mut groups = HashMap::new();
        groups.insert(DEFAULT_GROUP.to_string(), ActorGroup::new());

        Self {
            time: 0.0,
            clock: FrameClock::new(60.0),
            groups,
        }
    }

    /// Change the clock's target frame rate.
    pub fn set_framerate(&mut self, fps: f64) {
        self.clock.set_framerate(fps);
    }

    /// Add actors to the default group.
    pub fn add_actors(&mut self, actors: impl IntoIterator<Item = ActorHandle>) {
        self.add_actors_to(DEFAULT_GROUP, actors);
    }

    /// Add actors to the named group, creating the group if needed.
    pub fn add_actors_to(
        &mut self,
        groupname: &str,
        actors: impl IntoIterator<Item = ActorHandle>,
    ) {
        let group = self
            .groups
            .entry(groupname.to_string())
            .or_insert_with(ActorGroup::new);
        group.extend(actors);
    }

    /// Register an existing group under a name.
    ///
    /// The scene stores an alias of the handle, not a copy: later
    /// additions through either the caller's handle or the scene are
    /// visible through both.
    pub fn add_actorgroup(&mut self, group: &ActorGroup, groupname: &str) {
        self.groups.insert(groupname.to_string(), group.clone());
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&ActorGroup> {
        self.groups.get(name)
    }

    /// Advance the global clock by one tick and push the new absolute
    /// time into every managed actor.
    ///
    /// The tick length is the real elapsed time since the previous
    /// update, floored at the configured frame interval.
    pub fn update(&mut self) {
        let dt = self.clock.tick();
        self.time += dt;

        let mut updated = 0usize;
        for group in self.groups.values() {
            for actor in group.actors() {
                actor.borrow_mut().update(self.time);
                updated += 1;
            }
        }
        tracing::trace!(dt, time = self.time, actors = updated, "scene tick");
    }

    /// Pad every managed actor's timeline with a hold so all timelines
    /// end together.
    ///
    /// Computes the maximum `end_time` across all groups, then appends
    /// one stop action to each actor that falls short, sized to its
    /// deficit. Actors already at the maximum are untouched, so calling
    /// `sync` again without new actions is a no-op, and an actor
    /// reachable through several groups is padded only once.
    pub fn sync(&mut self) {
        let max_end = self
            .groups
            .values()
            .flat_map(|group| group.actors())
            .map(|actor| actor.borrow().timeline.end_time())
            .fold(0.0_f64, f64::max);

        tracing::debug!(max_end, "synchronizing actor timelines");
        for group in self.groups.values() {
            for handle in group.actors() {
                let mut actor = handle.borrow_mut();
                let deficit = max_end - actor.timeline.end_time();
                if deficit > 0.0 {
                    tracing::debug!(deficit, "padding actor timeline");
                    let resting = actor.live_state();
                    actor
                        .timeline
                        .push_stop(deficit, &resting)
                        .expect("pad duration is positive");
                }
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
