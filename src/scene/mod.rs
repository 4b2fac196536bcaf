//! Scene layer: actors, shared groups, the frame clock, and the scene
//! that coordinates them against one global time.

pub mod actor;
pub mod clock;
pub mod group;
#[allow(clippy::module_inception)]
pub mod scene;

pub use actor::{Actor, ActorHandle};
pub use clock::FrameClock;
pub use group::ActorGroup;
pub use scene::{Scene, DEFAULT_GROUP};
