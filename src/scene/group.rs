//! Actor groups: shared, aliasable collections of actor handles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::scene::actor::ActorHandle;

/// A named collection of actors with shared backing storage.
///
/// Cloning an `ActorGroup` aliases it, it never copies: every clone
/// points at the same backing list, and an addition through any clone is
/// visible through all of them. This is the contract that lets a caller
/// keep a group handle while a scene holds another handle to the same
/// group.
#[derive(Debug, Clone, Default)]
pub struct ActorGroup {
    actors: Rc<RefCell<Vec<ActorHandle>>>,
}

impl ActorGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one actor reference.
    pub fn add(&self, actor: ActorHandle) {
        self.actors.borrow_mut().push(actor);
    }

    /// Append a sequence of actor references.
    pub fn extend(&self, actors: impl IntoIterator<Item = ActorHandle>) {
        self.actors.borrow_mut().extend(actors);
    }

    /// Number of actors in the group.
    pub fn len(&self) -> usize {
        self.actors.borrow().len()
    }

    /// Whether the group holds no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.borrow().is_empty()
    }

    /// The current members, as a snapshot of handles.
    ///
    /// Returns clones of the handles rather than an iterator so callers
    /// can mutate actors (or the group itself) while walking the list.
    pub fn actors(&self) -> Vec<ActorHandle> {
        self.actors.borrow().iter().map(Rc::clone).collect()
    }
}
