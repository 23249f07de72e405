//! Core behavior trait and leaf helpers.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluates this node. Nodes may read the context and record an intent
    /// on it; they must not leave partial intents behind on failure.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node whose borrows live for `'n`.
///
/// Contexts usually borrow game state, so trees are built for the lifetime of
/// one evaluation rather than stored as `'static`.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

impl<C> Behavior<C> for Box<dyn Behavior<C> + '_> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Source of probabilistic draws for [`crate::Chance`] nodes.
///
/// Implemented by the decision context so every draw is routed through the
/// game's injectable random source.
pub trait Roll {
    /// Returns `true` with the given probability (clamped to `[0, 1]`).
    fn roll(&mut self, probability: f32) -> bool;
}

/// Leaf node wrapping a read-only predicate over the context.
pub struct Condition<C> {
    predicate: fn(&C) -> bool,
}

impl<C> Condition<C> {
    pub fn new(predicate: fn(&C) -> bool) -> Self {
        Self { predicate }
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}
