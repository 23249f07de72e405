//! Decorator behavior nodes.
//!
//! [`Inverter`] negates its child. [`Chance`] gates its child behind a
//! probabilistic draw taken from the context.

use crate::{Behavior, Node, Roll, Status};

/// Inverts the result of its child behavior.
pub struct Inverter<'n, C> {
    child: Node<'n, C>,
}

impl<'n, C> Inverter<'n, C> {
    pub fn new(child: Node<'n, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Evaluates its child only when a draw with `probability` succeeds.
///
/// A failed draw returns `Failure` without touching the child, which lets a
/// surrounding [`crate::Selector`] fall through to the next option.
pub struct Chance<'n, C> {
    probability: f32,
    child: Node<'n, C>,
}

impl<'n, C> Chance<'n, C> {
    pub fn new(probability: f32, child: Node<'n, C>) -> Self {
        Self { probability, child }
    }

    pub fn probability(&self) -> f32 {
        self.probability
    }
}

impl<C: Roll> Behavior<C> for Chance<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if ctx.roll(self.probability) {
            self.child.tick(ctx)
        } else {
            Status::Failure
        }
    }
}
