//! Behavior tree primitives for turn-based enemy decisions.
//!
//! Every tick completes immediately: a node either succeeds or fails within
//! the same game turn, so there is no `Running` state and no per-node memory
//! between turns. Trees are built once and evaluated against a fresh context
//! (the "blackboard") for every enemy on every turn.
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`Chance`]
//! - Leaf helpers: [`Condition`]
//!
//! Probabilistic branching goes through the [`Roll`] trait so the context
//! decides where randomness comes from (and tests can pin it).

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, Condition, Node, Roll};
pub use composite::{Selector, Sequence};
pub use decorator::{Chance, Inverter};
pub use status::Status;
