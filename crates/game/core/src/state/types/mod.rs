pub mod actor;
pub mod common;
pub mod item;

pub use actor::{Enemy, EnemyKind, PlayerState};
pub use common::{CardinalDirection, EntityId, Position, ResourceMeter};
pub use item::Pickup;
