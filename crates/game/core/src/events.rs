//! Structured per-turn output for presentation and audio layers.
//!
//! Every event carries the positions and amounts needed to drive effects
//! without re-deriving simulation logic.

use crate::grid::TileKind;
use crate::state::{EnemyKind, EntityId, Pickup, Position};
use crate::weapon::FireMode;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    PlayerMoved {
        from: Position,
        to: Position,
    },
    /// A weapon was used. `target` is the aimed cell.
    AttackResolved {
        attacker: EntityId,
        weapon: String,
        mode: FireMode,
        origin: Position,
        target: Position,
    },
    /// One traced line (bullet, pellet or projectile) came to rest.
    ShotTraced {
        origin: Position,
        end: Position,
    },
    Explosion {
        center: Position,
        radius: i32,
    },
    EnemyDamaged {
        id: EntityId,
        position: Position,
        amount: u32,
        remaining: u32,
        in_cover: bool,
    },
    EnemyKilled {
        id: EntityId,
        kind: EnemyKind,
        position: Position,
    },
    PlayerDamaged {
        source: EntityId,
        amount: u32,
        remaining: u32,
        in_cover: bool,
    },
    PlayerKilled {
        by: EntityId,
    },
    TileDestroyed {
        position: Position,
        tile: TileKind,
    },
    ItemDropped {
        position: Position,
        pickup: Pickup,
    },
    ItemPickedUp {
        position: Position,
        pickup: Pickup,
    },
    Reloaded {
        weapon: String,
        rounds: u32,
    },
    WeaponSwitched {
        index: usize,
        weapon: String,
    },
    ModAttached {
        weapon: String,
        name: String,
    },
    ModDetached {
        weapon: String,
        name: String,
    },
    ExperienceGained {
        amount: u32,
    },
    LevelUp {
        level: u32,
    },
    EnemyAlerted {
        id: EntityId,
        position: Position,
    },
    EnemyMoved {
        id: EntityId,
        from: Position,
        to: Position,
    },
    /// The player stepped onto an elevator; the host should generate the
    /// next level and call `descend`.
    ElevatorReached {
        position: Position,
    },
}

/// Everything that happened during one executed turn.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub events: Vec<GameEvent>,
}

impl TurnReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Cells whose destructible tile was destroyed this turn.
    pub fn destroyed_tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::TileDestroyed { position, .. } => Some(*position),
            _ => None,
        })
    }

    pub fn kills(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::EnemyKilled { id, .. } => Some(*id),
            _ => None,
        })
    }

    /// Total damage the player took this turn.
    pub fn damage_taken(&self) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                GameEvent::PlayerDamaged { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }
}
