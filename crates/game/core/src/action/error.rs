//! Player action rejections.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;
use crate::weapon::{AmmoKind, WeaponError};

/// Why a player action was refused. The state is untouched and the turn
/// does not advance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },

    #[error("destination {destination} is occupied")]
    Occupied { destination: Position },

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("magazine is empty")]
    EmptyMagazine,

    #[error("magazine is already full")]
    MagazineFull,

    #[error("no {ammo} ammunition in reserve")]
    NoAmmo { ammo: AmmoKind },

    #[error("weapon does not use a magazine")]
    NoMagazine,

    #[error("nothing to pick up")]
    NothingToPickUp,

    #[error("target {target} is out of reach")]
    OutOfRange { target: Position },

    #[error("invalid target {target}")]
    InvalidTarget { target: Position },

    #[error("no weapon in slot {index}")]
    NoSuchWeapon { index: usize },

    #[error("no mod in stash slot {index}")]
    NoSuchStashMod { index: usize },

    #[error(transparent)]
    Weapon(#[from] WeaponError),

    #[error("game over")]
    GameOver,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::OutOfBounds { .. }
            | ActionError::InvalidTarget { .. }
            | ActionError::NoSuchWeapon { .. }
            | ActionError::NoSuchStashMod { .. } => ErrorSeverity::Validation,
            ActionError::Weapon(inner) => inner.severity(),
            ActionError::GameOver => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::Blocked { .. } => "ACTION_BLOCKED",
            ActionError::Occupied { .. } => "ACTION_OCCUPIED",
            ActionError::OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
            ActionError::EmptyMagazine => "ACTION_EMPTY_MAGAZINE",
            ActionError::MagazineFull => "ACTION_MAGAZINE_FULL",
            ActionError::NoAmmo { .. } => "ACTION_NO_AMMO",
            ActionError::NoMagazine => "ACTION_NO_MAGAZINE",
            ActionError::NothingToPickUp => "ACTION_NOTHING_TO_PICK_UP",
            ActionError::OutOfRange { .. } => "ACTION_OUT_OF_RANGE",
            ActionError::InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            ActionError::NoSuchWeapon { .. } => "ACTION_NO_SUCH_WEAPON",
            ActionError::NoSuchStashMod { .. } => "ACTION_NO_SUCH_MOD",
            ActionError::Weapon(inner) => inner.error_code(),
            ActionError::GameOver => "ACTION_GAME_OVER",
        }
    }
}
