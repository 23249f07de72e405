use std::collections::BTreeSet;

use crate::fov::field_of_view;
use crate::grid::Grid;
use crate::state::Position;

/// Player-facing visibility accumulators.
///
/// `visible` is rebuilt from scratch on every recompute; `explored` only
/// grows and is cleared by replacing the whole state on level transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityState {
    pub visible: BTreeSet<Position>,
    pub explored: BTreeSet<Position>,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the previous state and returns the state seen from `origin`.
    #[must_use]
    pub fn recompute(mut self, grid: &Grid, origin: Position, radius: i32) -> Self {
        self.visible = field_of_view(grid, origin, radius);
        self.explored.extend(self.visible.iter().copied());
        self
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.visible.contains(&position)
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.explored.contains(&position)
    }
}
