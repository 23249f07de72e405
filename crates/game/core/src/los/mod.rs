//! Line-of-sight, cover and peek-spot analysis.
//!
//! Cover only looks at the defender's four orthogonal neighbours and peek
//! spots only at the viewpoint's four orthogonal neighbours. Diagonal wall
//! layouts can therefore over- or under-grant cover; callers rely on this
//! approximation as-is.
mod line;

pub use line::{bresenham, interior};

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::state::{CardinalDirection, Position};

pub type PeekSpots = ArrayVec<Position, 4>;

/// Walkable orthogonal neighbours of `origin` that sit next to something
/// opaque (other than `origin` itself): the cells an actor can lean into
/// to look or shoot around a corner.
pub fn peek_spots(grid: &Grid, origin: Position) -> PeekSpots {
    origin
        .neighbors()
        .into_iter()
        .filter(|spot| grid.is_walkable(*spot))
        .filter(|spot| {
            spot.neighbors()
                .into_iter()
                .any(|cell| cell != origin && grid.blocks_light(cell))
        })
        .collect()
}

/// True when no opaque cell lies strictly between the two endpoints.
pub fn clear_line(grid: &Grid, from: Position, to: Position) -> bool {
    interior(from, to).all(|cell| !grid.blocks_light(cell))
}

/// Direct line check, optionally retried from every peek spot of `from`.
pub fn has_line_of_sight(grid: &Grid, from: Position, to: Position, allow_peek: bool) -> bool {
    if clear_line(grid, from, to) {
        return true;
    }
    allow_peek
        && peek_spots(grid, from)
            .into_iter()
            .any(|spot| clear_line(grid, spot, to))
}

/// Origin a shot at `to` should be traced from: `from` itself when the line
/// is clear, else the first unoccupied peek spot with a clear line, else
/// `from`. Spots rejected by `is_occupied` are never leaned into, so a shot
/// cannot start past an actor standing next to the shooter.
pub fn firing_origin<F>(grid: &Grid, from: Position, to: Position, is_occupied: F) -> Position
where
    F: Fn(Position) -> bool,
{
    if clear_line(grid, from, to) {
        return from;
    }
    peek_spots(grid, from)
        .into_iter()
        .filter(|spot| !is_occupied(*spot))
        .find(|spot| clear_line(grid, *spot, to))
        .unwrap_or(from)
}

/// True when `defender` has a non-walkable orthogonal neighbour facing
/// `attacker` (positive dot product with the defender-to-attacker vector).
pub fn in_cover(grid: &Grid, defender: Position, attacker: Position) -> bool {
    let (vx, vy) = (attacker.x - defender.x, attacker.y - defender.y);
    CardinalDirection::ALL.into_iter().any(|direction| {
        let (dx, dy) = direction.delta();
        dx * vx + dy * vy > 0 && !grid.is_walkable(defender.step(direction))
    })
}
