//! A* search over the 4-connected grid.
//!
//! Unit step cost, Manhattan heuristic. Cells rejected by the caller's
//! `is_blocked` predicate (other actors) are never entered unless they are
//! the goal. When the goal itself cannot be entered (wall, or blocked by the
//! predicate) the search also accepts any cell orthogonally adjacent to it,
//! which is how a chaser paths to "next to the target". Ties between equal
//! f-scores are broken by lower heuristic, then by position order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::grid::Grid;
use crate::state::Position;

/// Returns the cells from (excluding) `start` to the accepted end cell, an
/// empty path when `start` already satisfies the goal, or `None` when the
/// goal is unreachable within `max_expansions` node expansions.
pub fn find_path<F>(
    grid: &Grid,
    start: Position,
    goal: Position,
    max_expansions: usize,
    is_blocked: F,
) -> Option<Vec<Position>>
where
    F: Fn(Position) -> bool,
{
    if start == goal {
        return Some(Vec::new());
    }
    let goal_enterable = grid.is_walkable(goal) && !is_blocked(goal);
    let accepts = |cell: Position| cell == goal || (!goal_enterable && cell.is_adjacent(goal));

    let mut open = BinaryHeap::new();
    let mut g_score = BTreeMap::from([(start, 0)]);
    let mut came_from = BTreeMap::new();
    let mut closed = BTreeSet::new();
    let mut expansions = 0usize;

    open.push(Reverse((start.manhattan(goal), start.manhattan(goal), start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if !closed.insert(current) {
            continue;
        }
        if accepts(current) {
            return Some(reconstruct(&came_from, current));
        }
        if expansions >= max_expansions {
            tracing::debug!(%start, %goal, expansions, "path search exhausted");
            return None;
        }
        expansions += 1;

        let Some(&current_g) = g_score.get(&current) else {
            continue;
        };
        let next_g = current_g + 1;
        for next in current.neighbors() {
            if closed.contains(&next) || !grid.is_walkable(next) {
                continue;
            }
            if next != goal && is_blocked(next) {
                continue;
            }
            if g_score.get(&next).is_some_and(|&known| known <= next_g) {
                continue;
            }
            g_score.insert(next, next_g);
            came_from.insert(next, current);
            let h = next.manhattan(goal);
            open.push(Reverse((next_g + h, h, next)));
        }
    }
    None
}

/// First cell of the path toward `goal`, if any.
pub fn next_step<F>(
    grid: &Grid,
    start: Position,
    goal: Position,
    max_expansions: usize,
    is_blocked: F,
) -> Option<Position>
where
    F: Fn(Position) -> bool,
{
    find_path(grid, start, goal, max_expansions, is_blocked)?
        .first()
        .copied()
}

fn reconstruct(came_from: &BTreeMap<Position, Position>, end: Position) -> Vec<Position> {
    let mut path = vec![end];
    let mut cursor = end;
    while let Some(&previous) = came_from.get(&cursor) {
        path.push(previous);
        cursor = previous;
    }
    // drop start
    path.pop();
    path.reverse();
    path
}
