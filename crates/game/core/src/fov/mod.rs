//! Recursive shadow-casting field of view.
//!
//! Each of the eight octants is scanned row by row through a coordinate
//! transform from [`OCTANTS`]. A cell is lit when its slope range overlaps
//! the current arc and it lies within the radius circle and the grid. An
//! opaque cell opens a shadow: the next row is scanned recursively with the
//! narrowed arc, and the current row resumes past the obstruction. The
//! recursion depth is bounded by the radius.

use std::collections::BTreeSet;

use crate::grid::Grid;
use crate::los::peek_spots;
use crate::state::Position;

/// `(xx, xy, yx, yy)` per octant.
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (-1, 0, 0, 1),
    (-1, 0, 0, -1),
    (0, -1, -1, 0),
    (0, 1, -1, 0),
    (1, 0, 0, -1),
];

struct Caster<'g> {
    grid: &'g Grid,
    origin: Position,
    radius: i32,
    lit: &'g mut BTreeSet<Position>,
}

impl Caster<'_> {
    fn light(&mut self, cell: Position, dx: i32, dy: i32) {
        if dx * dx + dy * dy <= self.radius * self.radius && self.grid.contains(cell) {
            self.lit.insert(cell);
        }
    }

    fn cast(&mut self, row: i32, mut start: f32, end: f32, octant: (i32, i32, i32, i32)) {
        if start < end {
            return;
        }
        let (xx, xy, yx, yy) = octant;
        let mut next_start = start;

        for distance in row..=self.radius {
            let dy = -distance;
            let mut blocked = false;

            for dx in -distance..=0 {
                let cell = self
                    .origin
                    .offset(dx * xx + dy * xy, dx * yx + dy * yy);
                let left_slope = (dx as f32 - 0.5) / (dy as f32 + 0.5);
                let right_slope = (dx as f32 + 0.5) / (dy as f32 - 0.5);

                if start < right_slope {
                    continue;
                }
                if end > left_slope {
                    break;
                }

                self.light(cell, dx, dy);
                let opaque = self.grid.blocks_light(cell);

                if blocked {
                    if opaque {
                        next_start = right_slope;
                    } else {
                        blocked = false;
                        start = next_start;
                    }
                } else if opaque && distance < self.radius {
                    blocked = true;
                    self.cast(distance + 1, start, left_slope, octant);
                    next_start = right_slope;
                }
            }

            if blocked {
                break;
            }
        }
    }
}

/// Cells lit from a single viewpoint. The viewpoint itself is always lit.
pub fn shadowcast(grid: &Grid, origin: Position, radius: i32, lit: &mut BTreeSet<Position>) {
    lit.insert(origin);
    let mut caster = Caster {
        grid,
        origin,
        radius,
        lit,
    };
    for octant in OCTANTS {
        caster.cast(1, 1.0, 0.0, octant);
    }
}

/// Union of the cells lit from `origin` and from each of its peek spots.
pub fn field_of_view(grid: &Grid, origin: Position, radius: i32) -> BTreeSet<Position> {
    let mut lit = BTreeSet::new();
    shadowcast(grid, origin, radius, &mut lit);
    for spot in peek_spots(grid, origin) {
        shadowcast(grid, spot, radius, &mut lit);
    }
    lit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_room_is_fully_lit() {
        let grid = Grid::from_rows(&["#####", "#...#", "#...#", "#...#", "#####"]).unwrap();
        let lit = field_of_view(&grid, Position::new(2, 2), 3);
        for (cell, _) in grid.cells() {
            assert!(lit.contains(&cell), "{cell} should be lit");
        }
    }

    #[test]
    fn walls_cast_shadows() {
        let grid = Grid::from_rows(&[
            "#########", //
            "#.......#", //
            "#...#...#", //
            "#.......#", //
            "#########", //
        ])
        .unwrap();
        let mut lit = BTreeSet::new();
        shadowcast(&grid, Position::new(2, 2), 10, &mut lit);
        assert!(lit.contains(&Position::new(4, 2)));
        assert!(!lit.contains(&Position::new(5, 2)));
        assert!(!lit.contains(&Position::new(6, 2)));
        assert!(lit.contains(&Position::new(6, 1)));
    }

    #[test]
    fn radius_bounds_the_view() {
        let grid = Grid::from_rows(&["..........."]).unwrap();
        let mut lit = BTreeSet::new();
        shadowcast(&grid, Position::new(0, 0), 4, &mut lit);
        assert!(lit.contains(&Position::new(4, 0)));
        assert!(!lit.contains(&Position::new(5, 0)));
    }

    #[test]
    fn corner_peek_lights_the_hidden_corridor() {
        let grid = Grid::from_rows(&[
            "######", //
            "#....#", //
            "####.#", //
            "####.#", //
            "######", //
        ])
        .unwrap();
        let origin = Position::new(4, 3);
        let hidden = Position::new(2, 1);

        let mut direct = BTreeSet::new();
        shadowcast(&grid, origin, 10, &mut direct);
        assert!(!direct.contains(&hidden));

        let lit = field_of_view(&grid, origin, 10);
        assert!(lit.contains(&hidden));
        assert!(lit.is_superset(&direct));
    }

    #[test]
    fn origin_is_lit_even_inside_a_wall() {
        let grid = Grid::from_rows(&["###", "###", "###"]).unwrap();
        let lit = field_of_view(&grid, Position::new(1, 1), 5);
        assert!(lit.contains(&Position::new(1, 1)));
        assert!(lit.contains(&Position::new(0, 1)));
    }
}
