use crate::state::Position;

/// Bresenham line from `from` to `to`, both endpoints included.
pub fn bresenham(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut current = from;
    let mut err = dx + dy;
    loop {
        cells.push(current);
        if current == to {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            current.x += sx;
        }
        if doubled <= dx {
            err += dx;
            current.y += sy;
        }
    }
    cells
}

/// Cells strictly between `from` and `to`.
pub fn interior(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let cells = bresenham(from, to);
    let len = cells.len();
    cells.into_iter().skip(1).take(len.saturating_sub(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_is_contiguous() {
        let cells = bresenham(Position::new(0, 0), Position::new(4, 0));
        assert_eq!(cells.len(), 5);
        assert!(cells.windows(2).all(|pair| pair[0].x + 1 == pair[1].x));
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let cells = bresenham(Position::new(3, 3), Position::new(0, 0));
        assert_eq!(
            cells,
            vec![
                Position::new(3, 3),
                Position::new(2, 2),
                Position::new(1, 1),
                Position::new(0, 0)
            ]
        );
    }

    #[test]
    fn interior_drops_endpoints() {
        let from = Position::new(0, 0);
        assert_eq!(interior(from, Position::new(3, 0)).count(), 2);
        assert_eq!(interior(from, Position::new(1, 0)).count(), 0);
        assert_eq!(interior(from, from).count(), 0);
    }
}
