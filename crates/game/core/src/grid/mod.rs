//! Static per-level tile grid.
//!
//! The level generator hands over a finished grid; the simulation only reads
//! it, except for destructible tiles that the combat resolver turns into
//! floor when destroyed.
mod tile;

pub use tile::{TileFlags, TileKind};

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("tile buffer holds {found} tiles, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::Empty => "GRID_EMPTY",
            GridError::RaggedRow { .. } => "GRID_RAGGED_ROW",
            GridError::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
            GridError::SizeMismatch { .. } => "GRID_SIZE_MISMATCH",
        }
    }
}

/// Row-major tile storage with bounds-checked queries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: MapDimensions,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Creates a grid filled with a single tile kind.
    pub fn filled(dimensions: MapDimensions, kind: TileKind) -> Self {
        Self {
            dimensions,
            tiles: vec![kind; dimensions.area()],
        }
    }

    pub fn from_tiles(dimensions: MapDimensions, tiles: Vec<TileKind>) -> Result<Self, GridError> {
        if dimensions.area() == 0 {
            return Err(GridError::Empty);
        }
        if tiles.len() != dimensions.area() {
            return Err(GridError::SizeMismatch {
                expected: dimensions.area(),
                found: tiles.len(),
            });
        }
        Ok(Self { dimensions, tiles })
    }

    /// Parses an ASCII layout using [`TileKind::glyph`] characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let width = rows.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = TileKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    position: Position::new(x as i32, y as i32),
                })?;
                tiles.push(kind);
            }
        }

        Self::from_tiles(MapDimensions::new(width as u32, rows.len() as u32), tiles)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Row-major cell index, or `None` outside the grid.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.tiles.len()).then(|| {
            let width = self.dimensions.width as usize;
            Position::new((index % width) as i32, (index / width) as i32)
        })
    }

    pub fn tile_at(&self, position: Position) -> Option<TileKind> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// False outside the grid.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile_at(position).is_some_and(TileKind::is_walkable)
    }

    /// True outside the grid: out-of-bounds is opaque.
    pub fn blocks_light(&self, position: Position) -> bool {
        self.tile_at(position).is_none_or(TileKind::blocks_light)
    }

    pub fn is_destructible(&self, position: Position) -> bool {
        self.tile_at(position).is_some_and(TileKind::is_destructible)
    }

    /// Turns a destructible tile into floor. Returns the destroyed kind.
    pub fn destroy(&mut self, position: Position) -> Option<TileKind> {
        let index = self.index(position)?;
        let kind = self.tiles[index];
        if !kind.is_destructible() {
            return None;
        }
        self.tiles[index] = TileKind::Floor;
        Some(kind)
    }

    /// Iterates every cell with its tile kind in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, TileKind)> + '_ {
        let width = self.dimensions.width as usize;
        self.tiles.iter().enumerate().map(move |(index, kind)| {
            (
                Position::new((index % width) as i32, (index / width) as i32),
                *kind,
            )
        })
    }

    /// Renders the grid back into glyph rows.
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.dimensions.width as usize)
            .map(|row| row.iter().map(|kind| kind.glyph()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&["#####", "#.X.#", "#.|E#", "#####"]).unwrap()
    }

    #[test]
    fn parses_dimensions_and_tiles() {
        let grid = sample();
        assert_eq!(grid.dimensions(), MapDimensions::new(5, 4));
        assert_eq!(grid.tile_at(Position::new(2, 1)), Some(TileKind::Box));
        assert_eq!(grid.tile_at(Position::new(3, 2)), Some(TileKind::Elevator));
        assert_eq!(grid.to_rows()[2], "#.|E#");
    }

    #[test]
    fn out_of_bounds_is_opaque_and_unwalkable() {
        let grid = sample();
        let outside = Position::new(-1, 0);
        assert!(!grid.is_walkable(outside));
        assert!(grid.blocks_light(outside));
        assert_eq!(grid.tile_at(Position::new(5, 0)), None);
    }

    #[test]
    fn pipes_are_walkable_and_transparent() {
        let grid = sample();
        let pipe = Position::new(2, 2);
        assert!(grid.is_walkable(pipe));
        assert!(!grid.blocks_light(pipe));
    }

    #[test]
    fn destroying_a_box_leaves_floor() {
        let mut grid = sample();
        assert_eq!(grid.destroy(Position::new(2, 1)), Some(TileKind::Box));
        assert_eq!(grid.tile_at(Position::new(2, 1)), Some(TileKind::Floor));
        assert_eq!(grid.destroy(Position::new(0, 0)), None);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::from_rows(&["###", "##"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn index_round_trips_through_position() {
        let grid = sample();
        let position = Position::new(3, 2);
        let index = grid.index(position).unwrap();
        assert_eq!(grid.position_of(index), Some(position));
    }
}
