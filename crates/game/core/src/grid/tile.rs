use bitflags::bitflags;

bitflags! {
    /// Query predicates a tile kind answers to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        const WALKABLE = 1 << 0;
        const OPAQUE = 1 << 1;
        const DESTRUCTIBLE = 1 << 2;
    }
}

/// Canonical tile kinds produced by the level generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Wall,
    Floor,
    Elevator,
    /// Unused space outside the carved level.
    Empty,
    Box,
    Barrel,
    Generator,
    PipeVertical,
    PipeHorizontal,
}

impl TileKind {
    pub const fn flags(self) -> TileFlags {
        match self {
            TileKind::Floor
            | TileKind::Elevator
            | TileKind::PipeVertical
            | TileKind::PipeHorizontal => TileFlags::WALKABLE,
            TileKind::Box => TileFlags::OPAQUE.union(TileFlags::DESTRUCTIBLE),
            TileKind::Wall | TileKind::Empty | TileKind::Barrel | TileKind::Generator => {
                TileFlags::OPAQUE
            }
        }
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.flags().contains(TileFlags::WALKABLE)
    }

    #[inline]
    pub const fn blocks_light(self) -> bool {
        self.flags().contains(TileFlags::OPAQUE)
    }

    #[inline]
    pub const fn is_destructible(self) -> bool {
        self.flags().contains(TileFlags::DESTRUCTIBLE)
    }

    /// Single-character map glyph.
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::Elevator => 'E',
            TileKind::Empty => ' ',
            TileKind::Box => 'X',
            TileKind::Barrel => '0',
            TileKind::Generator => 'G',
            TileKind::PipeVertical => '|',
            TileKind::PipeHorizontal => '-',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        Some(match glyph {
            '#' => TileKind::Wall,
            '.' => TileKind::Floor,
            'E' => TileKind::Elevator,
            ' ' => TileKind::Empty,
            'X' => TileKind::Box,
            '0' => TileKind::Barrel,
            'G' => TileKind::Generator,
            '|' => TileKind::PipeVertical,
            '-' => TileKind::PipeHorizontal,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn walkable_tiles_never_block_light() {
        for kind in TileKind::iter() {
            if kind.is_walkable() {
                assert!(!kind.blocks_light(), "{kind} is walkable but opaque");
            }
        }
    }

    #[test]
    fn only_boxes_are_destructible() {
        let destructible: Vec<_> = TileKind::iter().filter(|k| k.is_destructible()).collect();
        assert_eq!(destructible, vec![TileKind::Box]);
    }

    #[test]
    fn glyphs_round_trip() {
        for kind in TileKind::iter() {
            assert_eq!(TileKind::from_glyph(kind.glyph()), Some(kind));
        }
    }
}
