// Player positions and roster slot categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Football positions used for draft eligibility and lineup assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Dst,
}

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// FantasyPros position strings carry a positional rank suffix
    /// (e.g. "RB12", "WR3"); trailing digits are stripped before matching.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        let stripped = s.trim().trim_end_matches(|c: char| c.is_ascii_digit());
        match stripped.to_uppercase().as_str() {
            "QB" => Some(Position::Qb),
            "RB" => Some(Position::Rb),
            "WR" => Some(Position::Wr),
            "TE" => Some(Position::Te),
            "K" => Some(Position::K),
            "DST" | "DEF" => Some(Position::Dst),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Dst => "DST",
        }
    }

    /// Whether this position may occupy the FLEX slot.
    pub fn flex_eligible(&self) -> bool {
        matches!(self, Position::Rb | Position::Wr)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A roster slot category: one dedicated slot per position, plus the
/// RB/WR-only FLEX and the anything-goes bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Dst,
    Flex,
    Bench,
}

impl Slot {
    /// All slot categories in ledger index order.
    pub const ALL: [Slot; 8] = [
        Slot::Qb,
        Slot::Rb,
        Slot::Wr,
        Slot::Te,
        Slot::K,
        Slot::Dst,
        Slot::Flex,
        Slot::Bench,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// The dedicated slot for a position.
    pub fn dedicated(pos: Position) -> Self {
        match pos {
            Position::Qb => Slot::Qb,
            Position::Rb => Slot::Rb,
            Position::Wr => Slot::Wr,
            Position::Te => Slot::Te,
            Position::K => Slot::K,
            Position::Dst => Slot::Dst,
        }
    }

    /// Parse a slot name as used in roster template files.
    pub fn from_str_slot(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Slot::Qb),
            "RB" => Some(Slot::Rb),
            "WR" => Some(Slot::Wr),
            "TE" => Some(Slot::Te),
            "K" => Some(Slot::K),
            "DST" | "DEF" => Some(Slot::Dst),
            "FLEX" => Some(Slot::Flex),
            "BENCH" | "BE" | "BN" => Some(Slot::Bench),
            _ => None,
        }
    }

    /// Return the display string for this slot.
    pub fn display_str(&self) -> &'static str {
        match self {
            Slot::Qb => "QB",
            Slot::Rb => "RB",
            Slot::Wr => "WR",
            Slot::Te => "TE",
            Slot::K => "K",
            Slot::Dst => "DST",
            Slot::Flex => "FLEX",
            Slot::Bench => "BENCH",
        }
    }

    /// Ledger array index for this slot.
    pub fn index(&self) -> usize {
        match self {
            Slot::Qb => 0,
            Slot::Rb => 1,
            Slot::Wr => 2,
            Slot::Te => 3,
            Slot::K => 4,
            Slot::Dst => 5,
            Slot::Flex => 6,
            Slot::Bench => 7,
        }
    }

    /// Whether a player at `pos` may fill this slot.
    pub fn accepts(&self, pos: Position) -> bool {
        match self {
            Slot::Flex => pos.flex_eligible(),
            Slot::Bench => true,
            dedicated => *dedicated == Slot::dedicated(pos),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}
