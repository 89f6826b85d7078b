//! Unit types and ownership.
//!
//! Represents armies and fleets, their owning power, and their current
//! position on the board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::province::{Power, Province};

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the uppercase single-letter abbreviation used in order notation.
    pub const fn letter(self) -> char {
        match self {
            UnitType::Army => 'A',
            UnitType::Fleet => 'F',
        }
    }

    /// Parses a unit type from its single-letter abbreviation.
    pub fn from_letter(c: char) -> Option<UnitType> {
        match c {
            'A' => Some(UnitType::Army),
            'F' => Some(UnitType::Fleet),
            _ => None,
        }
    }
}

/// A military unit on the board.
///
/// Owned by exactly one power; created at game setup or by builds,
/// destroyed by disbands or failed retreats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub unit_type: UnitType,
    pub province: Province,
    pub power: Power,
}

impl Unit {
    pub const fn new(unit_type: UnitType, province: Province, power: Power) -> Self {
        Unit { unit_type, province, power }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.unit_type.letter(), self.province.abbr())
    }
}
