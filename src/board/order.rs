//! Order types for all game phases.
//!
//! Represents the full set of orders a power can issue: hold, move,
//! support, convoy, retreat, disband, and build. Each variant carries
//! exactly the data needed to unambiguously specify the order, so every
//! adjudication branch can match exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::Phase;
use super::unit::Unit;
use crate::board::province::Province;

/// An order issued to a single unit.
///
/// Convoy orders and `via_convoy` moves are carried through resolution as
/// recognized order forms but add no movement range and no strength; fleet
/// chain routing is not adjudicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Hold in place: `A vie H`
    Hold {
        unit: Unit,
    },

    /// Move to an adjacent province: `A bud - rum`
    Move {
        unit: Unit,
        dest: Province,
        via_convoy: bool,
    },

    /// Support an adjacent unit, either holding (`dest: None`) or moving
    /// to a destination: `A tyr S A vie H`, `A gal S A bud - rum`
    Support {
        unit: Unit,
        supported: Unit,
        dest: Option<Province>,
    },

    /// Convoy an army across water: `F mao C A bre - spa`
    Convoy {
        unit: Unit,
        convoyed: Unit,
        dest: Province,
    },

    /// Retreat a dislodged unit: `A vie R boh`
    Retreat {
        unit: Unit,
        dest: Province,
    },

    /// Remove the unit (retreat phase or adjustment phase): `A war D`
    Disband {
        unit: Unit,
    },

    /// Place a new unit at an owned, unoccupied home center: `F bre B`
    Build {
        unit: Unit,
    },
}

impl Order {
    /// Returns the unit issuing (or created by) this order.
    pub const fn unit(&self) -> Unit {
        match self {
            Order::Hold { unit }
            | Order::Move { unit, .. }
            | Order::Support { unit, .. }
            | Order::Convoy { unit, .. }
            | Order::Retreat { unit, .. }
            | Order::Disband { unit }
            | Order::Build { unit } => *unit,
        }
    }

    /// Returns true if this order form can be submitted during `phase`.
    ///
    /// Disband is legal in both the retreat and adjustment phases.
    pub const fn legal_in(&self, phase: Phase) -> bool {
        match self {
            Order::Hold { .. }
            | Order::Move { .. }
            | Order::Support { .. }
            | Order::Convoy { .. } => matches!(phase, Phase::Movement),
            Order::Retreat { .. } => matches!(phase, Phase::Retreat),
            Order::Disband { .. } => matches!(phase, Phase::Retreat | Phase::Adjustment),
            Order::Build { .. } => matches!(phase, Phase::Adjustment),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Hold { unit } => write!(f, "{} H", unit),
            Order::Move { unit, dest, via_convoy } => {
                if *via_convoy {
                    write!(f, "{} - {} via convoy", unit, dest.abbr())
                } else {
                    write!(f, "{} - {}", unit, dest.abbr())
                }
            }
            Order::Support { unit, supported, dest: Some(dest) } => {
                write!(f, "{} S {} - {}", unit, supported, dest.abbr())
            }
            Order::Support { unit, supported, dest: None } => {
                write!(f, "{} S {} H", unit, supported)
            }
            Order::Convoy { unit, convoyed, dest } => {
                write!(f, "{} C {} - {}", unit, convoyed, dest.abbr())
            }
            Order::Retreat { unit, dest } => write!(f, "{} R {}", unit, dest.abbr()),
            Order::Disband { unit } => write!(f, "{} D", unit),
            Order::Build { unit } => write!(f, "{} B", unit),
        }
    }
}
