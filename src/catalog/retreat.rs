//! Retreat-phase order generation.
//!
//! Enumerates legal retreat and disband orders for units awaiting retreat.
//! The escape provinces were computed by the adjudicator at dislodgement
//! time and stored in `pending_retreats`; this module only reads them.

use crate::board::{GameState, Order, Province};

/// Generates all legal retreat-phase orders for the unit driven from the
/// given province.
///
/// Returns an empty vec if no unit is awaiting retreat there.
pub fn legal_retreats(province: Province, state: &GameState) -> Vec<Order> {
    let unit = match state.dislodged.get(&province) {
        Some(u) => *u,
        None => return Vec::new(),
    };

    let mut orders = Vec::new();

    // Disband is always legal for a unit awaiting retreat.
    orders.push(Order::Disband { unit });

    if let Some(escapes) = state.pending_retreats.get(&province) {
        for &dest in escapes {
            orders.push(Order::Retreat { unit, dest });
        }
    }

    orders
}
