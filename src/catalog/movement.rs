//! Movement-phase order generation.
//!
//! Enumerates legal hold, move, and support orders for each unit during a
//! movement phase. Support is deliberately permissive: any unit adjacent
//! to the supporter may be supported, holding or moving, regardless of
//! what that unit's own order turns out to be. Convoy orders are not
//! offered (convoy routing is not adjudicated).

use crate::board::adjacency::adjacent;
use crate::board::{GameState, Order, Unit};

/// Generates all legal movement-phase orders for the given unit.
pub fn legal_orders(unit: Unit, state: &GameState) -> Vec<Order> {
    let mut orders = Vec::new();

    // Hold is always legal.
    orders.push(Order::Hold { unit });

    // Moves to every province reachable by this unit type.
    let reachable = adjacent(unit.province, unit.unit_type);
    for &dest in &reachable {
        orders.push(Order::Move { unit, dest, via_convoy: false });
    }

    // Supports for every adjacent unit, friend or foe: one support-hold,
    // plus one support-move per destination the supported unit could take
    // (excluding the supporter's own province).
    for other in state.all_units() {
        if other.province == unit.province {
            continue;
        }
        if !reachable.contains(&other.province) {
            continue;
        }
        orders.push(Order::Support { unit, supported: other, dest: None });
        for dest in adjacent(other.province, other.unit_type) {
            if dest == unit.province {
                continue;
            }
            orders.push(Order::Support { unit, supported: other, dest: Some(dest) });
        }
    }

    orders
}
