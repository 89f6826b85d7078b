//! Legal order generation.
//!
//! Generates the exhaustive set of legal orders for a given power in the
//! current game state, covering the movement, retreat, and adjustment
//! phases. This catalog is the contract for order validation: the
//! adjudicator accepts exactly what is enumerated here.

pub mod adjustment;
pub mod movement;
pub mod retreat;

use rand::Rng;

use crate::board::{GameState, Order, Phase, Power};

/// Returns every legal order for the given power in the current phase.
pub fn available_orders(state: &GameState, power: Power) -> Vec<Order> {
    match state.phase {
        Phase::Movement => {
            let mut orders = Vec::new();
            for unit in &state.power(power).units {
                orders.extend(movement::legal_orders(*unit, state));
            }
            orders
        }
        Phase::Retreat => {
            let mut orders = Vec::new();
            for (&prov, unit) in &state.dislodged {
                if unit.power == power {
                    orders.extend(retreat::legal_retreats(prov, state));
                }
            }
            orders
        }
        Phase::Adjustment => adjustment::legal_adjustments(power, state),
    }
}

/// Generates a set of random legal orders for the given power.
///
/// For the movement phase, picks one random order per unit.
/// For the retreat phase, picks one random order per unit awaiting retreat.
/// For the adjustment phase, picks a random legal build/disband subset
/// respecting the power's adjustment count.
pub fn random_orders(power: Power, state: &GameState, rng: &mut impl Rng) -> Vec<Order> {
    match state.phase {
        Phase::Movement => random_movement_orders(power, state, rng),
        Phase::Retreat => random_retreat_orders(power, state, rng),
        Phase::Adjustment => random_adjustment_orders(power, state, rng),
    }
}

/// Picks one random legal movement order for each of the power's units.
fn random_movement_orders(power: Power, state: &GameState, rng: &mut impl Rng) -> Vec<Order> {
    let mut orders = Vec::new();
    for unit in &state.power(power).units {
        let legal = movement::legal_orders(*unit, state);
        if !legal.is_empty() {
            orders.push(legal[rng.gen_range(0..legal.len())]);
        }
    }
    orders
}

/// Picks one random legal retreat order for each of the power's units
/// awaiting retreat.
fn random_retreat_orders(power: Power, state: &GameState, rng: &mut impl Rng) -> Vec<Order> {
    let mut orders = Vec::new();
    for (&prov, unit) in &state.dislodged {
        if unit.power != power {
            continue;
        }
        let legal = retreat::legal_retreats(prov, state);
        if !legal.is_empty() {
            orders.push(legal[rng.gen_range(0..legal.len())]);
        }
    }
    orders
}

/// Picks random build/disband orders for the adjustment phase.
///
/// When building: selects up to `adjustment_needed` builds at distinct
/// provinces. When disbanding: selects exactly the required number of
/// disbands.
fn random_adjustment_orders(power: Power, state: &GameState, rng: &mut impl Rng) -> Vec<Order> {
    let needed = state.power(power).adjustment_needed();
    let legal = adjustment::legal_adjustments(power, state);
    if legal.is_empty() {
        return Vec::new();
    }

    if needed > 0 {
        let mut orders = Vec::new();
        let mut used: Vec<crate::board::Province> = Vec::new();
        for _ in 0..needed {
            let open: Vec<&Order> = legal
                .iter()
                .filter(|o| match o {
                    Order::Build { unit } => !used.contains(&unit.province),
                    _ => false,
                })
                .collect();
            if open.is_empty() {
                break; // fewer open home centers than builds owed
            }
            let chosen = *open[rng.gen_range(0..open.len())];
            if let Order::Build { unit } = chosen {
                used.push(unit.province);
            }
            orders.push(chosen);
        }
        orders
    } else {
        let mut disbands: Vec<Order> = legal
            .into_iter()
            .filter(|o| matches!(o, Order::Disband { .. }))
            .collect();
        let count = (-needed) as usize;
        // Fisher-Yates partial shuffle, then take the required count.
        for i in 0..count.min(disbands.len()) {
            let j = rng.gen_range(i..disbands.len());
            disbands.swap(i, j);
        }
        disbands.truncate(count);
        disbands
    }
}
