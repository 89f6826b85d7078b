//! Retreat-phase resolution.
//!
//! Retreat orders relocate the pooled unit to their destination; disbands
//! remove it. A unit awaiting retreat that receives no order is disbanded
//! (civil disorder). Two retreats aimed at the same province are settled
//! ordinally: the first claims it, the later one disbands. The retreat
//! pool is cleared in full afterwards; nothing carries over.

use tracing::debug;

use crate::board::{GameState, Order, Power, PROVINCE_COUNT};

use super::{OrderOutcome, ResolvedOrder};

/// Resolves retreat-phase orders, including synthesized disbands for
/// unordered units in the retreat pool.
pub fn resolve_retreats(orders: &[(Order, Power)], state: &GameState) -> Vec<ResolvedOrder> {
    let mut results = Vec::new();

    // Track which pooled provinces received an order.
    let mut has_order = [false; PROVINCE_COUNT];
    for (order, _) in orders {
        has_order[order.unit().province as usize] = true;
    }

    // Civil disorder: a unit nobody ordered is disbanded.
    for (&prov, unit) in &state.dislodged {
        if !has_order[prov as usize] {
            debug!(province = prov.abbr(), "unordered unit in retreat pool disbands");
            results.push(ResolvedOrder {
                order: Order::Disband { unit: *unit },
                power: unit.power,
                outcome: OrderOutcome::Succeeded,
            });
        }
    }

    // Claimed provinces: anything occupied now, plus destinations taken by
    // earlier retreats in input order.
    let mut claimed = [false; PROVINCE_COUNT];
    for unit in state.all_units() {
        claimed[unit.province as usize] = true;
    }

    for (order, power) in orders {
        let outcome = match order {
            Order::Disband { .. } => OrderOutcome::Succeeded,
            Order::Retreat { dest, .. } => {
                if claimed[*dest as usize] {
                    OrderOutcome::Bounced
                } else {
                    claimed[*dest as usize] = true;
                    OrderOutcome::Succeeded
                }
            }
            // Any other order form is invalid during retreats.
            _ => OrderOutcome::Failed,
        };
        results.push(ResolvedOrder { order: *order, power: *power, outcome });
    }

    results
}

/// Applies resolved retreats to the state.
///
/// Successful retreats place the unit at its destination; everything else
/// in the pool is gone. The pool itself is emptied.
pub fn apply_retreats(state: &mut GameState, results: &[ResolvedOrder]) {
    for r in results {
        if r.outcome != OrderOutcome::Succeeded {
            continue;
        }
        if let Order::Retreat { unit, dest } = r.order {
            let mut relocated = unit;
            relocated.province = dest;
            state.power_mut(r.power).units.push(relocated);
        }
        // Disbands: the unit simply never returns to the board.
    }

    state.pending_retreats.clear();
    state.dislodged.clear();
}
