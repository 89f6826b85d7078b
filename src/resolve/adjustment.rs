//! Adjustment-phase resolution.
//!
//! Validates and applies build/disband orders at the end of a game year.
//! Builds are capped at the power's allowance and at one per province;
//! disbands are capped at the deficit. A power that submits fewer
//! disbands than owed simply keeps the surplus units (the deficit
//! persists into the next year). After application, a power with no
//! units and no centers is marked eliminated.

use tracing::{debug, info};

use crate::board::{GameState, Order, Power, Province, ALL_POWERS};

use super::{OrderOutcome, ResolvedOrder};

/// Resolves adjustment-phase orders for all powers.
pub fn resolve_adjustments(orders: &[(Order, Power)], state: &GameState) -> Vec<ResolvedOrder> {
    let mut results = Vec::new();

    for &power in &ALL_POWERS {
        let needed = state.power(power).adjustment_needed();
        let mut built: i32 = 0;
        let mut disbanded: i32 = 0;
        let mut build_sites: Vec<Province> = Vec::new();
        let mut disband_sites: Vec<Province> = Vec::new();

        for (order, p) in orders {
            if *p != power {
                continue;
            }
            let outcome = match order {
                Order::Build { unit } => {
                    if needed <= 0 || built >= needed {
                        OrderOutcome::Failed
                    } else if build_sites.contains(&unit.province) {
                        OrderOutcome::Failed // one new unit per province
                    } else {
                        built += 1;
                        build_sites.push(unit.province);
                        OrderOutcome::Succeeded
                    }
                }
                Order::Disband { unit } => {
                    if needed >= 0 || disbanded >= -needed {
                        OrderOutcome::Failed
                    } else if disband_sites.contains(&unit.province) {
                        OrderOutcome::Failed
                    } else {
                        disbanded += 1;
                        disband_sites.push(unit.province);
                        OrderOutcome::Succeeded
                    }
                }
                // Any other order form is invalid during adjustments.
                _ => OrderOutcome::Failed,
            };
            results.push(ResolvedOrder { order: *order, power, outcome });
        }

        if needed < 0 && disbanded < -needed {
            debug!(
                power = power.name(),
                owed = -needed,
                submitted = disbanded,
                "disband deficit persists"
            );
        }
    }

    results
}

/// Applies resolved adjustments to the state and marks eliminations.
pub fn apply_adjustments(state: &mut GameState, results: &[ResolvedOrder]) {
    for r in results {
        if r.outcome != OrderOutcome::Succeeded {
            continue;
        }
        match r.order {
            Order::Build { unit } => {
                state.power_mut(r.power).units.push(unit);
            }
            Order::Disband { unit } => {
                state.power_mut(r.power).take_unit(unit.province);
            }
            _ => {}
        }
    }

    for ps in state.powers.values_mut() {
        if !ps.is_eliminated && ps.units.is_empty() && ps.supply_centers.is_empty() {
            ps.is_eliminated = true;
            info!(power = ps.power.name(), "power eliminated");
        }
    }
}
