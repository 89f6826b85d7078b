//! Adjustment-phase order generation.
//!
//! Enumerates legal build and disband orders for the winter phase at the
//! end of a game year. Builds go only to unoccupied home centers the power
//! still owns; disbands are offered for every unit when the power is over
//! its center count.

use crate::board::{GameState, Order, Power, ProvinceType, Unit, UnitType};

/// Generates all legal adjustment-phase orders for a given power.
///
/// Compares center count to unit count:
/// - More centers than units: builds in owned, unoccupied home centers.
/// - Fewer centers than units: a disband option for every unit.
/// - Equal: no orders (empty vec).
pub fn legal_adjustments(power: Power, state: &GameState) -> Vec<Order> {
    let ps = state.power(power);
    let needed = ps.adjustment_needed();

    if needed > 0 {
        generate_builds(power, state)
    } else if needed < 0 {
        ps.units.iter().map(|&unit| Order::Disband { unit }).collect()
    } else {
        Vec::new()
    }
}

/// Build orders for every owned, unoccupied home center.
///
/// An army can be built at any such center; a fleet only where the
/// center is coastal.
fn generate_builds(power: Power, state: &GameState) -> Vec<Order> {
    let ps = state.power(power);
    let mut orders = Vec::new();

    for &center in &ps.home_centers {
        if !ps.supply_centers.contains(&center) {
            continue; // lost to another power
        }
        if state.unit_at(center).is_some() {
            continue;
        }

        orders.push(Order::Build { unit: Unit::new(UnitType::Army, center, power) });
        if center.province_type() == ProvinceType::Coastal {
            orders.push(Order::Build { unit: Unit::new(UnitType::Fleet, center, power) });
        }
    }

    orders
}
