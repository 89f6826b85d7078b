//! Game state representation.
//!
//! Holds the complete snapshot of a game in progress: year, season, phase,
//! per-power holdings, units awaiting retreat, and the diplomatic message
//! history. The state is mutated in place by the adjudicator and phase
//! scheduler; callers only ever see it through the environment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::province::{Power, Province, ALL_POWERS};
use super::unit::{Unit, UnitType};

/// Supply centers required for a solo victory.
pub const VICTORY_CENTERS: usize = 18;

/// The season of a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Fall,
    Winter,
}

impl Season {
    /// Returns the uppercase label used in phase banners.
    pub const fn label(self) -> &'static str {
        match self {
            Season::Spring => "SPRING",
            Season::Fall => "FALL",
            Season::Winter => "WINTER",
        }
    }
}

/// The phase within a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Movement,
    Retreat,
    Adjustment,
}

impl Phase {
    /// Returns the uppercase label used in phase banners.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Movement => "MOVEMENT",
            Phase::Retreat => "RETREAT",
            Phase::Adjustment => "ADJUSTMENT",
        }
    }
}

/// A diplomatic message between powers.
///
/// The payload is opaque to the engine; it is stored and echoed back but
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Power,
    pub recipient: Power,
    pub content: String,
    pub phase: String,
}

/// Per-power holdings: units, owned supply centers, and home centers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerState {
    pub power: Power,
    pub units: Vec<Unit>,
    pub supply_centers: Vec<Province>,
    pub home_centers: Vec<Province>,
    pub is_eliminated: bool,
}

impl PowerState {
    /// Number of units this power currently fields.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of supply centers this power currently owns.
    pub fn center_count(&self) -> usize {
        self.supply_centers.len()
    }

    /// Units to build (positive) or disband (negative) to match the
    /// center count. Recomputed on demand, never stored.
    pub fn adjustment_needed(&self) -> i32 {
        self.center_count() as i32 - self.unit_count() as i32
    }

    /// Returns this power's unit in the given province, if any.
    pub fn unit_in(&self, province: Province) -> Option<&Unit> {
        self.units.iter().find(|u| u.province == province)
    }

    /// Removes and returns this power's unit in the given province.
    pub fn take_unit(&mut self, province: Province) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.province == province)?;
        Some(self.units.remove(idx))
    }
}

/// The classic 1901 starting deployment: 22 units across the seven powers.
pub static STARTING_UNITS: [(Power, UnitType, Province); 22] = [
    (Power::Austria, UnitType::Army, Province::Bud),
    (Power::Austria, UnitType::Army, Province::Vie),
    (Power::Austria, UnitType::Fleet, Province::Tri),
    (Power::England, UnitType::Fleet, Province::Edi),
    (Power::England, UnitType::Fleet, Province::Lon),
    (Power::England, UnitType::Army, Province::Lvp),
    (Power::France, UnitType::Fleet, Province::Bre),
    (Power::France, UnitType::Army, Province::Mar),
    (Power::France, UnitType::Army, Province::Par),
    (Power::Germany, UnitType::Fleet, Province::Kie),
    (Power::Germany, UnitType::Army, Province::Ber),
    (Power::Germany, UnitType::Army, Province::Mun),
    (Power::Italy, UnitType::Fleet, Province::Nap),
    (Power::Italy, UnitType::Army, Province::Rom),
    (Power::Italy, UnitType::Army, Province::Ven),
    (Power::Russia, UnitType::Army, Province::Mos),
    (Power::Russia, UnitType::Army, Province::War),
    (Power::Russia, UnitType::Fleet, Province::Sev),
    (Power::Russia, UnitType::Fleet, Province::Stp),
    (Power::Turkey, UnitType::Fleet, Province::Ank),
    (Power::Turkey, UnitType::Army, Province::Con),
    (Power::Turkey, UnitType::Army, Province::Smy),
];

/// Complete game state at a point in time.
///
/// Invariant: at most one unit occupies a province. Dislodged units are
/// taken off the board into `dislodged` until the retreat phase resolves,
/// so the invariant holds between phases as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub year: u16,
    pub season: Season,
    pub phase: Phase,
    pub powers: BTreeMap<Power, PowerState>,
    /// Escape provinces for each unit awaiting retreat, keyed by the
    /// province it was driven from.
    pub pending_retreats: BTreeMap<Province, Vec<Province>>,
    /// The units awaiting retreat, keyed the same way.
    pub dislodged: BTreeMap<Province, Unit>,
    pub message_history: Vec<Message>,
}

impl GameState {
    /// Creates the 1901 starting position from the static map data.
    pub fn starting_position() -> Self {
        let mut powers = BTreeMap::new();
        for &power in &ALL_POWERS {
            let units: Vec<Unit> = STARTING_UNITS
                .iter()
                .filter(|(p, _, _)| *p == power)
                .map(|&(p, ut, prov)| Unit::new(ut, prov, p))
                .collect();
            let home_centers: Vec<Province> = crate::board::province::ALL_PROVINCES
                .iter()
                .filter(|prov| prov.home_power() == Some(power))
                .copied()
                .collect();
            powers.insert(
                power,
                PowerState {
                    power,
                    units,
                    supply_centers: home_centers.clone(),
                    home_centers,
                    is_eliminated: false,
                },
            );
        }

        GameState {
            year: 1901,
            season: Season::Spring,
            phase: Phase::Movement,
            powers,
            pending_retreats: BTreeMap::new(),
            dislodged: BTreeMap::new(),
            message_history: Vec::new(),
        }
    }

    /// Returns the state of a single power.
    ///
    /// Every power always has an entry; the map is seeded with all seven
    /// at construction and entries are never removed.
    pub fn power(&self, power: Power) -> &PowerState {
        &self.powers[&power]
    }

    /// Mutable access to a single power's state.
    pub fn power_mut(&mut self, power: Power) -> &mut PowerState {
        self.powers.get_mut(&power).expect("all seven powers are always present")
    }

    /// Returns the unit occupying a province, if any.
    pub fn unit_at(&self, province: Province) -> Option<Unit> {
        self.powers
            .values()
            .flat_map(|ps| ps.units.iter())
            .find(|u| u.province == province)
            .copied()
    }

    /// Returns every unit on the board, in power order.
    pub fn all_units(&self) -> Vec<Unit> {
        self.powers.values().flat_map(|ps| ps.units.iter().copied()).collect()
    }

    /// Returns the powers that have not been eliminated.
    pub fn active_powers(&self) -> Vec<Power> {
        self.powers
            .values()
            .filter(|ps| !ps.is_eliminated)
            .map(|ps| ps.power)
            .collect()
    }

    /// Supply-center counts for all powers.
    pub fn center_counts(&self) -> BTreeMap<Power, usize> {
        self.powers.iter().map(|(p, ps)| (*p, ps.center_count())).collect()
    }

    /// Returns the power holding enough supply centers for a solo
    /// victory, if any.
    pub fn winner(&self) -> Option<Power> {
        self.powers
            .values()
            .find(|ps| ps.center_count() >= VICTORY_CENTERS)
            .map(|ps| ps.power)
    }

    /// Human-readable phase banner, e.g. `SPRING 1901 MOVEMENT`.
    pub fn phase_banner(&self) -> String {
        format!("{} {} {}", self.season.label(), self.year, self.phase.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::province::SUPPLY_CENTER_COUNT;

    #[test]
    fn starting_position_unit_counts() {
        let state = GameState::starting_position();
        assert_eq!(state.all_units().len(), 22);
        for (&power, ps) in &state.powers {
            let expected = if power == Power::Russia { 4 } else { 3 };
            assert_eq!(ps.unit_count(), expected, "{:?} unit count", power);
            assert_eq!(ps.center_count(), expected, "{:?} center count", power);
            assert_eq!(ps.adjustment_needed(), 0);
            assert!(!ps.is_eliminated);
        }
    }

    #[test]
    fn starting_position_france() {
        let state = GameState::starting_position();
        let france = state.power(Power::France);
        assert_eq!(
            france.unit_in(Province::Bre).map(|u| u.unit_type),
            Some(UnitType::Fleet)
        );
        assert_eq!(
            france.unit_in(Province::Mar).map(|u| u.unit_type),
            Some(UnitType::Army)
        );
        assert_eq!(
            france.unit_in(Province::Par).map(|u| u.unit_type),
            Some(UnitType::Army)
        );
        assert_eq!(
            france.supply_centers,
            vec![Province::Bre, Province::Mar, Province::Par]
        );
    }

    #[test]
    fn starting_position_phase() {
        let state = GameState::starting_position();
        assert_eq!(state.year, 1901);
        assert_eq!(state.season, Season::Spring);
        assert_eq!(state.phase, Phase::Movement);
        assert!(state.pending_retreats.is_empty());
        assert!(state.dislodged.is_empty());
        assert!(state.message_history.is_empty());
    }

    #[test]
    fn owned_centers_leave_twelve_neutral() {
        let state = GameState::starting_position();
        let owned: usize = state.powers.values().map(|ps| ps.center_count()).sum();
        assert_eq!(SUPPLY_CENTER_COUNT - owned, 12);
    }

    #[test]
    fn one_unit_per_province_at_start() {
        let state = GameState::starting_position();
        let mut seen = std::collections::HashSet::new();
        for unit in state.all_units() {
            assert!(seen.insert(unit.province), "duplicate unit in {:?}", unit.province);
        }
    }

    #[test]
    fn unit_at_finds_units() {
        let state = GameState::starting_position();
        let unit = state.unit_at(Province::Mos).unwrap();
        assert_eq!(unit.power, Power::Russia);
        assert_eq!(unit.unit_type, UnitType::Army);
        assert_eq!(state.unit_at(Province::Spa), None);
    }

    #[test]
    fn take_unit_removes() {
        let mut state = GameState::starting_position();
        let taken = state.power_mut(Power::France).take_unit(Province::Par);
        assert!(taken.is_some());
        assert_eq!(state.power(Power::France).unit_count(), 2);
        assert_eq!(state.unit_at(Province::Par), None);
    }

    #[test]
    fn winner_requires_eighteen_centers() {
        let mut state = GameState::starting_position();
        assert_eq!(state.winner(), None);
        let centers: Vec<Province> = crate::board::province::ALL_PROVINCES
            .iter()
            .filter(|p| p.is_supply_center())
            .take(18)
            .copied()
            .collect();
        state.power_mut(Power::Russia).supply_centers = centers;
        assert_eq!(state.winner(), Some(Power::Russia));
    }

    #[test]
    fn phase_banner_format() {
        let state = GameState::starting_position();
        assert_eq!(state.phase_banner(), "SPRING 1901 MOVEMENT");
    }
}
