//! The environment: the only surface other code touches.
//!
//! Wraps one game's state behind `reset` / `get_available_orders` / `step` /
//! `is_game_over` / `get_episode_result`. A step consumes a complete batch
//! of orders from all powers, validates it against the catalog, resolves
//! the current phase, advances the phase machine, and reports the result.
//! Steps are atomic: a rejected batch leaves the state untouched.
//!
//! Order collection (agents, negotiation) and trajectory logging live
//! outside; the environment is agnostic to how orders are produced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{
    GameState, Message, Order, Phase, Power, Province, Season, Unit, ALL_POWERS,
};
use crate::catalog;
use crate::resolve::{self, OrderOutcome, ResolvedOrder};

/// The first game year.
pub const START_YEAR: u16 = 1901;

/// Environment configuration.
///
/// Deserializable so a driver can load it from JSON config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvOptions {
    /// Whether diplomatic messages are retained and echoed in step results.
    pub press_mode: bool,
    /// Maximum number of game years before the episode ends in a draw.
    pub max_years: u16,
}

impl Default for EnvOptions {
    fn default() -> Self {
        EnvOptions { press_mode: false, max_years: 20 }
    }
}

impl EnvOptions {
    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Errors surfaced at the `step` boundary.
///
/// Every variant is a caller-input problem; the engine itself is
/// deterministic and has no transient failure modes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("game is over; no further steps are accepted")]
    GameOver,

    #[error("game still in progress; episode result is not available")]
    GameInProgress,

    #[error("order '{order}' cannot be submitted during the {phase:?} phase")]
    WrongPhase { order: Order, phase: Phase },

    #[error("illegal order for {power:?}: '{order}' is not among its available orders")]
    IllegalOrder { power: Power, order: Order },

    #[error("more than one order submitted for the unit in {province:?}")]
    DuplicateOrder { province: Province },
}

/// The atomic output of one adjudication step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    /// Snapshot of the state after resolution and phase advance.
    pub state: GameState,
    /// Every order that was adjudicated, with its success flag. Includes
    /// defaulted holds and civil-disorder disbands.
    pub orders_resolved: BTreeMap<Power, Vec<(Order, bool)>>,
    /// Units that must retreat before the next movement phase.
    pub retreats_needed: BTreeMap<Power, Vec<Unit>>,
    /// The most recent diplomatic messages (press mode only).
    pub messages: Vec<Message>,
    /// Human-readable account of the phase.
    pub summary: String,
}

/// Snapshot produced when an episode terminates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeResult {
    pub winner: Option<Power>,
    pub final_state: GameState,
    pub num_years: u16,
    /// Supply-center counts recorded at each Winter adjustment.
    pub center_history: Vec<BTreeMap<Power, usize>>,
}

impl EpisodeResult {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// One game in progress. Exclusively owns its `GameState`; run concurrent
/// games with separate instances.
pub struct Environment {
    options: EnvOptions,
    state: GameState,
    center_history: Vec<BTreeMap<Power, usize>>,
}

impl Environment {
    /// Creates an environment seeded at the 1901 starting position.
    pub fn new(options: EnvOptions) -> Self {
        Environment {
            options,
            state: GameState::starting_position(),
            center_history: Vec::new(),
        }
    }

    /// Reseeds the game from the starting position.
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::starting_position();
        self.center_history.clear();
        info!("environment reset to {}", self.state.phase_banner());
        &self.state
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration this environment was built with.
    pub fn options(&self) -> &EnvOptions {
        &self.options
    }

    /// Every legal order for the given power in the current phase.
    /// Pure query; does not mutate.
    pub fn get_available_orders(&self, power: Power) -> Vec<Order> {
        catalog::available_orders(&self.state, power)
    }

    /// True once the episode has terminated: a solo victor, the year
    /// horizon reached, or at most one power left standing.
    pub fn is_game_over(&self) -> bool {
        self.state.winner().is_some()
            || self.state.year - START_YEAR >= self.options.max_years
            || self.state.active_powers().len() <= 1
    }

    /// Executes one adjudication step.
    ///
    /// The batch must be complete: the environment fills in Hold for any
    /// movement-phase unit without an order, so callers that cannot obtain
    /// an order for a power may simply omit it. All orders are validated
    /// against the catalog before anything is mutated.
    pub fn step(
        &mut self,
        orders: BTreeMap<Power, Vec<Order>>,
        messages: Vec<Message>,
    ) -> Result<StepResult, EnvError> {
        if self.is_game_over() {
            return Err(EnvError::GameOver);
        }

        self.validate(&orders)?;

        let banner = self.state.phase_banner();
        debug!(
            phase = %banner,
            orders = orders.values().map(Vec::len).sum::<usize>(),
            "adjudicating step"
        );

        if self.options.press_mode && !messages.is_empty() {
            self.state.message_history.extend(messages);
        }

        let batch = self.flatten_with_defaults(&orders);

        let (resolved, retreats_needed) = match self.state.phase {
            Phase::Movement => {
                let outcome = resolve::resolve_movement(&batch, &self.state);
                resolve::apply_movement(&mut self.state, &outcome);
                if self.state.season == Season::Fall {
                    resolve::phase::update_center_ownership(&mut self.state);
                }
                let mut retreats: BTreeMap<Power, Vec<Unit>> = BTreeMap::new();
                for d in &outcome.dislodged {
                    retreats.entry(d.unit.power).or_default().push(d.unit);
                }
                (outcome.resolved, retreats)
            }
            Phase::Retreat => {
                let resolved = resolve::retreat::resolve_retreats(&batch, &self.state);
                resolve::retreat::apply_retreats(&mut self.state, &resolved);
                (resolved, BTreeMap::new())
            }
            Phase::Adjustment => {
                let resolved = resolve::adjustment::resolve_adjustments(&batch, &self.state);
                resolve::adjustment::apply_adjustments(&mut self.state, &resolved);
                (resolved, BTreeMap::new())
            }
        };

        resolve::phase::advance(&mut self.state);

        if self.state.season == Season::Winter && self.state.phase == Phase::Adjustment {
            self.center_history.push(self.state.center_counts());
        }

        if let Some(winner) = self.state.winner() {
            info!(power = winner.name(), "solo victory reached");
        }

        let summary = self.summarize(&banner, &resolved);
        let mut orders_resolved: BTreeMap<Power, Vec<(Order, bool)>> = BTreeMap::new();
        for r in &resolved {
            orders_resolved
                .entry(r.power)
                .or_default()
                .push((r.order, r.outcome.is_success()));
        }

        let recent_messages = if self.options.press_mode {
            let history = &self.state.message_history;
            history[history.len().saturating_sub(10)..].to_vec()
        } else {
            Vec::new()
        };

        Ok(StepResult {
            state: self.state.clone(),
            orders_resolved,
            retreats_needed,
            messages: recent_messages,
            summary,
        })
    }

    /// Snapshot of the finished episode.
    pub fn get_episode_result(&self) -> Result<EpisodeResult, EnvError> {
        if !self.is_game_over() {
            return Err(EnvError::GameInProgress);
        }
        Ok(EpisodeResult {
            winner: self.state.winner(),
            final_state: self.state.clone(),
            num_years: self.state.year - START_YEAR,
            center_history: self.center_history.clone(),
        })
    }

    /// Rejects the whole batch if any order is out of phase, not in the
    /// catalog, or duplicates another order for the same unit.
    fn validate(&self, orders: &BTreeMap<Power, Vec<Order>>) -> Result<(), EnvError> {
        for (&power, list) in orders {
            let legal = catalog::available_orders(&self.state, power);
            let mut seen: Vec<Province> = Vec::new();
            for order in list {
                if !order.legal_in(self.state.phase) {
                    return Err(EnvError::WrongPhase { order: *order, phase: self.state.phase });
                }
                if !legal.contains(order) {
                    return Err(EnvError::IllegalOrder { power, order: *order });
                }
                // One order per unit; adjustment builds are per-province
                // too, since a build names the unit it creates.
                let province = order.unit().province;
                if self.state.phase != Phase::Adjustment && seen.contains(&province) {
                    return Err(EnvError::DuplicateOrder { province });
                }
                seen.push(province);
            }
        }
        Ok(())
    }

    /// Flattens the per-power order map into adjudication order: powers in
    /// declaration order, each power's orders as submitted. During the
    /// movement phase, units without an order are defaulted to Hold.
    fn flatten_with_defaults(&self, orders: &BTreeMap<Power, Vec<Order>>) -> Vec<(Order, Power)> {
        let mut batch: Vec<(Order, Power)> = Vec::new();
        for &power in &ALL_POWERS {
            let submitted = orders.get(&power).map(Vec::as_slice).unwrap_or(&[]);
            for order in submitted {
                batch.push((*order, power));
            }
            if self.state.phase == Phase::Movement {
                for unit in &self.state.power(power).units {
                    let covered = submitted.iter().any(|o| o.unit().province == unit.province);
                    if !covered {
                        batch.push((Order::Hold { unit: *unit }, power));
                    }
                }
            }
        }
        batch
    }

    /// Builds the human-readable turn summary: phase banner, per-power
    /// order success counts, and supply-center standings.
    fn summarize(&self, banner: &str, resolved: &[ResolvedOrder]) -> String {
        let mut lines = vec![format!("=== {} ===", banner)];

        for &power in &ALL_POWERS {
            let for_power: Vec<&ResolvedOrder> =
                resolved.iter().filter(|r| r.power == power).collect();
            if !for_power.is_empty() {
                let ok = for_power
                    .iter()
                    .filter(|r| r.outcome == OrderOutcome::Succeeded)
                    .count();
                lines.push(format!(
                    "{}: {}/{} orders succeeded",
                    power.display_name(),
                    ok,
                    for_power.len()
                ));
            }
        }

        lines.push(String::new());
        lines.push("Supply Center Counts:".to_string());
        let mut standings: Vec<(Power, usize)> = self
            .state
            .powers
            .values()
            .map(|ps| (ps.power, ps.center_count()))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        for (power, count) in standings {
            if count > 0 {
                lines.push(format!("  {}: {}", power.display_name(), count));
            }
        }

        lines.join("\n")
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(EnvOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Province, UnitType};

    fn movement_orders(env: &Environment, moves: &[(Power, Province, Province)]) -> BTreeMap<Power, Vec<Order>> {
        let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
        for &(power, from, to) in moves {
            let unit = *env.state().power(power).unit_in(from).expect("unit present");
            orders
                .entry(power)
                .or_default()
                .push(Order::Move { unit, dest: to, via_convoy: false });
        }
        orders
    }

    #[test]
    fn fresh_environment_is_spring_1901() {
        let env = Environment::default();
        assert_eq!(env.state().year, 1901);
        assert_eq!(env.state().season, Season::Spring);
        assert_eq!(env.state().phase, Phase::Movement);
        assert!(!env.is_game_over());
    }

    #[test]
    fn empty_step_defaults_everyone_to_hold() {
        let mut env = Environment::default();
        let result = env.step(BTreeMap::new(), Vec::new()).unwrap();
        // 22 defaulted holds, all succeeding.
        let total: usize = result.orders_resolved.values().map(Vec::len).sum();
        assert_eq!(total, 22);
        assert!(result
            .orders_resolved
            .values()
            .flatten()
            .all(|(o, ok)| matches!(o, Order::Hold { .. }) && *ok));
        assert_eq!(result.state.season, Season::Fall);
    }

    #[test]
    fn full_year_without_retreats() {
        let mut env = Environment::default();
        env.step(BTreeMap::new(), Vec::new()).unwrap(); // Spring Movement
        env.step(BTreeMap::new(), Vec::new()).unwrap(); // Fall Movement
        assert_eq!(env.state().phase, Phase::Adjustment);
        env.step(BTreeMap::new(), Vec::new()).unwrap(); // Winter Adjustment
        assert_eq!(env.state().year, 1902);
        assert_eq!(env.state().season, Season::Spring);
        assert_eq!(env.state().phase, Phase::Movement);
    }

    #[test]
    fn step_moves_units() {
        let mut env = Environment::default();
        let orders = movement_orders(&env, &[(Power::France, Province::Par, Province::Bur)]);
        let result = env.step(orders, Vec::new()).unwrap();
        assert_eq!(result.state.unit_at(Province::Bur).unwrap().power, Power::France);
        let france = &result.orders_resolved[&Power::France];
        assert!(france.iter().any(|(o, ok)| matches!(o, Order::Move { .. }) && *ok));
    }

    #[test]
    fn wrong_phase_order_is_rejected() {
        let mut env = Environment::default();
        let unit = Unit::new(UnitType::Army, Province::Par, Power::France);
        let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
        orders.insert(Power::France, vec![Order::Build { unit }]);
        let before = env.state().clone();
        let err = env.step(orders, Vec::new()).unwrap_err();
        assert!(matches!(err, EnvError::WrongPhase { .. }));
        assert_eq!(env.state(), &before, "rejected step must not mutate");
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut env = Environment::default();
        // Paris to Moscow is not adjacent.
        let unit = *env.state().power(Power::France).unit_in(Province::Par).unwrap();
        let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
        orders.insert(
            Power::France,
            vec![Order::Move { unit, dest: Province::Mos, via_convoy: false }],
        );
        let err = env.step(orders, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            EnvError::IllegalOrder {
                power: Power::France,
                order: Order::Move { unit, dest: Province::Mos, via_convoy: false },
            }
        );
    }

    #[test]
    fn order_for_foreign_unit_is_rejected() {
        let mut env = Environment::default();
        let german_unit = *env.state().power(Power::Germany).unit_in(Province::Mun).unwrap();
        let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
        orders.insert(
            Power::France,
            vec![Order::Move { unit: german_unit, dest: Province::Bur, via_convoy: false }],
        );
        let err = env.step(orders, Vec::new()).unwrap_err();
        assert!(matches!(err, EnvError::IllegalOrder { power: Power::France, .. }));
    }

    #[test]
    fn duplicate_orders_for_one_unit_are_rejected() {
        let mut env = Environment::default();
        let unit = *env.state().power(Power::France).unit_in(Province::Par).unwrap();
        let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
        orders.insert(
            Power::France,
            vec![
                Order::Move { unit, dest: Province::Bur, via_convoy: false },
                Order::Hold { unit },
            ],
        );
        let err = env.step(orders, Vec::new()).unwrap_err();
        assert_eq!(err, EnvError::DuplicateOrder { province: Province::Par });
    }

    #[test]
    fn contested_move_first_power_wins() {
        // France and Germany both enter Burgundy unsupported; France
        // iterates first and takes it, Germany stays in Munich.
        let mut env = Environment::default();
        let orders = movement_orders(
            &env,
            &[
                (Power::France, Province::Par, Province::Bur),
                (Power::Germany, Province::Mun, Province::Bur),
            ],
        );
        let result = env.step(orders, Vec::new()).unwrap();
        assert_eq!(result.state.unit_at(Province::Bur).unwrap().power, Power::France);
        assert!(result.state.power(Power::Germany).unit_in(Province::Mun).is_some());
        assert!(result.retreats_needed.is_empty());
    }

    #[test]
    fn fall_capture_updates_centers_and_history() {
        let mut env = Environment::default();
        // Spring: Austria walks into Serbia.
        let orders = movement_orders(&env, &[(Power::Austria, Province::Bud, Province::Ser)]);
        env.step(orders, Vec::new()).unwrap();
        // No capture yet in Spring.
        assert_eq!(env.state().power(Power::Austria).center_count(), 3);

        // Fall: everyone holds; the occupier captures Serbia.
        let result = env.step(BTreeMap::new(), Vec::new()).unwrap();
        assert_eq!(result.state.power(Power::Austria).center_count(), 4);
        assert!(result.state.power(Power::Austria).supply_centers.contains(&Province::Ser));
        assert_eq!(env.state().phase, Phase::Adjustment);
    }

    #[test]
    fn adjustment_build_after_capture() {
        let mut env = Environment::default();
        let orders = movement_orders(&env, &[(Power::Austria, Province::Bud, Province::Ser)]);
        env.step(orders, Vec::new()).unwrap();
        env.step(BTreeMap::new(), Vec::new()).unwrap();
        assert_eq!(env.state().phase, Phase::Adjustment);

        let builds = env.get_available_orders(Power::Austria);
        assert!(!builds.is_empty());
        // Budapest was vacated; an army build there is offered.
        let build = *builds
            .iter()
            .find(|o| matches!(o, Order::Build { unit } if unit.province == Province::Bud))
            .unwrap();
        let mut orders: BTreeMap<Power, Vec<Order>> = BTreeMap::new();
        orders.insert(Power::Austria, vec![build]);
        let result = env.step(orders, Vec::new()).unwrap();
        assert_eq!(result.state.power(Power::Austria).unit_count(), 4);
        assert_eq!(result.state.power(Power::Austria).adjustment_needed(), 0);
        assert_eq!(result.state.year, 1902);
    }

    #[test]
    fn messages_kept_only_in_press_mode() {
        let message = Message {
            sender: Power::France,
            recipient: Power::England,
            content: "shall we?".to_string(),
            phase: "SPRING 1901 MOVEMENT".to_string(),
        };

        let mut quiet = Environment::default();
        let result = quiet.step(BTreeMap::new(), vec![message.clone()]).unwrap();
        assert!(result.messages.is_empty());
        assert!(quiet.state().message_history.is_empty());

        let mut press = Environment::new(EnvOptions { press_mode: true, max_years: 20 });
        let result = press.step(BTreeMap::new(), vec![message.clone()]).unwrap();
        assert_eq!(result.messages, vec![message]);
        assert_eq!(press.state().message_history.len(), 1);
    }

    #[test]
    fn episode_result_unavailable_while_running() {
        let env = Environment::default();
        assert_eq!(env.get_episode_result().unwrap_err(), EnvError::GameInProgress);
    }

    #[test]
    fn horizon_forces_a_draw() {
        let mut env = Environment::new(EnvOptions { press_mode: false, max_years: 1 });
        env.step(BTreeMap::new(), Vec::new()).unwrap(); // Spring
        env.step(BTreeMap::new(), Vec::new()).unwrap(); // Fall
        env.step(BTreeMap::new(), Vec::new()).unwrap(); // Winter -> 1902
        assert!(env.is_game_over());
        assert_eq!(env.step(BTreeMap::new(), Vec::new()).unwrap_err(), EnvError::GameOver);

        let result = env.get_episode_result().unwrap();
        assert!(result.is_draw());
        assert_eq!(result.num_years, 1);
        assert_eq!(result.center_history.len(), 1);
    }

    #[test]
    fn solo_victory_ends_game() {
        let mut env = Environment::default();
        let centers: Vec<Province> = crate::board::ALL_PROVINCES
            .iter()
            .filter(|p| p.is_supply_center())
            .take(crate::board::VICTORY_CENTERS)
            .copied()
            .collect();
        env.state.power_mut(Power::Turkey).supply_centers = centers;
        assert!(env.is_game_over());
        let result = env.get_episode_result().unwrap();
        assert_eq!(result.winner, Some(Power::Turkey));
        assert!(!result.is_draw());
    }

    #[test]
    fn last_power_standing_ends_game() {
        let mut env = Environment::default();
        for &power in &ALL_POWERS {
            if power != Power::Russia {
                env.state.power_mut(power).is_eliminated = true;
            }
        }
        assert!(env.is_game_over());
        let result = env.get_episode_result().unwrap();
        assert_eq!(result.winner, None);
    }

    #[test]
    fn reset_restores_starting_position() {
        let mut env = Environment::default();
        env.step(BTreeMap::new(), Vec::new()).unwrap();
        let state = env.reset();
        assert_eq!(state.year, 1901);
        assert_eq!(state.season, Season::Spring);
        assert_eq!(state.all_units().len(), 22);
    }

    #[test]
    fn summary_mentions_phase_and_standings() {
        let mut env = Environment::default();
        let result = env.step(BTreeMap::new(), Vec::new()).unwrap();
        assert!(result.summary.starts_with("=== SPRING 1901 MOVEMENT ==="));
        assert!(result.summary.contains("Supply Center Counts:"));
        assert!(result.summary.contains("Russia: 4"));
    }

    #[test]
    fn identical_batches_resolve_identically() {
        let make_orders = |env: &Environment| {
            movement_orders(
                env,
                &[
                    (Power::France, Province::Par, Province::Bur),
                    (Power::Germany, Province::Mun, Province::Bur),
                    (Power::Austria, Province::Vie, Province::Gal),
                    (Power::Russia, Province::War, Province::Gal),
                ],
            )
        };
        let mut a = Environment::default();
        let mut b = Environment::default();
        let ra = a.step(make_orders(&a), Vec::new()).unwrap();
        let rb = b.step(make_orders(&b), Vec::new()).unwrap();
        assert_eq!(ra.state, rb.state);
        assert_eq!(ra.orders_resolved, rb.orders_resolved);
    }

    #[test]
    fn options_from_json() {
        let opts = EnvOptions::from_json(r#"{"press_mode": true, "max_years": 5}"#).unwrap();
        assert!(opts.press_mode);
        assert_eq!(opts.max_years, 5);
        let defaults = EnvOptions::from_json("{}").unwrap();
        assert_eq!(defaults, EnvOptions::default());
    }
}
