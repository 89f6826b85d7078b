//! Phase sequencing and the supply-center economy.
//!
//! The game year is a finite, cyclic state machine over (season, phase)
//! pairs with no terminal state of its own; the environment decides when
//! to stop stepping.
//!
//! Phase flow:
//! - Spring Movement -> Spring Retreat (if retreats pending) OR Fall Movement
//! - Spring Retreat  -> Fall Movement
//! - Fall Movement   -> Fall Retreat (if retreats pending) OR Winter Adjustment
//! - Fall Retreat    -> Winter Adjustment
//! - Winter Adjustment -> Spring Movement (year + 1)

use tracing::debug;

use crate::board::{GameState, Phase, Power, Province, Season};

/// Computes the next (season, phase) for the current state.
///
/// Retreat phases are conditional: they only occur when the movement
/// resolution left units awaiting retreat.
pub fn next_phase(state: &GameState) -> (Season, Phase) {
    match (state.phase, state.season) {
        (Phase::Movement, season) => {
            if !state.pending_retreats.is_empty() {
                (season, Phase::Retreat)
            } else {
                after_movement(season)
            }
        }
        (Phase::Retreat, season) => after_movement(season),
        (Phase::Adjustment, _) => (Season::Spring, Phase::Movement),
    }
}

fn after_movement(season: Season) -> (Season, Phase) {
    match season {
        Season::Spring => (Season::Fall, Phase::Movement),
        // Movement never happens in Winter; fold it into the Fall case.
        Season::Fall | Season::Winter => (Season::Winter, Phase::Adjustment),
    }
}

/// Advances the state to the next phase, incrementing the year when a new
/// game year begins.
pub fn advance(state: &mut GameState) {
    let (season, phase) = next_phase(state);

    if state.phase == Phase::Adjustment {
        state.year += 1;
    }

    debug!(
        from = %state.phase_banner(),
        to_season = season.label(),
        to_phase = phase.label(),
        "phase advance"
    );

    state.season = season;
    state.phase = phase;

    // The retreat pool never survives past its retreat phase.
    if phase != Phase::Retreat {
        state.pending_retreats.clear();
        state.dislodged.clear();
    }
}

/// Transfers supply-center ownership to occupying powers.
///
/// Run only after a Fall movement resolution. Every unit standing on a
/// supply center it does not own claims it, removing it from the previous
/// owner (neutral centers are simply taken). Rerunning with the same
/// occupants changes nothing.
pub fn update_center_ownership(state: &mut GameState) {
    let captures: Vec<(Power, Province)> = state
        .all_units()
        .into_iter()
        .filter(|u| u.province.is_supply_center())
        .filter(|u| !state.power(u.power).supply_centers.contains(&u.province))
        .map(|u| (u.power, u.province))
        .collect();

    for (power, province) in captures {
        for ps in state.powers.values_mut() {
            ps.supply_centers.retain(|&c| c != province);
        }
        state.power_mut(power).supply_centers.push(province);
        debug!(power = power.name(), province = province.abbr(), "supply center captured");
    }
}

/// True if any power's unit/center counts differ, so the adjustment phase
/// has work to do.
pub fn adjustments_pending(state: &GameState) -> bool {
    state.powers.values().any(|ps| ps.adjustment_needed() != 0)
}
