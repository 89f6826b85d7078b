//! Movement-phase resolution.
//!
//! Resolves a complete batch of movement orders in a deterministic single
//! pass. Contested destinations use an ordinal rule: the first move
//! encountered in input iteration order is the presumptive winner unless a
//! later move has strictly more support. Occupied destinations fall to an
//! attacker only with strictly more support than the defender; the
//! defender is then driven out and queued for retreat.
//!
//! Support arithmetic counts `Support` orders in the same batch keyed on
//! the supported unit and destination. There is no support cutting.
//! Convoy orders resolve as successful no-ops and add no movement range.
//!
//! Per-pass index structures (province -> occupant, province -> incoming
//! moves, (origin, destination) -> support count) are built once up front,
//! so resolution does not rescan the order list per unit.

use tracing::debug;

use crate::board::adjacency::adjacent;
use crate::board::{GameState, Order, Power, Province, Unit, PROVINCE_COUNT};

use super::{OrderOutcome, ResolvedOrder};

/// A unit driven from (or at risk in) its province, with the escape
/// provinces it may retreat to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dislodgement {
    pub unit: Unit,
    /// The province the unit must leave.
    pub province: Province,
    /// Legal retreat destinations: adjacent, unoccupied after this
    /// resolution, and not the province the attack came through.
    pub escapes: Vec<Province>,
}

/// The full result of resolving one movement phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementOutcome {
    pub resolved: Vec<ResolvedOrder>,
    pub dislodged: Vec<Dislodgement>,
}

/// Tracking for a single move order during resolution.
#[derive(Debug, Clone, Copy)]
struct MoveRec {
    /// Index into the input order slice.
    pos: usize,
    unit: Unit,
    from: Province,
    to: Province,
    support: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveStatus {
    Pending,
    Succeeded,
    Bounced,
}

/// Resolves a batch of movement orders against the current state.
///
/// Orders must already be validated (one per unit, all drawn from the
/// catalog); iteration order is the ordinal tie-break order.
pub fn resolve_movement(orders: &[(Order, Power)], state: &GameState) -> MovementOutcome {
    // Per-pass indexes.
    let mut occupant: [Option<Unit>; PROVINCE_COUNT] = [None; PROVINCE_COUNT];
    for unit in state.all_units() {
        occupant[unit.province as usize] = Some(unit);
    }

    // Support counts: (origin, destination) for moves, destination-less
    // supports strengthen the supported unit's hold.
    let mut support_move = vec![0u8; PROVINCE_COUNT * PROVINCE_COUNT];
    let mut support_hold = [0u8; PROVINCE_COUNT];
    for (order, _) in orders {
        if let Order::Support { supported, dest, .. } = order {
            match dest {
                Some(d) => {
                    support_move[supported.province as usize * PROVINCE_COUNT + *d as usize] += 1
                }
                None => support_hold[supported.province as usize] += 1,
            }
        }
    }

    // Collect move orders in input order.
    let mut moves: Vec<MoveRec> = Vec::new();
    let mut move_from: [Option<usize>; PROVINCE_COUNT] = [None; PROVINCE_COUNT];
    for (pos, (order, _)) in orders.iter().enumerate() {
        if let Order::Move { unit, dest, .. } = order {
            let rec = MoveRec {
                pos,
                unit: *unit,
                from: unit.province,
                to: *dest,
                support: support_move[unit.province as usize * PROVINCE_COUNT + *dest as usize],
            };
            move_from[rec.from as usize] = Some(moves.len());
            moves.push(rec);
        }
    }

    // Contested-destination selection: first mover is presumptive winner,
    // a later strictly stronger mover takes over. A displaced presumptive
    // with no support at all is queued for retreat.
    let mut status: Vec<MoveStatus> = vec![MoveStatus::Pending; moves.len()];
    let mut at_risk: Vec<(usize, Province)> = Vec::new(); // (move idx, blocked province)
    let mut incoming: [Vec<usize>; PROVINCE_COUNT] = std::array::from_fn(|_| Vec::new());
    for (i, m) in moves.iter().enumerate() {
        incoming[m.to as usize].push(i);
    }
    for target_moves in incoming.iter().filter(|v| v.len() > 1) {
        let mut winner = target_moves[0];
        for &challenger in &target_moves[1..] {
            if moves[challenger].support > moves[winner].support {
                status[winner] = MoveStatus::Bounced;
                if moves[winner].support == 0 {
                    at_risk.push((winner, moves[winner].to));
                }
                winner = challenger;
            } else {
                status[challenger] = MoveStatus::Bounced;
            }
        }
    }

    // Occupied-destination settlement. Iterates until no move changes
    // state; any moves still pending then form a rotation and all succeed.
    let mut dislodged_by: Vec<(Unit, Province)> = Vec::new(); // (unit, blocked province)
    loop {
        let mut progress = false;
        let mut pending_left = false;

        for i in 0..moves.len() {
            if status[i] != MoveStatus::Pending {
                continue;
            }
            let m = moves[i];
            let occ = match occupant[m.to as usize] {
                Some(u) => u,
                None => {
                    status[i] = MoveStatus::Succeeded;
                    progress = true;
                    continue;
                }
            };

            match move_from[occ.province as usize].map(|j| (j, status[j])) {
                Some((_, MoveStatus::Succeeded)) => {
                    // Destination vacated.
                    status[i] = MoveStatus::Succeeded;
                    progress = true;
                }
                Some((j, MoveStatus::Pending)) if moves[j].to == m.from => {
                    // Head-to-head swap: strictly stronger side advances
                    // and drives the other out; otherwise both bounce.
                    if m.support > moves[j].support {
                        status[i] = MoveStatus::Succeeded;
                        status[j] = MoveStatus::Bounced;
                        dislodged_by.push((occ, m.from));
                    } else if moves[j].support > m.support {
                        status[i] = MoveStatus::Bounced;
                        status[j] = MoveStatus::Succeeded;
                        dislodged_by.push((m.unit, moves[j].from));
                    } else {
                        status[i] = MoveStatus::Bounced;
                        status[j] = MoveStatus::Bounced;
                    }
                    progress = true;
                }
                Some((_, MoveStatus::Pending)) => {
                    // Waiting on the occupant's own move.
                    pending_left = true;
                }
                Some((_, MoveStatus::Bounced)) | None => {
                    // Stationary (or stuck) defender: strict majority wins.
                    if m.support > support_hold[occ.province as usize] {
                        status[i] = MoveStatus::Succeeded;
                        dislodged_by.push((occ, m.from));
                    } else {
                        status[i] = MoveStatus::Bounced;
                    }
                    progress = true;
                }
            }
        }

        if !pending_left {
            break;
        }
        if !progress {
            // A rotation vacates every province in the cycle at once.
            for i in 0..moves.len() {
                if status[i] == MoveStatus::Pending {
                    status[i] = MoveStatus::Succeeded;
                }
            }
            break;
        }
    }

    // Retreat pool: dislodged defenders plus displaced presumptive
    // winners, deduplicated by province (a unit is queued once).
    let mut pool: Vec<(Unit, Province)> = Vec::new();
    for &(idx, blocked) in &at_risk {
        let unit = moves[idx].unit;
        if !pool.iter().any(|(u, _)| u.province == unit.province) {
            pool.push((unit, blocked));
        }
    }
    for &(unit, blocked) in &dislodged_by {
        if let Some(entry) = pool.iter_mut().find(|(u, _)| u.province == unit.province) {
            // A genuine dislodgement supersedes the at-risk entry.
            *entry = (unit, blocked);
        } else {
            pool.push((unit, blocked));
        }
    }

    // Post-resolution occupancy, for escape routes.
    let mut after: [Option<Unit>; PROVINCE_COUNT] = occupant;
    for (i, m) in moves.iter().enumerate() {
        if status[i] == MoveStatus::Succeeded {
            after[m.from as usize] = None;
        }
    }
    for (unit, _) in &pool {
        after[unit.province as usize] = None;
    }
    for (i, m) in moves.iter().enumerate() {
        if status[i] == MoveStatus::Succeeded {
            after[m.to as usize] = Some(m.unit);
        }
    }

    let dislodged: Vec<Dislodgement> = pool
        .iter()
        .map(|&(unit, blocked)| {
            let escapes: Vec<Province> = adjacent(unit.province, unit.unit_type)
                .into_iter()
                .filter(|&p| p != blocked && after[p as usize].is_none())
                .collect();
            Dislodgement { unit, province: unit.province, escapes }
        })
        .collect();

    if !dislodged.is_empty() {
        debug!(
            count = dislodged.len(),
            "movement resolution produced retreats"
        );
    }

    // Final outcome per input order.
    let dislodged_provinces: Vec<Province> =
        dislodged_by.iter().map(|(u, _)| u.province).collect();
    let resolved: Vec<ResolvedOrder> = orders
        .iter()
        .enumerate()
        .map(|(pos, (order, power))| {
            let outcome = match order {
                Order::Move { .. } => {
                    let idx = moves.iter().position(|m| m.pos == pos).expect("move indexed");
                    match status[idx] {
                        MoveStatus::Succeeded => OrderOutcome::Succeeded,
                        _ if dislodged_provinces.contains(&moves[idx].from) => {
                            OrderOutcome::Dislodged
                        }
                        _ => OrderOutcome::Bounced,
                    }
                }
                Order::Hold { unit } | Order::Support { unit, .. } | Order::Convoy { unit, .. } => {
                    if dislodged_provinces.contains(&unit.province) {
                        OrderOutcome::Dislodged
                    } else {
                        OrderOutcome::Succeeded
                    }
                }
                // Other order forms cannot reach movement resolution.
                _ => OrderOutcome::Failed,
            };
            ResolvedOrder { order: *order, power: *power, outcome }
        })
        .collect();

    MovementOutcome { resolved, dislodged }
}

/// Applies a movement resolution to the state.
///
/// Units in the retreat pool leave the board into `dislodged` and
/// `pending_retreats`; successful moves update unit positions.
pub fn apply_movement(state: &mut GameState, outcome: &MovementOutcome) {
    // Remove pooled units first so position updates cannot collide with
    // a defender still sitting on the destination.
    for d in &outcome.dislodged {
        let power = d.unit.power;
        state.power_mut(power).take_unit(d.province);
        state.dislodged.insert(d.province, d.unit);
        state.pending_retreats.insert(d.province, d.escapes.clone());
    }

    for r in &outcome.resolved {
        if r.outcome != OrderOutcome::Succeeded {
            continue;
        }
        if let Order::Move { unit, dest, .. } = r.order {
            let ps = state.power_mut(r.power);
            if let Some(u) = ps.units.iter_mut().find(|u| u.province == unit.province) {
                u.province = dest;
            }
        }
    }
}
