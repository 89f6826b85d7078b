//! Adjacency graph for the standard map.
//!
//! Each entry records a directed edge `from -> to` with flags for army and
//! fleet passability. The table is symmetric: if A->B exists then B->A also
//! exists. All data is compile-time `static`.
//!
//! Coasts are not modeled. Fleet edges that exist only via a specific coast
//! of a split-coast province (Bulgaria, Spain, St. Petersburg) are merged
//! into a single province-level edge, so a fleet in the Mid-Atlantic can
//! reach Spain without naming a coast. Passability is encoded entirely in
//! the edge flags: army edges never touch water provinces and fleet edges
//! never touch inland provinces.

use super::province::{Province, PROVINCE_COUNT};
use super::unit::UnitType;

/// A single directed adjacency between two provinces.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyEntry {
    pub from: Province,
    pub to: Province,
    pub army_ok: bool,
    pub fleet_ok: bool,
}

/// Shorthand constructors for adjacency entries (used only in table construction).
const fn fleet(from: Province, to: Province) -> AdjacencyEntry {
    AdjacencyEntry { from, to, army_ok: false, fleet_ok: true }
}
const fn army(from: Province, to: Province) -> AdjacencyEntry {
    AdjacencyEntry { from, to, army_ok: true, fleet_ok: false }
}
const fn both(from: Province, to: Province) -> AdjacencyEntry {
    AdjacencyEntry { from, to, army_ok: true, fleet_ok: true }
}

/// Alias province names for readability.
use Province::*;

/// Total number of directed adjacency entries in the table.
///
/// Breakdown (pairs, two directed entries each):
/// - Water-to-water (fleet): 21 pairs = 42
/// - Water-to-coastal (fleet): 74 pairs = 148
/// - Inland-to-inland (army): 22 pairs = 44
/// - Inland-to-coastal and landlocked coastal borders (army): 35 pairs = 70
/// - Coastal-to-coastal sharing a sea face (both): 33 pairs = 66
/// - Coastal-to-split-coast, merged (both): 9 pairs = 18
/// - Coastal-to-coastal on different sea faces (army): 11 pairs = 22
///
/// Total: 410
pub const ADJACENCY_COUNT: usize = 410;

/// Complete adjacency table. Each bidirectional pair is stored as two directed entries.
pub static ADJACENCIES: [AdjacencyEntry; ADJACENCY_COUNT] = [
    // ====================================================================
    // Water-to-water (fleet only) - 21 pairs, 42 entries
    // ====================================================================
    fleet(Adr, Ion),
    fleet(Ion, Adr),
    fleet(Aeg, Eas),
    fleet(Eas, Aeg),
    fleet(Aeg, Ion),
    fleet(Ion, Aeg),
    fleet(Bal, Bot),
    fleet(Bot, Bal),
    fleet(Eng, Iri),
    fleet(Iri, Eng),
    fleet(Eng, Mao),
    fleet(Mao, Eng),
    fleet(Eng, Nth),
    fleet(Nth, Eng),
    fleet(Gol, Tys),
    fleet(Tys, Gol),
    fleet(Gol, Wes),
    fleet(Wes, Gol),
    fleet(Hel, Nth),
    fleet(Nth, Hel),
    fleet(Ion, Eas),
    fleet(Eas, Ion),
    fleet(Ion, Tys),
    fleet(Tys, Ion),
    fleet(Iri, Mao),
    fleet(Mao, Iri),
    fleet(Iri, Nao),
    fleet(Nao, Iri),
    fleet(Mao, Nao),
    fleet(Nao, Mao),
    fleet(Mao, Wes),
    fleet(Wes, Mao),
    fleet(Nao, Nrg),
    fleet(Nrg, Nao),
    fleet(Nth, Nrg),
    fleet(Nrg, Nth),
    fleet(Nth, Ska),
    fleet(Ska, Nth),
    fleet(Nrg, Bar),
    fleet(Bar, Nrg),
    fleet(Tys, Wes),
    fleet(Wes, Tys),
    // ====================================================================
    // Water-to-coastal (fleet only) - 74 pairs, 148 entries
    // ====================================================================

    // Adriatic Sea
    fleet(Adr, Alb),
    fleet(Alb, Adr),
    fleet(Adr, Apu),
    fleet(Apu, Adr),
    fleet(Adr, Tri),
    fleet(Tri, Adr),
    fleet(Adr, Ven),
    fleet(Ven, Adr),
    // Aegean Sea
    fleet(Aeg, Bul),
    fleet(Bul, Aeg),
    fleet(Aeg, Con),
    fleet(Con, Aeg),
    fleet(Aeg, Gre),
    fleet(Gre, Aeg),
    fleet(Aeg, Smy),
    fleet(Smy, Aeg),
    // Baltic Sea
    fleet(Bal, Ber),
    fleet(Ber, Bal),
    fleet(Bal, Den),
    fleet(Den, Bal),
    fleet(Bal, Kie),
    fleet(Kie, Bal),
    fleet(Bal, Lvn),
    fleet(Lvn, Bal),
    fleet(Bal, Pru),
    fleet(Pru, Bal),
    fleet(Bal, Swe),
    fleet(Swe, Bal),
    // Barents Sea
    fleet(Bar, Nwy),
    fleet(Nwy, Bar),
    fleet(Bar, Stp),
    fleet(Stp, Bar),
    // Black Sea
    fleet(Bla, Ank),
    fleet(Ank, Bla),
    fleet(Bla, Arm),
    fleet(Arm, Bla),
    fleet(Bla, Bul),
    fleet(Bul, Bla),
    fleet(Bla, Con),
    fleet(Con, Bla),
    fleet(Bla, Rum),
    fleet(Rum, Bla),
    fleet(Bla, Sev),
    fleet(Sev, Bla),
    // Gulf of Bothnia
    fleet(Bot, Fin),
    fleet(Fin, Bot),
    fleet(Bot, Lvn),
    fleet(Lvn, Bot),
    fleet(Bot, Stp),
    fleet(Stp, Bot),
    fleet(Bot, Swe),
    fleet(Swe, Bot),
    // Eastern Mediterranean
    fleet(Eas, Smy),
    fleet(Smy, Eas),
    fleet(Eas, Syr),
    fleet(Syr, Eas),
    // English Channel
    fleet(Eng, Bel),
    fleet(Bel, Eng),
    fleet(Eng, Bre),
    fleet(Bre, Eng),
    fleet(Eng, Lon),
    fleet(Lon, Eng),
    fleet(Eng, Pic),
    fleet(Pic, Eng),
    fleet(Eng, Wal),
    fleet(Wal, Eng),
    // Gulf of Lyon
    fleet(Gol, Mar),
    fleet(Mar, Gol),
    fleet(Gol, Pie),
    fleet(Pie, Gol),
    fleet(Gol, Spa),
    fleet(Spa, Gol),
    fleet(Gol, Tus),
    fleet(Tus, Gol),
    // Heligoland Bight
    fleet(Hel, Den),
    fleet(Den, Hel),
    fleet(Hel, Hol),
    fleet(Hol, Hel),
    fleet(Hel, Kie),
    fleet(Kie, Hel),
    // Ionian Sea
    fleet(Ion, Alb),
    fleet(Alb, Ion),
    fleet(Ion, Apu),
    fleet(Apu, Ion),
    fleet(Ion, Gre),
    fleet(Gre, Ion),
    fleet(Ion, Nap),
    fleet(Nap, Ion),
    fleet(Ion, Tun),
    fleet(Tun, Ion),
    // Irish Sea
    fleet(Iri, Lvp),
    fleet(Lvp, Iri),
    fleet(Iri, Wal),
    fleet(Wal, Iri),
    // Mid-Atlantic Ocean
    fleet(Mao, Bre),
    fleet(Bre, Mao),
    fleet(Mao, Gas),
    fleet(Gas, Mao),
    fleet(Mao, Naf),
    fleet(Naf, Mao),
    fleet(Mao, Por),
    fleet(Por, Mao),
    fleet(Mao, Spa),
    fleet(Spa, Mao),
    // North Atlantic Ocean
    fleet(Nao, Cly),
    fleet(Cly, Nao),
    fleet(Nao, Lvp),
    fleet(Lvp, Nao),
    // North Sea
    fleet(Nth, Bel),
    fleet(Bel, Nth),
    fleet(Nth, Den),
    fleet(Den, Nth),
    fleet(Nth, Edi),
    fleet(Edi, Nth),
    fleet(Nth, Hol),
    fleet(Hol, Nth),
    fleet(Nth, Lon),
    fleet(Lon, Nth),
    fleet(Nth, Nwy),
    fleet(Nwy, Nth),
    fleet(Nth, Yor),
    fleet(Yor, Nth),
    // Norwegian Sea
    fleet(Nrg, Cly),
    fleet(Cly, Nrg),
    fleet(Nrg, Edi),
    fleet(Edi, Nrg),
    fleet(Nrg, Nwy),
    fleet(Nwy, Nrg),
    // Skagerrak
    fleet(Ska, Den),
    fleet(Den, Ska),
    fleet(Ska, Nwy),
    fleet(Nwy, Ska),
    fleet(Ska, Swe),
    fleet(Swe, Ska),
    // Tyrrhenian Sea
    fleet(Tys, Nap),
    fleet(Nap, Tys),
    fleet(Tys, Rom),
    fleet(Rom, Tys),
    fleet(Tys, Tun),
    fleet(Tun, Tys),
    fleet(Tys, Tus),
    fleet(Tus, Tys),
    // Western Mediterranean
    fleet(Wes, Naf),
    fleet(Naf, Wes),
    fleet(Wes, Spa),
    fleet(Spa, Wes),
    fleet(Wes, Tun),
    fleet(Tun, Wes),
    // ====================================================================
    // Inland-to-inland (army only) - 22 pairs, 44 entries
    // ====================================================================
    army(Boh, Gal),
    army(Gal, Boh),
    army(Boh, Mun),
    army(Mun, Boh),
    army(Boh, Sil),
    army(Sil, Boh),
    army(Boh, Tyr),
    army(Tyr, Boh),
    army(Boh, Vie),
    army(Vie, Boh),
    army(Bud, Gal),
    army(Gal, Bud),
    army(Bud, Vie),
    army(Vie, Bud),
    army(Bur, Mun),
    army(Mun, Bur),
    army(Bur, Par),
    army(Par, Bur),
    army(Bur, Ruh),
    army(Ruh, Bur),
    army(Gal, Sil),
    army(Sil, Gal),
    army(Gal, Ukr),
    army(Ukr, Gal),
    army(Gal, Vie),
    army(Vie, Gal),
    army(Gal, War),
    army(War, Gal),
    army(Mos, Ukr),
    army(Ukr, Mos),
    army(Mos, War),
    army(War, Mos),
    army(Mun, Ruh),
    army(Ruh, Mun),
    army(Mun, Sil),
    army(Sil, Mun),
    army(Mun, Tyr),
    army(Tyr, Mun),
    army(Sil, War),
    army(War, Sil),
    army(Tyr, Vie),
    army(Vie, Tyr),
    army(Ukr, War),
    army(War, Ukr),
    // ====================================================================
    // Inland-to-coastal and landlocked coastal borders (army only)
    // 35 pairs, 70 entries
    // ====================================================================
    army(Bud, Rum),
    army(Rum, Bud),
    army(Bud, Ser),
    army(Ser, Bud),
    army(Bud, Tri),
    army(Tri, Bud),
    army(Bur, Bel),
    army(Bel, Bur),
    army(Bur, Gas),
    army(Gas, Bur),
    army(Bur, Mar),
    army(Mar, Bur),
    army(Bur, Pic),
    army(Pic, Bur),
    army(Gal, Rum),
    army(Rum, Gal),
    army(Gas, Mar),
    army(Mar, Gas),
    army(Mos, Lvn),
    army(Lvn, Mos),
    army(Mos, Sev),
    army(Sev, Mos),
    army(Mos, Stp),
    army(Stp, Mos),
    army(Mun, Ber),
    army(Ber, Mun),
    army(Mun, Kie),
    army(Kie, Mun),
    army(Par, Bre),
    army(Bre, Par),
    army(Par, Gas),
    army(Gas, Par),
    army(Par, Pic),
    army(Pic, Par),
    army(Ruh, Bel),
    army(Bel, Ruh),
    army(Ruh, Hol),
    army(Hol, Ruh),
    army(Ruh, Kie),
    army(Kie, Ruh),
    army(Ser, Alb),
    army(Alb, Ser),
    army(Ser, Bul),
    army(Bul, Ser),
    army(Ser, Gre),
    army(Gre, Ser),
    army(Ser, Rum),
    army(Rum, Ser),
    army(Ser, Tri),
    army(Tri, Ser),
    army(Sil, Ber),
    army(Ber, Sil),
    army(Sil, Pru),
    army(Pru, Sil),
    army(Tyr, Pie),
    army(Pie, Tyr),
    army(Tyr, Tri),
    army(Tri, Tyr),
    army(Tyr, Ven),
    army(Ven, Tyr),
    army(Ukr, Rum),
    army(Rum, Ukr),
    army(Ukr, Sev),
    army(Sev, Ukr),
    army(Vie, Tri),
    army(Tri, Vie),
    army(War, Lvn),
    army(Lvn, War),
    army(War, Pru),
    army(Pru, War),
    // ====================================================================
    // Coastal-to-coastal sharing a sea face (both) - 33 pairs, 66 entries
    // ====================================================================
    both(Alb, Gre),
    both(Gre, Alb),
    both(Alb, Tri),
    both(Tri, Alb),
    both(Ank, Arm),
    both(Arm, Ank),
    both(Ank, Con),
    both(Con, Ank),
    both(Apu, Nap),
    both(Nap, Apu),
    both(Apu, Ven),
    both(Ven, Apu),
    both(Bel, Hol),
    both(Hol, Bel),
    both(Bel, Pic),
    both(Pic, Bel),
    both(Ber, Kie),
    both(Kie, Ber),
    both(Ber, Pru),
    both(Pru, Ber),
    both(Bre, Gas),
    both(Gas, Bre),
    both(Bre, Pic),
    both(Pic, Bre),
    both(Cly, Edi),
    both(Edi, Cly),
    both(Cly, Lvp),
    both(Lvp, Cly),
    both(Con, Smy),
    both(Smy, Con),
    both(Den, Kie),
    both(Kie, Den),
    both(Den, Swe),
    both(Swe, Den),
    both(Edi, Yor),
    both(Yor, Edi),
    both(Fin, Swe),
    both(Swe, Fin),
    both(Lon, Wal),
    both(Wal, Lon),
    both(Lon, Yor),
    both(Yor, Lon),
    both(Lvp, Wal),
    both(Wal, Lvp),
    both(Mar, Pie),
    both(Pie, Mar),
    both(Naf, Tun),
    both(Tun, Naf),
    both(Nwy, Swe),
    both(Swe, Nwy),
    both(Pie, Tus),
    both(Tus, Pie),
    both(Pru, Lvn),
    both(Lvn, Pru),
    both(Rom, Nap),
    both(Nap, Rom),
    both(Rom, Tus),
    both(Tus, Rom),
    both(Sev, Arm),
    both(Arm, Sev),
    both(Sev, Rum),
    both(Rum, Sev),
    both(Smy, Syr),
    both(Syr, Smy),
    both(Tri, Ven),
    both(Ven, Tri),
    // ====================================================================
    // Coastal-to-split-coast, coast edges merged (both) - 9 pairs, 18 entries
    // ====================================================================
    both(Con, Bul),
    both(Bul, Con),
    both(Gre, Bul),
    both(Bul, Gre),
    both(Rum, Bul),
    both(Bul, Rum),
    both(Gas, Spa),
    both(Spa, Gas),
    both(Mar, Spa),
    both(Spa, Mar),
    both(Por, Spa),
    both(Spa, Por),
    both(Fin, Stp),
    both(Stp, Fin),
    both(Lvn, Stp),
    both(Stp, Lvn),
    both(Nwy, Stp),
    both(Stp, Nwy),
    // ====================================================================
    // Coastal-to-coastal on different sea faces (army only) - 11 pairs, 22 entries
    // ====================================================================
    army(Ank, Smy),
    army(Smy, Ank),
    army(Apu, Rom),
    army(Rom, Apu),
    army(Arm, Smy),
    army(Smy, Arm),
    army(Arm, Syr),
    army(Syr, Arm),
    army(Edi, Lvp),
    army(Lvp, Edi),
    army(Fin, Nwy),
    army(Nwy, Fin),
    army(Lvp, Yor),
    army(Yor, Lvp),
    army(Pie, Ven),
    army(Ven, Pie),
    army(Rom, Ven),
    army(Ven, Rom),
    army(Tus, Ven),
    army(Ven, Tus),
    army(Wal, Yor),
    army(Yor, Wal),
];

/// Pre-computed per-province adjacency index for O(neighbors) lookup.
///
/// At first access, copies all adjacency entries into a vec sorted by
/// `from` province, and stores `(start, end)` offsets for each province.
/// Subsequent adjacency lookups use this index instead of scanning the
/// whole table.
use std::sync::LazyLock;

struct AdjIndex {
    entries: Vec<AdjacencyEntry>,
    offsets: [(u16, u16); PROVINCE_COUNT],
}

static ADJ_INDEX: LazyLock<AdjIndex> = LazyLock::new(|| {
    let mut sorted: Vec<AdjacencyEntry> = ADJACENCIES.to_vec();
    sorted.sort_by_key(|a| a.from as u8);

    let mut offsets = [(0u16, 0u16); PROVINCE_COUNT];
    let mut i = 0;
    for p in 0..PROVINCE_COUNT {
        let start = i;
        while i < sorted.len() && sorted[i].from as u8 == p as u8 {
            i += 1;
        }
        offsets[p] = (start as u16, i as u16);
    }

    AdjIndex { entries: sorted, offsets }
});

/// Returns the adjacency entries originating from the given province.
#[inline]
pub fn adj_from(prov: Province) -> &'static [AdjacencyEntry] {
    let idx = &*ADJ_INDEX;
    let (start, end) = idx.offsets[prov as usize];
    &idx.entries[start as usize..end as usize]
}

/// Returns all provinces a unit of the given type can move to from `prov`.
///
/// A province with no legal destinations for the unit type yields an empty
/// vec (armies in theory could be asked about a water province); the lookup
/// itself never fails.
pub fn adjacent(prov: Province, unit_type: UnitType) -> Vec<Province> {
    let want_fleet = unit_type == UnitType::Fleet;
    adj_from(prov)
        .iter()
        .filter(|a| if want_fleet { a.fleet_ok } else { a.army_ok })
        .map(|a| a.to)
        .collect()
}

/// Returns true if a unit of the given type can move from `src` to `dst`.
pub fn is_adjacent(src: Province, dst: Province, unit_type: UnitType) -> bool {
    let want_fleet = unit_type == UnitType::Fleet;
    adj_from(src)
        .iter()
        .any(|a| a.to == dst && if want_fleet { a.fleet_ok } else { a.army_ok })
}

#[cfg(test)]
mod tests {
    use super::super::province::{ProvinceType, ALL_PROVINCES};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn adjacency_count() {
        assert_eq!(ADJACENCIES.len(), ADJACENCY_COUNT);
    }

    #[test]
    fn adjacency_symmetry() {
        for adj in ADJACENCIES.iter() {
            let reverse_exists = ADJACENCIES.iter().any(|r| {
                r.from == adj.to
                    && r.to == adj.from
                    && r.army_ok == adj.army_ok
                    && r.fleet_ok == adj.fleet_ok
            });
            assert!(
                reverse_exists,
                "Missing reverse adjacency: {:?} -> {:?} army={} fleet={}",
                adj.from, adj.to, adj.army_ok, adj.fleet_ok
            );
        }
    }

    #[test]
    fn no_self_adjacency() {
        for adj in ADJACENCIES.iter() {
            assert_ne!(adj.from, adj.to, "Self-adjacency found for {:?}", adj.from);
        }
    }

    #[test]
    fn no_duplicate_edges() {
        let mut seen = HashSet::new();
        for adj in ADJACENCIES.iter() {
            assert!(
                seen.insert((adj.from, adj.to)),
                "Duplicate edge {:?} -> {:?}",
                adj.from,
                adj.to
            );
        }
    }

    #[test]
    fn army_edges_avoid_water() {
        for adj in ADJACENCIES.iter() {
            if adj.army_ok {
                assert_ne!(adj.from.province_type(), ProvinceType::Water);
                assert_ne!(adj.to.province_type(), ProvinceType::Water);
            }
        }
    }

    #[test]
    fn fleet_edges_avoid_inland() {
        for adj in ADJACENCIES.iter() {
            if adj.fleet_ok {
                assert_ne!(adj.from.province_type(), ProvinceType::Land);
                assert_ne!(adj.to.province_type(), ProvinceType::Land);
            }
        }
    }

    #[test]
    fn smyrna_ankara_army_only() {
        // Armies cross the Smy/Ank land border; fleets face different seas.
        assert!(is_adjacent(Province::Smy, Province::Ank, UnitType::Army));
        assert!(is_adjacent(Province::Ank, Province::Smy, UnitType::Army));
        assert!(!is_adjacent(Province::Smy, Province::Ank, UnitType::Fleet));
        assert!(!is_adjacent(Province::Ank, Province::Smy, UnitType::Fleet));
    }

    #[test]
    fn vienna_venice_not_adjacent() {
        assert!(!is_adjacent(Province::Vie, Province::Ven, UnitType::Army));
        assert!(!is_adjacent(Province::Vie, Province::Ven, UnitType::Fleet));
    }

    #[test]
    fn vienna_neighbors() {
        let neighbors: HashSet<Province> =
            adjacent(Province::Vie, UnitType::Army).into_iter().collect();
        let expected: HashSet<Province> = [
            Province::Boh,
            Province::Bud,
            Province::Gal,
            Province::Tyr,
            Province::Tri,
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbors, expected, "Vienna army neighbors mismatch");
    }

    #[test]
    fn brest_neighbors_by_unit_type() {
        let army_adj: HashSet<Province> =
            adjacent(Province::Bre, UnitType::Army).into_iter().collect();
        let expected_army: HashSet<Province> =
            [Province::Gas, Province::Par, Province::Pic].into_iter().collect();
        assert_eq!(army_adj, expected_army);

        let fleet_adj: HashSet<Province> =
            adjacent(Province::Bre, UnitType::Fleet).into_iter().collect();
        let expected_fleet: HashSet<Province> =
            [Province::Eng, Province::Gas, Province::Mao, Province::Pic]
                .into_iter()
                .collect();
        assert_eq!(fleet_adj, expected_fleet);
    }

    #[test]
    fn split_coast_merge_spain() {
        // All of Spain's coast-specific fleet edges collapse to province level.
        let fleet_adj: HashSet<Province> =
            adjacent(Province::Spa, UnitType::Fleet).into_iter().collect();
        let expected: HashSet<Province> = [
            Province::Gol,
            Province::Mao,
            Province::Mar,
            Province::Por,
            Province::Wes,
            Province::Gas,
        ]
        .into_iter()
        .collect();
        assert_eq!(fleet_adj, expected);

        let army_adj: HashSet<Province> =
            adjacent(Province::Spa, UnitType::Army).into_iter().collect();
        let expected_army: HashSet<Province> =
            [Province::Gas, Province::Mar, Province::Por].into_iter().collect();
        assert_eq!(army_adj, expected_army);
    }

    #[test]
    fn split_coast_merge_st_petersburg() {
        let fleet_adj: HashSet<Province> =
            adjacent(Province::Stp, UnitType::Fleet).into_iter().collect();
        let expected: HashSet<Province> = [
            Province::Bar,
            Province::Bot,
            Province::Fin,
            Province::Lvn,
            Province::Nwy,
        ]
        .into_iter()
        .collect();
        assert_eq!(fleet_adj, expected);
    }

    #[test]
    fn water_provinces_have_no_army_adjacencies() {
        for p in ALL_PROVINCES.iter() {
            if p.province_type() == ProvinceType::Water {
                let army_adj = adjacent(*p, UnitType::Army);
                assert!(
                    army_adj.is_empty(),
                    "Water province {:?} should have no army adjacencies, got {:?}",
                    p,
                    army_adj
                );
            }
        }
    }

    #[test]
    fn inland_provinces_have_no_fleet_adjacencies() {
        for p in ALL_PROVINCES.iter() {
            if p.province_type() == ProvinceType::Land {
                let fleet_adj = adjacent(*p, UnitType::Fleet);
                assert!(
                    fleet_adj.is_empty(),
                    "Inland province {:?} should have no fleet adjacencies, got {:?}",
                    p,
                    fleet_adj
                );
            }
        }
    }

    #[test]
    fn every_province_has_at_least_one_adjacency() {
        for p in ALL_PROVINCES.iter() {
            assert!(
                !adj_from(*p).is_empty(),
                "Province {:?} has no adjacencies",
                p
            );
        }
    }

    #[test]
    fn known_adjacencies_sample() {
        assert!(is_adjacent(Province::Ank, Province::Bla, UnitType::Fleet));
        assert!(!is_adjacent(Province::Ank, Province::Bla, UnitType::Army));
        assert!(is_adjacent(Province::Eng, Province::Bre, UnitType::Fleet));
        assert!(is_adjacent(Province::Eng, Province::Lon, UnitType::Fleet));
        // Rome/Venice share only a land border.
        assert!(!is_adjacent(Province::Rom, Province::Ven, UnitType::Fleet));
        assert!(is_adjacent(Province::Rom, Province::Ven, UnitType::Army));
        // Gascony/Marseilles likewise.
        assert!(is_adjacent(Province::Gas, Province::Mar, UnitType::Army));
        assert!(!is_adjacent(Province::Gas, Province::Mar, UnitType::Fleet));
    }

    #[test]
    fn adjacency_entry_counts_per_category() {
        let army_only = ADJACENCIES.iter().filter(|a| a.army_ok && !a.fleet_ok).count();
        let fleet_only = ADJACENCIES.iter().filter(|a| !a.army_ok && a.fleet_ok).count();
        let both_count = ADJACENCIES.iter().filter(|a| a.army_ok && a.fleet_ok).count();

        // army only: inland-inland(44) + inland-coastal(70) + different-faces(22)
        assert_eq!(army_only, 136, "army-only entry count");
        // fleet only: water-water(42) + water-coastal(148)
        assert_eq!(fleet_only, 190, "fleet-only entry count");
        // both: shared-face(66) + split-coast-merged(18)
        assert_eq!(both_count, 84, "both-army-and-fleet entry count");
        assert_eq!(army_only + fleet_only + both_count, ADJACENCY_COUNT);
    }
}
