//! Roster composition: pure algorithms turning a team definition plus player
//! count into the concrete list of actor templates to spawn.
//!
//! Everything here is deterministic given a fixed RNG, so balance-sensitive
//! behavior can be pinned down with seeded tests.

use rand::Rng;

use crate::team::{RosterEntry, TeamDefinition};

/// Override values above this are ignored and the computed quota is used.
pub const OVERRIDE_MAX: u32 = 15;

/// How many optional-roster members this deployment gets.
///
/// The base is `(player_count + spawn_per_players) / spawn_per_players` in
/// integer arithmetic. This is intentionally not a textbook ceiling division;
/// live balance depends on its exact rounding, so it is preserved as-is.
/// An override in `[0, OVERRIDE_MAX]` wins outright, bypassing the
/// `max_roles_amount` cap; anything above the range is ignored.
pub fn optional_quota(team: &TeamDefinition, player_count: u32, override_count: Option<u32>) -> u32 {
    if let Some(count) = override_count {
        if count <= OVERRIDE_MAX {
            return count;
        }
    }
    let divisor = team.spawn_per_players;
    let base = (player_count + divisor) / divisor;
    base.min(team.max_roles_amount)
}

/// Resolve the guaranteed roster with a single weighted pass.
///
/// Every entry is consulted once: it fires with probability `weight` and
/// yields between `min` and `max` copies. There is no quota cap; guaranteed
/// entries are always attempted.
pub fn compose_guaranteed(team: &TeamDefinition, rng: &mut impl Rng) -> Vec<String> {
    let mut out = Vec::new();
    draw_pass(&team.guaranteed_roster, rng, &mut out);
    out
}

/// Fill the optional roster up to exactly `quota` templates.
///
/// Passes over the weighted list repeat from the top until the quota is met,
/// so the same entry may be selected across iterations. A pass that would
/// overshoot is truncated, not discarded. An empty or unfillable roster
/// (no entry with positive weight and a positive max) yields nothing.
pub fn compose_optional(team: &TeamDefinition, quota: u32, rng: &mut impl Rng) -> Vec<String> {
    let quota = quota as usize;
    let roster = &team.optional_roster;
    if quota == 0 || !roster.iter().any(|e| e.weight > 0.0 && e.max > 0) {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(quota);
    while out.len() < quota {
        draw_pass(roster, rng, &mut out);
    }
    out.truncate(quota);
    out
}

/// One weighted pass over `entries`, appending yielded templates to `out`.
fn draw_pass(entries: &[RosterEntry], rng: &mut impl Rng, out: &mut Vec<String>) {
    for entry in entries {
        if entry.weight < 1.0 && rng.gen::<f32>() >= entry.weight {
            continue;
        }
        let copies = if entry.min == entry.max {
            entry.min
        } else {
            rng.gen_range(entry.min..=entry.max)
        };
        for _ in 0..copies {
            out.push(entry.template.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(spawn_per_players: u32, max_roles_amount: u32) -> TeamDefinition {
        TeamDefinition {
            id: "test".to_string(),
            name: "Test Team".to_string(),
            transport_template: "shuttle".to_string(),
            placement_marker: "spawn".to_string(),
            guaranteed_roster: Vec::new(),
            optional_roster: vec![RosterEntry::certain("rf_trooper")],
            spawn_per_players,
            max_roles_amount,
            raffle: None,
            announcement: None,
        }
    }

    #[test]
    fn quota_uses_the_shifted_integer_division() {
        // (23 + 5) / 5 = 5 in integer arithmetic.
        assert_eq!(optional_quota(&team(5, 10), 23, None), 5);
        // Exact multiples still gain the extra slot: (25 + 5) / 5 = 6.
        assert_eq!(optional_quota(&team(5, 10), 25, None), 6);
        // Zero players still yields one slot: (0 + 5) / 5 = 1.
        assert_eq!(optional_quota(&team(5, 10), 0, None), 1);
    }

    #[test]
    fn quota_is_capped_by_max_roles_amount() {
        assert_eq!(optional_quota(&team(2, 4), 50, None), 4);
        assert_eq!(optional_quota(&team(2, 0), 50, None), 0);
    }

    #[test]
    fn override_in_range_wins_even_past_the_cap() {
        assert_eq!(optional_quota(&team(5, 10), 23, Some(12)), 12);
        assert_eq!(optional_quota(&team(5, 10), 23, Some(0)), 0);
        assert_eq!(optional_quota(&team(5, 10), 23, Some(15)), 15);
    }

    #[test]
    fn override_out_of_range_falls_back_to_computed() {
        assert_eq!(optional_quota(&team(5, 10), 23, Some(16)), 5);
        assert_eq!(optional_quota(&team(5, 10), 23, Some(u32::MAX)), 5);
    }

    #[test]
    fn optional_fills_exactly_to_quota() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let roster = compose_optional(&team(5, 10), 7, &mut rng);
        assert_eq!(roster.len(), 7);
        assert!(roster.iter().all(|t| t == "rf_trooper"));
    }

    #[test]
    fn overshooting_pass_is_truncated() {
        let mut t = team(5, 10);
        t.optional_roster = vec![RosterEntry::between("rf_trooper", 4, 4)];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(compose_optional(&t, 3, &mut rng).len(), 3);
    }

    #[test]
    fn empty_or_dead_roster_yields_nothing() {
        let mut t = team(5, 10);
        t.optional_roster.clear();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(compose_optional(&t, 5, &mut rng).is_empty());

        t.optional_roster = vec![RosterEntry::chance("rf_trooper", 0.0)];
        assert!(compose_optional(&t, 5, &mut rng).is_empty());

        t.optional_roster = vec![RosterEntry { template: "rf_trooper".to_string(), weight: 1.0, min: 0, max: 0 }];
        assert!(compose_optional(&t, 5, &mut rng).is_empty());
    }

    #[test]
    fn zero_quota_yields_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(compose_optional(&team(5, 10), 0, &mut rng).is_empty());
    }

    #[test]
    fn guaranteed_honors_copy_bounds() {
        let mut t = team(5, 10);
        t.guaranteed_roster = vec![
            RosterEntry::certain("rf_leader"),
            RosterEntry::between("rf_trooper", 2, 4),
        ];
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roster = compose_guaranteed(&t, &mut rng);
            let leaders = roster.iter().filter(|name| name.as_str() == "rf_leader").count();
            let troopers = roster.iter().filter(|name| name.as_str() == "rf_trooper").count();
            assert_eq!(leaders, 1);
            assert!((2..=4).contains(&troopers), "troopers = {troopers}");
        }
    }

    #[test]
    fn zero_weight_entry_never_fires() {
        let mut t = team(5, 10);
        t.guaranteed_roster = vec![RosterEntry::chance("rf_ghost", 0.0)];
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert!(compose_guaranteed(&t, &mut rng).is_empty());
        }
    }

    #[test]
    fn composition_is_deterministic_for_a_fixed_seed() {
        let mut t = team(5, 10);
        t.optional_roster = vec![
            RosterEntry::chance("rf_trooper", 0.6),
            RosterEntry::between("rf_medic", 1, 3),
        ];
        let a = compose_optional(&t, 9, &mut ChaCha8Rng::seed_from_u64(7));
        let b = compose_optional(&t, 9, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn quota_matches_formula(players in 0u32..500, divisor in 1u32..40, cap in 0u32..30) {
            let t = team(divisor, cap);
            let expected = ((players + divisor) / divisor).min(cap);
            prop_assert_eq!(optional_quota(&t, players, None), expected);
        }

        #[test]
        fn in_range_override_always_wins(players in 0u32..500, divisor in 1u32..40,
                                         cap in 0u32..30, override_count in 0u32..=OVERRIDE_MAX) {
            let t = team(divisor, cap);
            prop_assert_eq!(optional_quota(&t, players, Some(override_count)), override_count);
        }

        #[test]
        fn optional_length_equals_quota(quota in 0u32..40, min in 1u32..4, spread in 0u32..4, seed: u64) {
            let mut t = team(5, 10);
            t.optional_roster = vec![RosterEntry::between("rf_trooper", min, min + spread)];
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            prop_assert_eq!(compose_optional(&t, quota, &mut rng).len(), quota as usize);
        }
    }
}
