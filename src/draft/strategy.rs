// Draft selection strategies.
//
// Every strategy scans the shared pool in ascending ADP rank; rank order is
// the sole tie-break. A strategy returns the pool index of its choice plus
// the ledger slot the pick fills; the orchestrator performs the removal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pool::PlayerPool;
use super::position::{Position, Slot};
use super::roster::SlotLedger;

/// The five draft strategies under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Best player available: first pool player with an open slot
    /// (dedicated, then FLEX for RB/WR, then bench).
    Bpa,
    /// Fill RB slots and RB-flex first, then WR the same way, then BPA.
    RbHeavy,
    /// Mirror of RbHeavy with WR and RB swapped.
    WrHeavy,
    /// Force the first pool QB on the team's third pick, otherwise BPA.
    EarlyQb,
    /// Force the first pool TE on the team's third pick, otherwise BPA.
    EarlyTe,
}

impl Strategy {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BPA" => Some(Strategy::Bpa),
            "RB_HEAVY" => Some(Strategy::RbHeavy),
            "WR_HEAVY" => Some(Strategy::WrHeavy),
            "EARLY_QB" => Some(Strategy::EarlyQb),
            "EARLY_TE" => Some(Strategy::EarlyTe),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bpa => "BPA",
            Strategy::RbHeavy => "RB_HEAVY",
            Strategy::WrHeavy => "WR_HEAVY",
            Strategy::EarlyQb => "EARLY_QB",
            Strategy::EarlyTe => "EARLY_TE",
        }
    }

    /// Choose the next pick for a team.
    ///
    /// `picks_made` is the number of players already on the team's roster
    /// (the zero-indexed pick count the early-position strategies key on).
    /// Returns None only when no player in the pool fits any open slot.
    pub fn choose(
        &self,
        pool: &PlayerPool,
        ledger: &SlotLedger,
        picks_made: usize,
    ) -> Option<(usize, Slot)> {
        match self {
            Strategy::Bpa => bpa(pool, ledger),
            Strategy::RbHeavy => heavy(pool, ledger, Position::Rb, Position::Wr),
            Strategy::WrHeavy => heavy(pool, ledger, Position::Wr, Position::Rb),
            Strategy::EarlyQb => early(pool, ledger, picks_made, Position::Qb),
            Strategy::EarlyTe => early(pool, ledger, picks_made, Position::Te),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn bpa(pool: &PlayerPool, ledger: &SlotLedger) -> Option<(usize, Slot)> {
    for (i, player) in pool.iter().enumerate() {
        let dedicated = Slot::dedicated(player.position);
        if ledger.has_open(dedicated) {
            return Some((i, dedicated));
        }
        if player.position.flex_eligible() && ledger.has_open(Slot::Flex) {
            return Some((i, Slot::Flex));
        }
        if ledger.has_open(Slot::Bench) {
            return Some((i, Slot::Bench));
        }
    }
    None
}

/// First pool player at `pos`, paired with the given slot.
fn first_at(pool: &PlayerPool, pos: Position, slot: Slot) -> Option<(usize, Slot)> {
    pool.iter()
        .position(|p| p.position == pos)
        .map(|i| (i, slot))
}

/// Positional-priority scan shared by RbHeavy and WrHeavy.
///
/// While the primary position's dedicated slots are open, only primary
/// players are considered; then FLEX is fed primary players; then the
/// secondary position's dedicated slots. If the active phase finds no
/// matching player left in the pool, the pick falls through to BPA rather
/// than failing the draft.
fn heavy(
    pool: &PlayerPool,
    ledger: &SlotLedger,
    primary: Position,
    secondary: Position,
) -> Option<(usize, Slot)> {
    let phase = if ledger.has_open(Slot::dedicated(primary)) {
        first_at(pool, primary, Slot::dedicated(primary))
    } else if ledger.has_open(Slot::Flex) {
        first_at(pool, primary, Slot::Flex)
    } else if ledger.has_open(Slot::dedicated(secondary)) {
        first_at(pool, secondary, Slot::dedicated(secondary))
    } else {
        None
    };
    phase.or_else(|| bpa(pool, ledger))
}

/// Early-position strategy: on exactly the third pick, force the first pool
/// player at `pos` into that position's slot if it is still open. All other
/// picks (and a pool with no such player left) delegate to BPA.
fn early(
    pool: &PlayerPool,
    ledger: &SlotLedger,
    picks_made: usize,
    pos: Position,
) -> Option<(usize, Slot)> {
    let slot = Slot::dedicated(pos);
    if picks_made == 2 && ledger.has_open(slot) {
        if let Some(choice) = first_at(pool, pos, slot) {
            return Some(choice);
        }
    }
    bpa(pool, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::pool::Player;
    use crate::draft::roster::RosterTemplate;

    fn pool_of(specs: &[(&str, Position)]) -> PlayerPool {
        PlayerPool::new(
            specs
                .iter()
                .enumerate()
                .map(|(rank, (name, pos))| Player {
                    name: name.to_string(),
                    position: *pos,
                    rank,
                })
                .collect(),
        )
    }

    fn default_ledger() -> SlotLedger {
        SlotLedger::new(&RosterTemplate::default())
    }

    #[test]
    fn strategy_names_roundtrip() {
        for s in [
            Strategy::Bpa,
            Strategy::RbHeavy,
            Strategy::WrHeavy,
            Strategy::EarlyQb,
            Strategy::EarlyTe,
        ] {
            assert_eq!(Strategy::from_name(s.name()), Some(s));
        }
        assert_eq!(Strategy::from_name("bpa"), Some(Strategy::Bpa));
        assert_eq!(Strategy::from_name("ZERO_RB"), None);
    }

    #[test]
    fn bpa_takes_first_player_with_open_dedicated_slot() {
        let pool = pool_of(&[("A", Position::Rb), ("B", Position::Wr)]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::Bpa.choose(&pool, &ledger, 0).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(slot, Slot::Rb);
    }

    #[test]
    fn bpa_falls_to_flex_then_bench() {
        let pool = pool_of(&[("A", Position::Rb)]);
        let mut template = RosterTemplate::empty();
        template.set(Slot::Flex, 1);
        template.set(Slot::Bench, 1);
        let mut ledger = SlotLedger::new(&template);

        let (_, slot) = Strategy::Bpa.choose(&pool, &ledger, 0).unwrap();
        assert_eq!(slot, Slot::Flex);

        ledger.take(Slot::Flex);
        let (_, slot) = Strategy::Bpa.choose(&pool, &ledger, 1).unwrap();
        assert_eq!(slot, Slot::Bench);
    }

    #[test]
    fn bpa_never_puts_kicker_or_dst_in_flex() {
        let pool = pool_of(&[("K1", Position::K), ("D1", Position::Dst)]);
        let mut template = RosterTemplate::empty();
        template.set(Slot::Flex, 2);
        let ledger = SlotLedger::new(&template);
        // Only FLEX capacity remains and neither position is eligible.
        assert!(Strategy::Bpa.choose(&pool, &ledger, 0).is_none());
    }

    #[test]
    fn bpa_skips_ineligible_players() {
        let pool = pool_of(&[("QB2", Position::Qb), ("RB9", Position::Rb)]);
        let mut template = RosterTemplate::empty();
        template.set(Slot::Rb, 1);
        let ledger = SlotLedger::new(&template);
        let (idx, slot) = Strategy::Bpa.choose(&pool, &ledger, 0).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(slot, Slot::Rb);
    }

    #[test]
    fn bpa_returns_none_when_nothing_fits() {
        let pool = pool_of(&[("QB2", Position::Qb)]);
        let mut template = RosterTemplate::empty();
        template.set(Slot::Rb, 1);
        let ledger = SlotLedger::new(&template);
        assert!(Strategy::Bpa.choose(&pool, &ledger, 0).is_none());
    }

    #[test]
    fn rb_heavy_skips_better_ranked_non_rbs() {
        let pool = pool_of(&[
            ("WR A", Position::Wr),
            ("QB A", Position::Qb),
            ("RB A", Position::Rb),
        ]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::RbHeavy.choose(&pool, &ledger, 0).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(slot, Slot::Rb);
    }

    #[test]
    fn rb_heavy_feeds_flex_after_rb_slots() {
        let pool = pool_of(&[("WR A", Position::Wr), ("RB A", Position::Rb)]);
        let mut ledger = default_ledger();
        ledger.take(Slot::Rb);
        ledger.take(Slot::Rb);
        let (idx, slot) = Strategy::RbHeavy.choose(&pool, &ledger, 2).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(slot, Slot::Flex);
    }

    #[test]
    fn rb_heavy_moves_to_wr_once_rb_and_flex_filled() {
        let pool = pool_of(&[("TE A", Position::Te), ("WR A", Position::Wr)]);
        let mut ledger = default_ledger();
        ledger.take(Slot::Rb);
        ledger.take(Slot::Rb);
        ledger.take(Slot::Flex);
        let (idx, slot) = Strategy::RbHeavy.choose(&pool, &ledger, 3).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(slot, Slot::Wr);
    }

    #[test]
    fn rb_heavy_falls_back_to_bpa_when_no_rb_left() {
        // RB slots open but the pool holds no RBs: the pick must still
        // succeed via the BPA fallback instead of failing the trial.
        let pool = pool_of(&[("WR A", Position::Wr), ("QB A", Position::Qb)]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::RbHeavy.choose(&pool, &ledger, 0).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(slot, Slot::Wr);
    }

    #[test]
    fn wr_heavy_mirrors_rb_heavy() {
        let pool = pool_of(&[("RB A", Position::Rb), ("WR A", Position::Wr)]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::WrHeavy.choose(&pool, &ledger, 0).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(slot, Slot::Wr);
    }

    #[test]
    fn early_qb_forces_qb_on_third_pick() {
        // First QB sits deep in the pool behind better-ranked players.
        let pool = pool_of(&[
            ("RB A", Position::Rb),
            ("RB B", Position::Rb),
            ("WR A", Position::Wr),
            ("WR B", Position::Wr),
            ("TE A", Position::Te),
            ("QB A", Position::Qb),
        ]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::EarlyQb.choose(&pool, &ledger, 2).unwrap();
        assert_eq!(idx, 5);
        assert_eq!(slot, Slot::Qb);
    }

    #[test]
    fn early_qb_is_bpa_on_other_picks() {
        let pool = pool_of(&[("RB A", Position::Rb), ("QB A", Position::Qb)]);
        let ledger = default_ledger();
        for picks_made in [0, 1, 3, 4] {
            let (idx, slot) = Strategy::EarlyQb.choose(&pool, &ledger, picks_made).unwrap();
            assert_eq!(idx, 0, "pick {picks_made}");
            assert_eq!(slot, Slot::Rb);
        }
    }

    #[test]
    fn early_qb_skips_force_when_qb_slot_filled() {
        let pool = pool_of(&[("RB A", Position::Rb), ("QB A", Position::Qb)]);
        let mut ledger = default_ledger();
        ledger.take(Slot::Qb);
        let (idx, slot) = Strategy::EarlyQb.choose(&pool, &ledger, 2).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(slot, Slot::Rb);
    }

    #[test]
    fn early_te_forces_te_on_third_pick() {
        let pool = pool_of(&[("RB A", Position::Rb), ("TE A", Position::Te)]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::EarlyTe.choose(&pool, &ledger, 2).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(slot, Slot::Te);
    }

    #[test]
    fn early_qb_with_no_qb_in_pool_falls_back_to_bpa() {
        let pool = pool_of(&[("RB A", Position::Rb)]);
        let ledger = default_ledger();
        let (idx, slot) = Strategy::EarlyQb.choose(&pool, &ledger, 2).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(slot, Slot::Rb);
    }
}
