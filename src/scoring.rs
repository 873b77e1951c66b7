// Season scoring: per-week optimal lineup reconstruction.
//
// Each week is optimized independently from a fresh lineup ledger; a player
// is never held back for a later week. The greedy fill is score-optimal for
// this template because FLEX eligibility (RB/WR) is a superset of the
// dedicated RB and WR slots and score is the only ranking criterion.

use std::cmp::Ordering;

use crate::data::{ScoreTable, WEEKS};
use crate::draft::{Player, Position, RosterTemplate, Slot};

/// Single-week starting-lineup capacity, built fresh from the roster
/// template for every scoring period. Distinct from the draft-time
/// `SlotLedger`: only dedicated position slots and FLEX hold starters;
/// bench players are excluded and contribute nothing.
#[derive(Debug, Clone)]
struct LineupLedger {
    open: [usize; Slot::COUNT],
}

impl LineupLedger {
    fn new(template: &RosterTemplate) -> Self {
        let mut open = [0; Slot::COUNT];
        for slot in Slot::ALL {
            if slot != Slot::Bench {
                open[slot.index()] = template.count(slot);
            }
        }
        LineupLedger { open }
    }

    /// Place a player at `pos` into the lineup: dedicated slot first, then
    /// FLEX for RB/WR. Returns false when the player must sit this week.
    fn assign(&mut self, pos: Position) -> bool {
        let dedicated = Slot::dedicated(pos).index();
        if self.open[dedicated] > 0 {
            self.open[dedicated] -= 1;
            return true;
        }
        if pos.flex_eligible() && self.open[Slot::Flex.index()] > 0 {
            self.open[Slot::Flex.index()] -= 1;
            return true;
        }
        false
    }
}

/// Best achievable lineup score for one team in one week.
///
/// Candidates are sorted by week score descending; the sort is stable so
/// draft order (ascending ADP) breaks ties. Deterministic for fixed inputs.
pub fn week_score(
    picks: &[Player],
    week: usize,
    template: &RosterTemplate,
    scores: &ScoreTable,
) -> f64 {
    let mut candidates: Vec<(f64, Position)> = picks
        .iter()
        .map(|p| (scores.week_points(&p.name, week), p.position))
        .collect();
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut ledger = LineupLedger::new(template);
    candidates
        .into_iter()
        .filter(|(_, pos)| ledger.assign(*pos))
        .map(|(points, _)| points)
        .sum()
}

/// Total season score: the sum of independently optimized weeks 1..=16.
pub fn season_score(picks: &[Player], template: &RosterTemplate, scores: &ScoreTable) -> f64 {
    (1..=WEEKS)
        .map(|week| week_score(picks, week, template, scores))
        .sum()
}
