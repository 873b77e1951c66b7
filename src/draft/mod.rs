// Draft simulation: pool, roster accounting, pick order, strategies, and
// the orchestrator that runs one full draft.

pub mod order;
pub mod pool;
pub mod position;
pub mod roster;
pub mod strategy;

use thiserror::Error;
use tracing::debug;

pub use order::{draft_order, OrderSystem};
pub use pool::{Player, PlayerPool};
pub use position::{Position, Slot};
pub use roster::{RosterTemplate, SlotLedger};
pub use strategy::Strategy;

#[derive(Debug, Error)]
pub enum DraftError {
    /// A strategy found no player in the pool that fits any open slot.
    /// Indicates the roster template, team count, and pool size are
    /// mismatched; fatal for the run, never retried.
    #[error("draft exhausted: no eligible player for team {team} at overall pick {pick}")]
    Exhausted { team: usize, pick: usize },

    /// A strategy returned a slot its own ledger could not absorb. This is a
    /// strategy bug, surfaced rather than letting a count go negative.
    #[error("slot {slot} overdrawn for team {team} at overall pick {pick}")]
    SlotOverdrawn { team: usize, pick: usize, slot: Slot },
}

/// One fantasy team: its remaining draft capacity, its pick history in
/// draft order, and the strategy that resolves its picks.
#[derive(Debug, Clone)]
pub struct Team {
    pub ledger: SlotLedger,
    pub picks: Vec<Player>,
    pub strategy: Strategy,
}

impl Team {
    pub fn new(template: &RosterTemplate, strategy: Strategy) -> Self {
        Team {
            ledger: SlotLedger::new(template),
            picks: Vec::with_capacity(template.total_slots()),
            strategy,
        }
    }
}

/// Run one complete draft.
///
/// Consumes `order` left to right: each entry names the team on the clock.
/// The team's strategy picks against a read-only view of the pool; the
/// orchestrator then decrements the team's ledger, records the pick, and
/// removes the player from the shared pool by identity. Choices are final.
pub fn run_draft(
    teams: &mut [Team],
    pool: &mut PlayerPool,
    order: &[usize],
) -> Result<(), DraftError> {
    for (pick_no, &team_idx) in order.iter().enumerate() {
        let team = &mut teams[team_idx];
        let (choice, slot) = team
            .strategy
            .choose(pool, &team.ledger, team.picks.len())
            .ok_or(DraftError::Exhausted {
                team: team_idx,
                pick: pick_no,
            })?;
        let name = pool
            .get(choice)
            .map(|p| p.name.clone())
            .ok_or(DraftError::Exhausted {
                team: team_idx,
                pick: pick_no,
            })?;
        if !team.ledger.take(slot) {
            return Err(DraftError::SlotOverdrawn {
                team: team_idx,
                pick: pick_no,
                slot,
            });
        }
        let player = pool.take(&name).ok_or(DraftError::Exhausted {
            team: team_idx,
            pick: pick_no,
        })?;
        debug!(
            pick = pick_no,
            team = team_idx,
            player = %player.name,
            slot = %slot,
            "pick resolved"
        );
        team.picks.push(player);
    }
    Ok(())
}
