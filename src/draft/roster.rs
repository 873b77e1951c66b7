// Roster template and draft-time slot accounting.

use serde::{Deserialize, Serialize};

use super::position::Slot;

/// Slot counts shared by every team in the league.
///
/// The template is fixed for a whole run; each team drafts against its own
/// `SlotLedger` copy, and season scoring builds a separate per-week lineup
/// ledger from the same counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTemplate {
    counts: [usize; Slot::COUNT],
}

impl RosterTemplate {
    /// A template with no slots; populate via `set`.
    pub fn empty() -> Self {
        RosterTemplate {
            counts: [0; Slot::COUNT],
        }
    }

    pub fn set(&mut self, slot: Slot, count: usize) {
        self.counts[slot.index()] = count;
    }

    pub fn count(&self, slot: Slot) -> usize {
        self.counts[slot.index()]
    }

    /// Total number of roster slots, which equals the number of picks each
    /// team makes and therefore the number of draft rounds.
    pub fn total_slots(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Default for RosterTemplate {
    /// The standard league template: QB1 RB2 WR2 TE1 FLEX1 K1 DST1 BENCH6.
    fn default() -> Self {
        let mut t = RosterTemplate::empty();
        t.set(Slot::Qb, 1);
        t.set(Slot::Rb, 2);
        t.set(Slot::Wr, 2);
        t.set(Slot::Te, 1);
        t.set(Slot::Flex, 1);
        t.set(Slot::K, 1);
        t.set(Slot::Dst, 1);
        t.set(Slot::Bench, 6);
        t
    }
}

/// One team's remaining draft capacity, decremented once per pick.
///
/// Counts never go negative: `take` on an empty slot fails and leaves the
/// ledger unchanged.
#[derive(Debug, Clone)]
pub struct SlotLedger {
    remaining: [usize; Slot::COUNT],
}

impl SlotLedger {
    pub fn new(template: &RosterTemplate) -> Self {
        let mut remaining = [0; Slot::COUNT];
        for slot in Slot::ALL {
            remaining[slot.index()] = template.count(slot);
        }
        SlotLedger { remaining }
    }

    pub fn remaining(&self, slot: Slot) -> usize {
        self.remaining[slot.index()]
    }

    pub fn has_open(&self, slot: Slot) -> bool {
        self.remaining[slot.index()] > 0
    }

    /// Consume one unit of capacity. Returns false (and does nothing) if the
    /// slot is already exhausted.
    pub fn take(&mut self, slot: Slot) -> bool {
        let c = &mut self.remaining[slot.index()];
        if *c == 0 {
            return false;
        }
        *c -= 1;
        true
    }

    /// Total picks this team can still make.
    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }
}
