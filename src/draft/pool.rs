// The shared player pool a draft consumes.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A draftable player from the ADP rankings.
///
/// `rank` is the player's explicit position in the ADP ordering (0 = most
/// desirable). The pool keeps players sorted by rank, but the field exists
/// so the ordering invariant is visible rather than implied by a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    pub rank: usize,
}

/// The ordered set of undrafted players for one trial.
///
/// The draft orchestrator owns the pool exclusively; strategies receive a
/// shared reference, pick an index, and the orchestrator performs the
/// removal by player identity.
#[derive(Debug, Clone)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    /// Build a pool from ADP-ordered players. Sorts by rank so the scan
    /// order holds even if the input was shuffled upstream.
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by_key(|p| p.rank);
        PlayerPool { players }
    }

    /// Iterate remaining players in ascending ADP rank.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Remove a player by identity. Returns the removed player, or None if
    /// no player with that name remains in the pool.
    pub fn take(&mut self, name: &str) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.name == name)?;
        Some(self.players.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
