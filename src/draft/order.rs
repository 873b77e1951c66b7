// Draft order generation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How pick order is arranged across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSystem {
    /// Same team order every round.
    Linear,
    /// A random starting permutation, reversed on alternating rounds.
    Snake,
}

impl OrderSystem {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Some(OrderSystem::Linear),
            "snake" => Some(OrderSystem::Snake),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrderSystem::Linear => "linear",
            OrderSystem::Snake => "snake",
        }
    }
}

impl fmt::Display for OrderSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Produce the full sequence of team indices to pick, one round per roster
/// slot so every team ends up with exactly `rounds` picks.
///
/// Snake ordering draws a fresh uniform permutation from `rng` each call;
/// callers must invoke this once per trial so no draft position is
/// systematically favored across a Monte Carlo run.
pub fn draft_order<R: Rng>(
    system: OrderSystem,
    num_teams: usize,
    rounds: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut order = Vec::with_capacity(num_teams * rounds);
    match system {
        OrderSystem::Linear => {
            for _ in 0..rounds {
                order.extend(0..num_teams);
            }
        }
        OrderSystem::Snake => {
            let mut forward: Vec<usize> = (0..num_teams).collect();
            forward.shuffle(rng);
            for round in 0..rounds {
                if round % 2 == 0 {
                    order.extend(forward.iter().copied());
                } else {
                    order.extend(forward.iter().rev().copied());
                }
            }
        }
    }
    order
}
