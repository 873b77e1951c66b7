// Input data loading and normalization.
//
// Reads FantasyPros-format CSV files: an overall ADP rankings file whose POS
// column carries positional-rank digits ("RB12"), and a weekly points file
// with one column per week 1-16 where "BYE" and "-" mean zero.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::draft::{Player, Position};

/// Number of scoring periods in a season.
pub const WEEKS: usize = 16;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("weekly points for '{player}' missing a week-{week} column")]
    MissingWeekColumn { player: String, week: usize },

    #[error("bad score cell for '{player}' week {week}: '{value}'")]
    BadScoreCell {
        player: String,
        week: usize,
        value: String,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// FantasyPros ADP row. Row order is the ranking; only the name and the
/// position string matter here. Extra columns (Team, Bye, per-site ranks,
/// AVG) are absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawAdpRow {
    Player: String,
    POS: String,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Weekly points row. Week columns are headed "1" through "16" and land in
/// the flattened map as strings so the sentinel markers survive to
/// normalization.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawScoreRow {
    Player: String,
    #[serde(default)]
    Pos: String,
    #[serde(flatten)]
    cells: HashMap<String, RawCell>,
}

/// A score cell as read from the CSV, kept in string form.
///
/// csv's serde support feeds `#[serde(flatten)]` fields through
/// `deserialize_any`, which type-guesses each cell (numbers arrive as
/// f64/i64, sentinels as strings), so a plain `String` target fails to
/// deserialize. This newtype accepts whatever the guess was and stores its
/// string form for normalization.
#[derive(Debug)]
struct RawCell(String);

impl<'de> Deserialize<'de> for RawCell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl serde::de::Visitor<'_> for CellVisitor {
            type Value = RawCell;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a CSV cell value")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<RawCell, E> {
                Ok(RawCell(v.to_string()))
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

// ---------------------------------------------------------------------------
// Weekly score table
// ---------------------------------------------------------------------------

/// Per-player weekly scores for one season.
///
/// Players absent from the table (no recorded games) score zero every week,
/// matching how a roster keeps such a player in their slot while the lineup
/// gains nothing from them.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: HashMap<String, [f64; WEEKS]>,
}

impl ScoreTable {
    /// The player's score for the given week (1-indexed, 1..=16).
    pub fn week_points(&self, name: &str, week: usize) -> f64 {
        debug_assert!((1..=WEEKS).contains(&week));
        self.scores
            .get(name)
            .map(|weeks| weeks[week - 1])
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[cfg(test)]
    fn insert(&mut self, name: &str, weeks: [f64; WEEKS]) {
        self.scores.insert(name.to_string(), weeks);
    }
}

/// Normalize one score cell: "BYE" and "-" are the documented zero
/// sentinels; anything else must parse as a finite number.
fn parse_score_cell(player: &str, week: usize, raw: &str) -> Result<f64, DataError> {
    let cell = raw.trim();
    if cell.eq_ignore_ascii_case("BYE") || cell == "-" {
        return Ok(0.0);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::BadScoreCell {
            player: player.to_string(),
            week,
            value: raw.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (exposed for testing with inline fixtures)
// ---------------------------------------------------------------------------

/// Load the ADP rankings. Rank is the row's position among kept rows; rows
/// with an unparseable position are skipped with a warning, and duplicate
/// names keep their first (best-ranked) entry.
pub fn load_adp_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players: Vec<Player> = Vec::new();
    for result in reader.deserialize::<RawAdpRow>() {
        match result {
            Ok(raw) => {
                let name = raw.Player.trim().to_string();
                let Some(position) = Position::from_str_pos(&raw.POS) else {
                    warn!("skipping ADP row '{}': unknown position '{}'", name, raw.POS);
                    continue;
                };
                if players.iter().any(|p| p.name == name) {
                    warn!("duplicate ADP entry for '{}', keeping first", name);
                    continue;
                }
                players.push(Player {
                    name,
                    position,
                    rank: players.len(),
                });
            }
            Err(e) => {
                warn!("skipping malformed ADP row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Load the weekly points table. Every row must supply all 16 week columns;
/// a malformed cell is a hard error rather than a silent zero.
pub fn load_scores_from_reader<R: Read>(rdr: R) -> Result<ScoreTable, DataError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut scores: HashMap<String, [f64; WEEKS]> = HashMap::new();
    for result in reader.deserialize::<RawScoreRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed weekly points row: {}", e);
                continue;
            }
        };
        let name = raw.Player.trim().to_string();
        let mut weeks = [0.0; WEEKS];
        for (i, slot) in weeks.iter_mut().enumerate() {
            let week = i + 1;
            let cell = raw
                .cells
                .get(&week.to_string())
                .ok_or_else(|| DataError::MissingWeekColumn {
                    player: name.clone(),
                    week,
                })?;
            *slot = parse_score_cell(&name, week, &cell.0)?;
        }
        if scores.insert(name.clone(), weeks).is_some() {
            warn!("duplicate weekly points entry for '{}', using latest", name);
        }
    }
    Ok(ScoreTable { scores })
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

/// Load ADP rankings from a CSV file.
pub fn load_adp(path: &Path) -> Result<Vec<Player>, DataError> {
    let file = std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_adp_from_reader(file).map_err(|e| DataError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    if players.is_empty() {
        return Err(DataError::Validation(format!(
            "ADP file {} produced zero valid rows",
            path.display()
        )));
    }
    Ok(players)
}

/// Load the weekly points table from a CSV file.
pub fn load_scores(path: &Path) -> Result<ScoreTable, DataError> {
    let file = std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_scores_from_reader(file)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
