// Simulation configuration: strategy/order parsing, roster template
// loading (league.toml), and validation.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::{OrderSystem, RosterTemplate, Slot, Strategy};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{name}' (expected BPA, RB_HEAVY, WR_HEAVY, EARLY_QB, or EARLY_TE)")]
    UnknownStrategy { name: String },

    #[error("unknown order system '{name}' (expected snake or linear)")]
    UnknownOrderSystem { name: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Assembled simulation config
// ---------------------------------------------------------------------------

/// Everything the Monte Carlo driver needs for a run. Construct via
/// `SimConfig::new`, which fails fast on bad names or counts before any
/// simulation starts.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub trials: usize,
    pub order: OrderSystem,
    pub strategy: Strategy,
    pub num_teams: usize,
    pub template: RosterTemplate,
    /// Base seed for reproducible runs; None draws fresh entropy per trial.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn new(
        trials: usize,
        order_name: &str,
        strategy_name: &str,
        num_teams: usize,
        template: RosterTemplate,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let order = OrderSystem::from_name(order_name).ok_or_else(|| {
            ConfigError::UnknownOrderSystem {
                name: order_name.to_string(),
            }
        })?;
        let strategy = Strategy::from_name(strategy_name).ok_or_else(|| {
            ConfigError::UnknownStrategy {
                name: strategy_name.to_string(),
            }
        })?;

        let config = SimConfig {
            trials,
            order,
            strategy,
            num_teams,
            template,
            seed,
        };
        validate(&config)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// league.toml roster template
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[roster]` table in league.toml, e.g.:
/// `{"QB": 1, "RB": 2, "WR": 2, "TE": 1, "FLEX": 1, "K": 1, "DST": 1, "BENCH": 6}`
#[derive(Debug, Deserialize)]
struct LeagueFile {
    roster: BTreeMap<String, usize>,
}

/// Load a roster template from a league.toml file. Slot names must all be
/// recognized; counts of zero are allowed (the slot is simply absent).
pub fn load_roster_template(path: &Path) -> Result<RosterTemplate, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let file: LeagueFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    template_from_counts(&file.roster)
}

/// Build a template from parsed slot-name counts.
pub fn template_from_counts(
    counts: &BTreeMap<String, usize>,
) -> Result<RosterTemplate, ConfigError> {
    let mut template = RosterTemplate::empty();
    for (name, &count) in counts {
        let slot = Slot::from_str_slot(name).ok_or_else(|| ConfigError::ValidationError {
            field: format!("roster.{name}"),
            message: "unknown roster slot name".into(),
        })?;
        template.set(slot, template.count(slot) + count);
    }
    Ok(template)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &SimConfig) -> Result<(), ConfigError> {
    if config.trials == 0 {
        return Err(ConfigError::ValidationError {
            field: "trials".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.num_teams < 2 {
        return Err(ConfigError::ValidationError {
            field: "num_teams".into(),
            message: format!("need at least 2 teams, got {}", config.num_teams),
        });
    }

    if config.template.total_slots() == 0 {
        return Err(ConfigError::ValidationError {
            field: "roster".into(),
            message: "roster template has no slots".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn valid_config() -> Result<SimConfig, ConfigError> {
        SimConfig::new(100, "snake", "BPA", 10, RosterTemplate::default(), Some(1))
    }

    #[test]
    fn accepts_valid_config() {
        let config = valid_config().expect("valid config");
        assert_eq!(config.trials, 100);
        assert_eq!(config.order, OrderSystem::Snake);
        assert_eq!(config.strategy, Strategy::Bpa);
        assert_eq!(config.num_teams, 10);
        assert_eq!(config.template.total_slots(), 15);
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = SimConfig::new(1, "snake", "ZERO_RB", 10, RosterTemplate::default(), None)
            .unwrap_err();
        match err {
            ConfigError::UnknownStrategy { name } => assert_eq!(name, "ZERO_RB"),
            other => panic!("expected UnknownStrategy, got {other}"),
        }
    }

    #[test]
    fn rejects_unknown_order_system() {
        let err = SimConfig::new(1, "auction", "BPA", 10, RosterTemplate::default(), None)
            .unwrap_err();
        match err {
            ConfigError::UnknownOrderSystem { name } => assert_eq!(name, "auction"),
            other => panic!("expected UnknownOrderSystem, got {other}"),
        }
    }

    #[test]
    fn rejects_zero_trials() {
        let err =
            SimConfig::new(0, "linear", "BPA", 10, RosterTemplate::default(), None).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "trials"),
            other => panic!("expected ValidationError, got {other}"),
        }
    }

    #[test]
    fn rejects_single_team_league() {
        let err =
            SimConfig::new(1, "linear", "BPA", 1, RosterTemplate::default(), None).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "num_teams"),
            other => panic!("expected ValidationError, got {other}"),
        }
    }

    #[test]
    fn rejects_empty_roster() {
        let err =
            SimConfig::new(1, "linear", "BPA", 10, RosterTemplate::empty(), None).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "roster"),
            other => panic!("expected ValidationError, got {other}"),
        }
    }

    #[test]
    fn template_from_counts_standard_league() {
        let mut counts = BTreeMap::new();
        counts.insert("QB".to_string(), 1);
        counts.insert("RB".to_string(), 2);
        counts.insert("WR".to_string(), 2);
        counts.insert("TE".to_string(), 1);
        counts.insert("FLEX".to_string(), 1);
        counts.insert("K".to_string(), 1);
        counts.insert("DST".to_string(), 1);
        counts.insert("BENCH".to_string(), 6);
        let template = template_from_counts(&counts).unwrap();
        assert_eq!(template, RosterTemplate::default());
    }

    #[test]
    fn template_from_counts_rejects_unknown_slot() {
        let mut counts = BTreeMap::new();
        counts.insert("QB".to_string(), 1);
        counts.insert("IR".to_string(), 2);
        let err = template_from_counts(&counts).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "roster.IR"),
            other => panic!("expected ValidationError, got {other}"),
        }
    }

    #[test]
    fn load_roster_template_from_toml() {
        let tmp = std::env::temp_dir().join("draftsim_config_test_league");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("league.toml");
        fs::write(
            &path,
            "[roster]\nQB = 1\nRB = 2\nWR = 2\nTE = 1\nFLEX = 1\nK = 1\nDST = 1\nBENCH = 6\n",
        )
        .unwrap();

        let template = load_roster_template(&path).unwrap();
        assert_eq!(template.total_slots(), 15);
        assert_eq!(template.count(Slot::Bench), 6);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn load_roster_template_missing_file() {
        let err = load_roster_template(Path::new("/nonexistent/league.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn load_roster_template_invalid_toml() {
        let tmp = std::env::temp_dir().join("draftsim_config_test_bad_toml");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        let path = tmp.join("league.toml");
        fs::write(&path, "this is not valid [[[ toml").unwrap();

        let err = load_roster_template(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));

        let _ = fs::remove_dir_all(&tmp);
    }
}
