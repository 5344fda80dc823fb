use thiserror::Error;

use super::config::ConfigError;
use crate::core::regression::params::ModelError;
use crate::core::regression::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Model error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Scoring failed for ligand '{ligand}': {source}")]
    Scoring {
        ligand: String,
        source: ScoringError,
    },

    #[error("Received {scores} external score rows for {ligands} ligands")]
    ScoreCountMismatch { scores: usize, ligands: usize },

    #[error("Model expects {expected} raw features but ligands provide {actual}")]
    RawFeatureCount { expected: usize, actual: usize },
}
