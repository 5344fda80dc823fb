use p3score::engine::config as core_config;
use std::path::PathBuf;

/// Where the five external score terms come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreSource {
    /// An existing log of the external scorer.
    Log(PathBuf),
    /// Run the scorer executable on the inputs.
    Run { binary: PathBuf },
}

pub struct AppConfig {
    pub protein_path: PathBuf,
    pub ligand_path: PathBuf,
    pub output_path: PathBuf,
    /// `None` selects the built-in model.
    pub model_path: Option<PathBuf>,
    pub scores: ScoreSource,
    pub core_config: core_config::PredictionConfig,
}
