use crate::error::{CliError, Result};
use p3score::core::io::score_log::ScoreLogFile;
use p3score::core::io::traits::InputFile;
use p3score::core::models::features::ExternalScores;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// File the external scorer writes into its working directory.
pub const SCORE_LOG_NAME: &str = "xscore.log";

/// Runs `<binary> -score <protein> <ligand>` in a scratch directory and reads
/// the score rows from the log it leaves behind.
pub fn run_external_scorer(
    binary: &Path,
    protein: &Path,
    ligand: &Path,
) -> Result<Vec<ExternalScores>> {
    let protein = absolute(protein)?;
    let ligand = absolute(ligand)?;
    let workdir = tempfile::tempdir()?;

    info!("Running external scorer {:?}", binary);
    let output = Command::new(binary)
        .arg("-score")
        .arg(&protein)
        .arg(&ligand)
        .current_dir(workdir.path())
        .output()
        .map_err(|e| CliError::Scorer(format!("could not launch {}: {}", binary.display(), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::Scorer(format!(
            "{} exited with {}: {}",
            binary.display(),
            output.status,
            stderr.trim()
        )));
    }

    let log_path = workdir.path().join(SCORE_LOG_NAME);
    if !log_path.is_file() {
        return Err(CliError::Scorer(format!(
            "{} finished without writing {}",
            binary.display(),
            SCORE_LOG_NAME
        )));
    }
    debug!("Reading external scores from {:?}", log_path);

    ScoreLogFile::read_from_path(&log_path).map_err(|e| CliError::FileParsing {
        path: log_path.clone(),
        source: e.into(),
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
