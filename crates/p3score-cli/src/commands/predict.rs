use crate::cli::PredictArgs;
use crate::config::{AppConfig, ScoreSource, build_config};
use crate::error::{CliError, Result};
use crate::utils::progress::LigandProgress;
use crate::utils::scorer::run_external_scorer;
use crate::utils::summary::render_summary;
use p3score::{
    core::io::{
        mol2::Mol2File, pdb::PdbFile, report::write_report_to_path, score_log::ScoreLogFile,
        traits::InputFile,
    },
    core::models::features::ExternalScores,
    core::regression::{params::ModelArtifact, scoring::AffinityModel},
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: PredictArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args)?;

    info!("Loading protein from {:?}", &config.protein_path);
    let protein = read_input::<PdbFile>(&config.protein_path)?;
    info!(
        "Protein has {} atoms in {} residues.",
        protein.len(),
        protein.residue_count()
    );

    info!("Loading ligands from {:?}", &config.ligand_path);
    let ligands = read_input::<Mol2File>(&config.ligand_path)?;
    if ligands.is_empty() {
        warn!("Ligand file contains no molecules.");
        println!("Warning: no ligands found in {}.", config.ligand_path.display());
        return Ok(());
    }

    let model = load_model(&config)?;
    let scores = load_scores(&config)?;

    let progress = LigandProgress::new();
    let reporter = ProgressReporter::with_callback(progress.callback());

    println!("Predicting affinity for {} ligand(s)...", ligands.len());
    let predictions = workflows::predict::run(
        &protein,
        &ligands,
        &scores,
        &model,
        &config.core_config,
        &reporter,
    )?;

    info!("Writing report to {:?}", &config.output_path);
    write_report_to_path(&config.output_path, &predictions).map_err(|e| {
        CliError::FileParsing {
            path: config.output_path.clone(),
            source: e.into(),
        }
    })?;

    print!("{}", render_summary(&predictions, &config.output_path));
    let notices = progress.notices();
    if !notices.is_empty() {
        println!("\nNotes:");
        for notice in notices {
            println!("  - {}", notice);
        }
    }
    Ok(())
}

fn read_input<F>(path: &Path) -> Result<F::Output>
where
    F: InputFile,
    F::Error: Send + Sync + 'static,
{
    F::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn load_model(config: &AppConfig) -> Result<AffinityModel> {
    let artifact = match &config.model_path {
        Some(path) => {
            info!("Loading model artifact from {:?}", path);
            ModelArtifact::load(path)?
        }
        None => ModelArtifact::builtin()?,
    };
    info!(
        "Using model '{}' v{} ({} selected terms).",
        artifact.name,
        artifact.version,
        artifact.mean.len()
    );
    Ok(AffinityModel::new(artifact)?)
}

fn load_scores(config: &AppConfig) -> Result<Vec<ExternalScores>> {
    match &config.scores {
        ScoreSource::Log(path) => {
            info!("Reading external scores from {:?}", path);
            read_input::<ScoreLogFile>(path)
        }
        ScoreSource::Run { binary } => {
            run_external_scorer(binary, &config.protein_path, &config.ligand_path)
        }
    }
}
