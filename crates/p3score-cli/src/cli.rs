use clap::{Args, Parser, Subcommand};
use p3score::core::geometry::voxel::VoxelScheme;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Li Chuang",
    version,
    about = "P3-Score CLI - Predicts protein-ligand binding affinity (pKd and binding energy) from structural features and external empirical scores.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the binding affinity of every ligand in a MOL2 file against a protein.
    Predict(PredictArgs),
    /// Inspect or export the regression model artifact.
    Model(ModelArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    // --- Core Arguments ---
    /// Path to the protein structure (PDB format).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub protein: PathBuf,

    /// Path to the ligand file (MOL2, one or more molecules).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub ligand: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the CSV report.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Feature Overrides ---
    /// Voxel grid intervals per Ångström (nominal range 2.0-3.0).
    #[arg(short, long, value_name = "FLOAT")]
    pub accuracy: Option<f64>,

    /// Voxel sampling scheme: 'uniform', or 'legacy' to reproduce the published tool exactly.
    #[arg(long, value_name = "SCHEME")]
    pub voxel_scheme: Option<VoxelScheme>,

    // --- Scoring Overrides ---
    /// Read external scores from an existing log instead of running the scorer.
    #[arg(long, value_name = "PATH", conflicts_with = "xscore_bin")]
    pub score_log: Option<PathBuf>,

    /// Executable of the external empirical scoring program.
    #[arg(long, value_name = "PATH")]
    pub xscore_bin: Option<PathBuf>,

    /// Use a custom model artifact instead of the built-in one.
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S features.accuracy=2.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `model` subcommand.
#[derive(Args, Debug)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommands,
}

/// Available commands for model artifacts.
#[derive(Subcommand, Debug)]
pub enum ModelCommands {
    /// Print the name, version and dimensions of a model artifact.
    Show {
        /// Artifact to inspect; defaults to the built-in model.
        #[arg(short, long, value_name = "PATH")]
        model: Option<PathBuf>,
    },
    /// Write the built-in model artifact to a file for editing.
    Export {
        /// Destination of the TOML artifact.
        #[arg(short, long, required = true, value_name = "PATH")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_predict_with_overrides() {
        let cli = Cli::parse_from([
            "p3score",
            "-vv",
            "predict",
            "-p",
            "protein.pdb",
            "-l",
            "ligands.mol2",
            "-a",
            "2.5",
            "--voxel-scheme",
            "legacy",
            "--score-log",
            "xscore.log",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Predict(args) = cli.command else {
            panic!("expected the predict subcommand");
        };
        assert_eq!(args.protein, PathBuf::from("protein.pdb"));
        assert_eq!(args.accuracy, Some(2.5));
        assert_eq!(args.voxel_scheme, Some(VoxelScheme::Legacy));
        assert_eq!(args.score_log, Some(PathBuf::from("xscore.log")));
    }

    #[test]
    fn score_log_conflicts_with_scorer_binary() {
        let result = Cli::try_parse_from([
            "p3score",
            "predict",
            "-p",
            "a.pdb",
            "-l",
            "b.mol2",
            "--score-log",
            "x.log",
            "--xscore-bin",
            "xscore",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_voxel_scheme_is_rejected() {
        let result = Cli::try_parse_from([
            "p3score",
            "predict",
            "-p",
            "a.pdb",
            "-l",
            "b.mol2",
            "--voxel-scheme",
            "cubic",
        ]);
        assert!(result.is_err());
    }
}
