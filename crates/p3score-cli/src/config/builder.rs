use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, ScoreSource};
use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use p3score::core::geometry::voxel::VoxelScheme;
use p3score::engine::config as core_config;
use std::path::PathBuf;

pub fn build_config(args: &PredictArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let features_file = file_config.features.take().unwrap_or_default();
    let accuracy = args
        .accuracy
        .or(features_file.accuracy)
        .unwrap_or(defaults.accuracy);
    let voxel_scheme = args
        .voxel_scheme
        .or(features_file.voxel_scheme)
        .unwrap_or(defaults.voxel_scheme);

    let model_path = args
        .model
        .clone()
        .or_else(|| file_config.model.take().and_then(|m| m.path));

    let scoring_file = file_config.scoring.take().unwrap_or_default();
    let scores = match (&args.score_log, &args.xscore_bin) {
        (Some(log), _) => ScoreSource::Log(log.clone()),
        (None, Some(binary)) => ScoreSource::Run {
            binary: binary.clone(),
        },
        (None, None) => match (scoring_file.score_log, scoring_file.xscore_bin) {
            (Some(log), _) => ScoreSource::Log(log),
            (None, binary) => ScoreSource::Run {
                binary: binary.unwrap_or_else(|| PathBuf::from(&defaults.xscore_bin)),
            },
        },
    };

    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.output.take().and_then(|o| o.path))
        .unwrap_or_else(|| PathBuf::from(&defaults.output));

    let core_config = core_config::PredictionConfigBuilder::new()
        .accuracy(accuracy)
        .voxel_scheme(voxel_scheme)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        protein_path: args.protein.clone(),
        ligand_path: args.ligand.clone(),
        output_path,
        model_path,
        scores,
        core_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "features.accuracy" => {
                config
                    .features
                    .get_or_insert_with(Default::default)
                    .accuracy = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "features.voxel-scheme" => {
                config
                    .features
                    .get_or_insert_with(Default::default)
                    .voxel_scheme = Some(value_str.parse::<VoxelScheme>().map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })?);
            }
            "model.path" => {
                config.model.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            "scoring.xscore-bin" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .xscore_bin = Some(PathBuf::from(value_str));
            }
            "scoring.score-log" => {
                config
                    .scoring
                    .get_or_insert_with(Default::default)
                    .score_log = Some(PathBuf::from(value_str));
            }
            "output.path" => {
                config.output.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn base_predict_args() -> PredictArgs {
        PredictArgs {
            protein: PathBuf::from("protein.pdb"),
            ligand: PathBuf::from("ligands.mol2"),
            config: None,
            output: None,
            accuracy: None,
            voxel_scheme: None,
            score_log: None,
            xscore_bin: None,
            model: None,
            set_values: vec![],
        }
    }

    #[test]
    fn defaults_fill_every_unset_value() {
        let app = build_config(&base_predict_args()).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(app.core_config.accuracy, defaults.accuracy);
        assert_eq!(app.core_config.voxel_scheme, VoxelScheme::Uniform);
        assert_eq!(app.output_path, PathBuf::from("predict_info.csv"));
        assert_eq!(app.model_path, None);
        assert_eq!(
            app.scores,
            ScoreSource::Run {
                binary: PathBuf::from("xscore")
            }
        );
        assert_eq!(app.protein_path, PathBuf::from("protein.pdb"));
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let toml = r#"
            [features]
            accuracy = 2.0
            voxel-scheme = "legacy"

            [model]
            path = "custom-model.toml"

            [scoring]
            score-log = "runs/xscore.log"

            [output]
            path = "out/affinity.csv"
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let mut args = base_predict_args();
        args.config = Some(cfg_path);

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.core_config.accuracy, 2.0);
        assert_eq!(app.core_config.voxel_scheme, VoxelScheme::Legacy);
        assert_eq!(app.model_path, Some(PathBuf::from("custom-model.toml")));
        assert_eq!(app.scores, ScoreSource::Log(PathBuf::from("runs/xscore.log")));
        assert_eq!(app.output_path, PathBuf::from("out/affinity.csv"));
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let toml = r#"
            [features]
            accuracy = 2.0
            [scoring]
            score-log = "from-file.log"
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let mut args = base_predict_args();
        args.config = Some(cfg_path);
        args.accuracy = Some(2.5);
        args.xscore_bin = Some(PathBuf::from("/opt/xscore/bin/xscore"));

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.core_config.accuracy, 2.5);
        assert_eq!(
            app.scores,
            ScoreSource::Run {
                binary: PathBuf::from("/opt/xscore/bin/xscore")
            }
        );
    }

    #[test]
    fn set_values_override() {
        let mut args = base_predict_args();
        args.set_values = vec![
            "features.accuracy=2.25".to_string(),
            "features.voxel-scheme=legacy".to_string(),
            "model.path=m.toml".to_string(),
            "scoring.xscore-bin=./xs".to_string(),
            "output.path=r.csv".to_string(),
        ];

        let app = build_config(&args).expect("build ok");
        assert!((app.core_config.accuracy - 2.25).abs() < 1e-12);
        assert_eq!(app.core_config.voxel_scheme, VoxelScheme::Legacy);
        assert_eq!(app.model_path, Some(PathBuf::from("m.toml")));
        assert_eq!(
            app.scores,
            ScoreSource::Run {
                binary: PathBuf::from("./xs")
            }
        );
        assert_eq!(app.output_path, PathBuf::from("r.csv"));
    }

    #[test]
    fn malformed_or_unknown_set_values_are_rejected() {
        for bad in ["features.accuracy", "features.accuracy=fast", "engine.threads=4"] {
            let mut args = base_predict_args();
            args.set_values = vec![bad.to_string()];
            assert!(matches!(build_config(&args), Err(CliError::Config(_))));
        }
    }

    #[test]
    fn invalid_accuracy_is_a_config_error() {
        let mut args = base_predict_args();
        args.accuracy = Some(-1.0);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "[features]\ngrid = 3\n").unwrap();

        let mut args = base_predict_args();
        args.config = Some(cfg_path);
        assert!(matches!(
            build_config(&args),
            Err(CliError::FileParsing { .. })
        ));
    }
}
