use crate::core::models::features::{ExternalScores, Prediction, RAW_FEATURE_COUNT, RawFeatures};
use crate::core::models::ligand::Ligand;
use crate::core::models::protein::Protein;
use crate::core::regression::scoring::AffinityModel;
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::profile::{profile_ligand, unknown_atom_types};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Predicts the affinity of every ligand against `protein`.
///
/// `scores[i]` must belong to `ligands[i]`; the returned predictions follow
/// the ligand order. All consistency checks run before any ligand is profiled.
#[instrument(skip_all, name = "prediction_workflow")]
pub fn run(
    protein: &Protein,
    ligands: &[Ligand],
    scores: &[ExternalScores],
    model: &AffinityModel,
    config: &PredictionConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Prediction>, EngineError> {
    // === Phase 0: Validation ===
    if scores.len() != ligands.len() {
        return Err(EngineError::ScoreCountMismatch {
            scores: scores.len(),
            ligands: ligands.len(),
        });
    }
    if model.raw_feature_count() != RAW_FEATURE_COUNT {
        return Err(EngineError::RawFeatureCount {
            expected: model.raw_feature_count(),
            actual: RAW_FEATURE_COUNT,
        });
    }
    info!(
        ligands = ligands.len(),
        protein_atoms = protein.len(),
        accuracy = config.accuracy,
        scheme = %config.voxel_scheme,
        "Starting affinity prediction."
    );

    // === Phase 1: Structural profiles ===
    reporter.report(Progress::PhaseStart {
        name: "Ligand Profiling",
    });
    reporter.report(Progress::LigandsQueued {
        total: ligands.len() as u64,
    });

    let profile_one = |ligand: &Ligand| {
        if let Some(notice) = input_notice(ligand) {
            reporter.report(Progress::Notice(notice));
        }
        let profile = profile_ligand(ligand, protein, config);
        reporter.report(Progress::LigandProfiled {
            name: ligand.name.clone(),
        });
        profile
    };

    #[cfg(not(feature = "parallel"))]
    let profiles: Vec<_> = ligands.iter().map(profile_one).collect();

    #[cfg(feature = "parallel")]
    let profiles: Vec<_> = ligands.par_iter().map(profile_one).collect();

    reporter.report(Progress::LigandsDone);
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Scoring ===
    reporter.report(Progress::PhaseStart { name: "Scoring" });
    let predictions = ligands
        .iter()
        .zip(scores)
        .zip(profiles)
        .map(|((ligand, &row), profile)| {
            let features = RawFeatures::new(row, profile);
            let affinity =
                model
                    .predict(&features.to_vector())
                    .map_err(|source| EngineError::Scoring {
                        ligand: ligand.name.clone(),
                        source,
                    })?;
            Ok(Prediction {
                ligand_name: ligand.name.clone(),
                features,
                affinity,
                binding_energy: model.binding_energy(affinity),
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    reporter.report(Progress::PhaseFinish);

    info!(predictions = predictions.len(), "Affinity prediction finished.");
    Ok(predictions)
}

/// Describes input degradation that changes how `ligand` is scored.
fn input_notice(ligand: &Ligand) -> Option<String> {
    if ligand.is_empty() {
        return Some(format!(
            "{}: no atom records, scored from an all-zero structural profile",
            ligand.name
        ));
    }
    let unknown = unknown_atom_types(ligand);
    if unknown.is_empty() {
        None
    } else {
        Some(format!(
            "{}: no van der Waals radius for atom type(s) {}",
            ligand.name,
            unknown.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::voxel::VoxelScheme;
    use crate::core::io::mol2::Mol2File;
    use crate::core::io::pdb::PdbFile;
    use crate::core::io::traits::InputFile;
    use crate::core::regression::params::ModelArtifact;
    use crate::engine::config::PredictionConfigBuilder;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PROTEIN: &str = "\
HEADER    TEST
ATOM      1  CB  ALA A  10       0.000   0.000   2.000  1.00  0.00           C
ATOM      2  CA  ALA A  10       0.500   0.000   2.800  1.00  0.00           C
ATOM      3  OG  SER A  11       1.400  -1.500   1.500  1.00  0.00           O
ATOM      4  NZ  LYS A  12       3.800   3.000   0.100  1.00  0.00           N
ATOM      5  OD1 ASP A  13       4.500   0.500   1.000  1.00  0.00           O
HETATM    6  O   HOH W 201      -1.000   1.500   0.500  1.00  0.00           O
HETATM    7  ZN   ZN A 301       2.000  -1.800  -1.500  1.00  0.00           Z
ATOM      8  CA  GLY A  40      30.000  30.000  30.000  1.00  0.00           C
ATOM      9  CB  VAL A  50      10.500  11.000  12.200  1.00  0.00           C
ATOM     10  CG1 VAL A  50      11.000  11.500  12.400  1.00  0.00           C
ATOM     11  OE1 GLU A  51      13.900  11.400  10.200  1.00  0.00           O
END
";

    const LIGANDS: &str = "\
@<TRIPOS>MOLECULE
benzamide_frag
 6 6 1 0 0
SMALL
USER_CHARGES

@<TRIPOS>ATOM
      1 C1          0.0000    0.0000    0.0000 C.ar    1 LIG1        0.0000
      2 C2          1.3900    0.0000    0.0000 C.ar    1 LIG1        0.0000
      3 C3          2.0850    1.2040    0.0000 C.ar    1 LIG1        0.0000
      4 N1          3.5000    1.2000    0.1000 N.am    1 LIG1        0.0000
      5 O1          2.1000    2.4000   -0.2000 O.2     1 LIG1        0.0000
      6 Cl1        -1.2000   -1.1000    0.3000 Cl      1 LIG1        0.0000
@<TRIPOS>BOND
     1     1     2 1
@<TRIPOS>MOLECULE
ethanol
 3 2 1 0 0
SMALL
USER_CHARGES

@<TRIPOS>ATOM
      1 C1         10.0000   10.0000   10.0000 C.3     1 LIG1        0.0000
      2 C2         11.5000   10.0000   10.0000 C.3     1 LIG1        0.0000
      3 O1         12.1000   11.2000   10.0000 O.3     1 LIG1        0.0000
@<TRIPOS>BOND
     1     1     2 1
";

    fn inputs() -> (Protein, Vec<Ligand>, Vec<ExternalScores>) {
        let protein = PdbFile::read_from_str(PROTEIN).unwrap();
        let ligands = Mol2File::read_from_str(LIGANDS).unwrap();
        let scores = vec![
            ExternalScores::from_columns([-5.12, 1.8, 0.45, -4.9, 1.2]),
            ExternalScores::from_columns([-2.3, 0.6, 0.1, -2.0, 0.3]),
        ];
        (protein, ligands, scores)
    }

    fn config(scheme: VoxelScheme) -> PredictionConfig {
        PredictionConfigBuilder::new()
            .accuracy(2.0)
            .voxel_scheme(scheme)
            .build()
            .unwrap()
    }

    #[test]
    fn legacy_sampling_reproduces_reference_predictions() {
        let (protein, ligands, scores) = inputs();
        let model = AffinityModel::builtin().unwrap();
        let predictions = run(
            &protein,
            &ligands,
            &scores,
            &model,
            &config(VoxelScheme::Legacy),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(predictions.len(), 2);
        let fragment = &predictions[0];
        assert_eq!(fragment.ligand_name, "benzamide_frag");
        assert_eq!(
            fragment.features.to_vector(),
            [-5.12, 1.8, 0.45, -4.9, 1.2, 76.054, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(fragment.affinity, 3.7884);
        assert_eq!(fragment.binding_energy, -5.1651);

        let ethanol = &predictions[1];
        assert_eq!(ethanol.ligand_name, "ethanol");
        assert_eq!(
            ethanol.features.to_vector(),
            [-2.3, 0.6, 0.1, -2.0, 0.3, 38.841, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(ethanol.affinity, 2.4674);
        assert_eq!(ethanol.binding_energy, -3.3641);
    }

    #[test]
    fn uniform_sampling_predictions() {
        let (protein, ligands, scores) = inputs();
        let model = AffinityModel::builtin().unwrap();
        let predictions = run(
            &protein,
            &ligands,
            &scores,
            &model,
            &config(VoxelScheme::Uniform),
            &ProgressReporter::new(),
        )
        .unwrap();
        assert_eq!(predictions[0].features.profile.volume, 61.081);
        assert_eq!(predictions[0].affinity, 3.759);
        assert_eq!(predictions[0].binding_energy, -5.125);
        assert_eq!(predictions[1].features.profile.volume, 28.673);
        assert_eq!(predictions[1].affinity, 2.4548);
        assert_eq!(predictions[1].binding_energy, -3.3469);
    }

    #[test]
    fn score_count_mismatch_is_rejected_before_profiling() {
        let (protein, ligands, mut scores) = inputs();
        scores.pop();
        let ticks = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|_| {
            ticks.fetch_add(1, Ordering::SeqCst);
        }));
        let err = run(
            &protein,
            &ligands,
            &scores,
            &AffinityModel::builtin().unwrap(),
            &config(VoxelScheme::Uniform),
            &reporter,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::ScoreCountMismatch {
                scores: 1,
                ligands: 2
            }
        ));
        drop(reporter);
        assert_eq!(ticks.into_inner(), 0);
    }

    #[test]
    fn model_with_other_raw_width_is_rejected() {
        let (protein, ligands, scores) = inputs();
        let artifact = ModelArtifact {
            name: "narrow".into(),
            version: "0".into(),
            raw_feature_count: 4,
            binding_energy_factor: -1.0,
            selection: vec![],
            mean: vec![0.0; 4],
            scale: vec![1.0; 4],
            coefficients: vec![0.0; 5],
        };
        let model = AffinityModel::new(artifact).unwrap();
        let err = run(
            &protein,
            &ligands,
            &scores,
            &model,
            &config(VoxelScheme::Uniform),
            &ProgressReporter::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::RawFeatureCount {
                expected: 4,
                actual: 14
            }
        ));
    }

    #[test]
    fn empty_molecule_is_scored_from_a_zero_profile() {
        let protein = PdbFile::read_from_str(PROTEIN).unwrap();
        let ligands = Mol2File::read_from_str("@<TRIPOS>MOLECULE\nblank\n 0 0\n").unwrap();
        let scores = vec![ExternalScores::default()];
        let predictions = run(
            &protein,
            &ligands,
            &scores,
            &AffinityModel::builtin().unwrap(),
            &config(VoxelScheme::Uniform),
            &ProgressReporter::new(),
        )
        .unwrap();
        // ring count = 0 - 0 + 1
        assert_eq!(predictions[0].features.profile.ring_count, 1);
        assert_eq!(predictions[0].features.profile.volume, 0.0);
    }

    #[test]
    fn progress_reports_each_profiled_ligand() {
        let (protein, ligands, scores) = inputs();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        run(
            &protein,
            &ligands,
            &scores,
            &AffinityModel::builtin().unwrap(),
            &config(VoxelScheme::Uniform),
            &reporter,
        )
        .unwrap();
        drop(reporter);
        let events = events.into_inner().unwrap();

        assert_eq!(
            events[..2],
            [
                Progress::PhaseStart {
                    name: "Ligand Profiling"
                },
                Progress::LigandsQueued { total: 2 },
            ]
        );
        let mut profiled: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                Progress::LigandProfiled { name } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        profiled.sort_unstable();
        assert_eq!(profiled, ["benzamide_frag", "ethanol"]);
        assert!(!events.iter().any(|e| matches!(e, Progress::Notice(_))));
        assert_eq!(
            events[events.len() - 2..],
            [Progress::PhaseStart { name: "Scoring" }, Progress::PhaseFinish]
        );
    }

    #[test]
    fn degraded_ligands_raise_notices() {
        let protein = PdbFile::read_from_str(PROTEIN).unwrap();
        let ligands = Mol2File::read_from_str(
            "@<TRIPOS>MOLECULE\nblank\n 0 0\n\
             @<TRIPOS>MOLECULE\ndummy\n 1 0\n@<TRIPOS>ATOM\n\
             1 X1 0.0 0.0 0.0 Du\n",
        )
        .unwrap();
        let notices = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Notice(text) = event {
                notices.lock().unwrap().push(text);
            }
        }));
        run(
            &protein,
            &ligands,
            &[ExternalScores::default(), ExternalScores::default()],
            &AffinityModel::builtin().unwrap(),
            &config(VoxelScheme::Uniform),
            &reporter,
        )
        .unwrap();
        drop(reporter);
        let mut notices = notices.into_inner().unwrap();
        notices.sort();
        assert_eq!(
            notices,
            [
                "blank: no atom records, scored from an all-zero structural profile",
                "dummy: no van der Waals radius for atom type(s) Du",
            ]
        );
    }

    #[test]
    fn predictions_are_repeatable() {
        let (protein, ligands, scores) = inputs();
        let model = AffinityModel::builtin().unwrap();
        let cfg = config(VoxelScheme::Uniform);
        let first = run(&protein, &ligands, &scores, &model, &cfg, &ProgressReporter::new()).unwrap();
        let second =
            run(&protein, &ligands, &scores, &model, &cfg, &ProgressReporter::new()).unwrap();
        assert_eq!(first, second);
    }
}
