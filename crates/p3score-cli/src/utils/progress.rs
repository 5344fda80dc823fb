use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use p3score::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Terminal view of a prediction run.
///
/// Each workflow phase shows as a spinner prefixed with its name; ligand
/// profiling switches to a bar that names the most recently finished ligand.
/// Per-ligand notices are kept for the final report instead of being drawn
/// between bar updates.
#[derive(Clone)]
pub struct LigandProgress {
    bar: ProgressBar,
    notices: Arc<Mutex<Vec<String>>>,
}

impl LigandProgress {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        Self {
            bar,
            notices: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let view = self.clone();
        Box::new(move |event| view.apply(event))
    }

    /// Notices received so far, in arrival order.
    pub fn notices(&self) -> Vec<String> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn apply(&self, event: Progress) {
        let bar = &self.bar;
        match event {
            Progress::PhaseStart { name } => {
                bar.set_style(spinner_style());
                bar.set_prefix(name);
                bar.set_message("");
                bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::LigandsQueued { total } => {
                bar.disable_steady_tick();
                bar.reset();
                bar.set_length(total);
                bar.set_style(ligand_bar_style());
            }
            Progress::LigandProfiled { name } => {
                bar.inc(1);
                bar.set_message(name);
            }
            Progress::LigandsDone => {
                bar.set_message("");
            }
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                bar.finish_with_message("done");
            }
            Progress::Notice(text) => match self.notices.lock() {
                Ok(mut notices) => notices.push(text),
                Err(_) => warn!("Notice store is poisoned; dropping notice: {}", text),
            },
        }
    }
}

impl Default for LigandProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn ligand_bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:<18} [{bar:40.cyan/blue}] {pos}/{len} ligands ({elapsed}) {wide_msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use p3score::core::io::{mol2::Mol2File, pdb::PdbFile, traits::InputFile};
    use p3score::core::models::features::ExternalScores;
    use p3score::core::regression::scoring::AffinityModel;
    use p3score::engine::config::PredictionConfigBuilder;
    use p3score::engine::progress::ProgressReporter;
    use p3score::workflows;

    const PROTEIN: &str = "\
ATOM      1  CB  ALA A  10       0.000   0.000   2.000  1.00  0.00           C
ATOM      2  OE1 GLU A  51      13.900  11.400  10.200  1.00  0.00           O
";

    const LIGANDS: &str = "\
@<TRIPOS>MOLECULE
methane
 1 0
@<TRIPOS>ATOM
      1 C1          0.0000    0.0000    0.0000 C.3     1 LIG1        0.0000
@<TRIPOS>MOLECULE
ethanol
 3 2
@<TRIPOS>ATOM
      1 C1         10.0000   10.0000   10.0000 C.3     1 LIG1        0.0000
      2 C2         11.5000   10.0000   10.0000 C.3     1 LIG1        0.0000
      3 O1         12.1000   11.2000   10.0000 O.3     1 LIG1        0.0000
";

    fn predict_with(view: &LigandProgress, ligands: &str) -> usize {
        let protein = PdbFile::read_from_str(PROTEIN).unwrap();
        let ligands = Mol2File::read_from_str(ligands).unwrap();
        let scores = vec![ExternalScores::default(); ligands.len()];
        let config = PredictionConfigBuilder::new().accuracy(2.0).build().unwrap();
        let reporter = ProgressReporter::with_callback(view.callback());
        workflows::predict::run(
            &protein,
            &ligands,
            &scores,
            &AffinityModel::builtin().unwrap(),
            &config,
            &reporter,
        )
        .unwrap()
        .len()
    }

    #[test]
    fn bar_counts_every_profiled_ligand_and_ends_on_scoring() {
        let view = LigandProgress::with_draw_target(ProgressDrawTarget::hidden());
        assert_eq!(predict_with(&view, LIGANDS), 2);

        assert_eq!(view.bar.length(), Some(2));
        assert_eq!(view.bar.position(), 2);
        assert_eq!(view.bar.prefix(), "Scoring");
        assert_eq!(view.bar.message(), "done");
        assert!(view.bar.is_finished());
        assert!(view.notices().is_empty());
    }

    #[test]
    fn degraded_ligands_are_collected_as_notices() {
        let view = LigandProgress::with_draw_target(ProgressDrawTarget::hidden());
        let ligands = "@<TRIPOS>MOLECULE\nghost\n 0 0\n";
        assert_eq!(predict_with(&view, ligands), 1);
        assert_eq!(
            view.notices(),
            ["ghost: no atom records, scored from an all-zero structural profile"]
        );
    }

    #[test]
    fn clones_share_the_notice_store() {
        let view = LigandProgress::with_draw_target(ProgressDrawTarget::hidden());
        let callback = view.clone().callback();
        std::thread::spawn(move || callback(Progress::Notice("late".to_string())))
            .join()
            .unwrap();
        assert_eq!(view.notices(), ["late"]);
    }
}
