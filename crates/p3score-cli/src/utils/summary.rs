use p3score::core::models::features::Prediction;
use std::fmt::Write;
use std::path::Path;

const BANNER: &str = "****************     P3-Score     ****************";

/// Renders the console summary: the headline values for a single ligand, or
/// a table with one row per ligand.
pub fn render_summary(predictions: &[Prediction], report_path: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    match predictions {
        [single] => {
            let _ = writeln!(out, "Predict -log(Kd) = {}\n", single.affinity);
            let _ = writeln!(out, "Predict binding energy = {}\n", single.binding_energy);
        }
        _ => {
            let _ = writeln!(out, "id\t\tpredict(pKd)\tbind_energy");
            for p in predictions {
                let _ = writeln!(
                    out,
                    "{:<15}{:<15}{:<8}",
                    p.ligand_name, p.affinity, p.binding_energy
                );
            }
        }
    }
    let _ = writeln!(
        out,
        "The more information in the file of '{}'",
        report_path.display()
    );
    let _ = writeln!(out, "{}", "*".repeat(BANNER.len()));
    out
}
