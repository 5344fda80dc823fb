use crate::core::chem::residues::{ContactCounts, ResidueClass, residue_class};
use crate::core::geometry::bounds::LigandBounds;
use crate::core::models::atom::Atom;
use crate::core::models::protein::Protein;
use nalgebra::distance;
use std::collections::HashMap;
use tracing::{instrument, trace};

/// Margin added to the ligand's interaction radius for the coarse shell (Å).
pub const SHELL_MARGIN: f64 = 3.0;
/// Contact distance added to a ligand atom's van der Waals radius (Å).
pub const CONTACT_DISTANCE: f64 = 2.5;

/// Counts the distinct protein residues in contact with the ligand, by class.
///
/// Protein atoms farther than `radius + 3 Å` from the ligand center are
/// discarded first. A remaining atom makes contact when it lies within
/// `2.5 Å + r` of any ligand atom of radius `r`. Residues are keyed by
/// sequence id, so a residue touching the ligand with several atoms counts
/// once.
#[instrument(skip_all, name = "binding_site_task")]
pub fn classify_contacts(
    bounds: &LigandBounds,
    ligand_atoms: &[Atom],
    protein: &Protein,
) -> ContactCounts {
    let center = bounds.center();
    let shell = bounds.interaction_radius() + SHELL_MARGIN;
    let reach: Vec<(&Atom, f64)> = ligand_atoms
        .iter()
        .map(|atom| (atom, CONTACT_DISTANCE + atom.vdw_radius()))
        .collect();

    let mut contacted: HashMap<&str, &str> = HashMap::new();
    let mut shell_atoms = 0usize;
    for protein_atom in protein.atoms() {
        let Some(residue) = &protein_atom.residue else {
            continue;
        };
        if distance(&protein_atom.position, &center) >= shell {
            continue;
        }
        shell_atoms += 1;
        let touches = reach
            .iter()
            .any(|(atom, cutoff)| distance(&protein_atom.position, &atom.position) <= *cutoff);
        if touches {
            contacted.insert(residue.seq_id.as_str(), residue.name.as_str());
        }
    }

    let mut counts = ContactCounts::default();
    for (seq_id, name) in &contacted {
        let class = residue_class(name).map_or("other", ResidueClass::label);
        trace!(residue = %name, seq_id = %seq_id, class, "Contacted residue.");
        counts.record(name);
    }
    trace!(
        shell_atoms,
        residues = contacted.len(),
        counts = ?counts.as_array(),
        "Binding-site residues classified."
    );
    counts
}
