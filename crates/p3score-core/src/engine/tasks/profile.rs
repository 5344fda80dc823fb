use super::binding_site::classify_contacts;
use crate::core::chem::polarity::count_polar_atoms;
use crate::core::chem::radii::is_known_type;
use crate::core::geometry::bounds::LigandBounds;
use crate::core::geometry::voxel::estimate_volume;
use crate::core::models::features::LigandProfile;
use crate::core::models::ligand::Ligand;
use crate::core::models::protein::Protein;
use crate::engine::config::PredictionConfig;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

/// Computes the structural descriptors of one ligand against the protein.
///
/// The ligand's bounding box is computed once and feeds both the volume
/// estimate and the binding-site classifier. A ligand without atoms gets an
/// all-zero profile that keeps its ring count.
#[instrument(skip_all, name = "profile_task", fields(ligand = %ligand.name))]
pub fn profile_ligand(
    ligand: &Ligand,
    protein: &Protein,
    config: &PredictionConfig,
) -> LigandProfile {
    let Some(bounds) = LigandBounds::from_atoms(&ligand.atoms) else {
        warn!("Ligand has no atom records; using an all-zero structural profile.");
        return LigandProfile::empty(ligand.ring_count);
    };

    let unknown = unknown_atom_types(ligand);
    if !unknown.is_empty() {
        debug!(
            types = %unknown.join(", "),
            "Atom types without a van der Waals radius are treated as points."
        );
    }

    let volume = estimate_volume(
        &ligand.atoms,
        &bounds,
        config.accuracy,
        config.voxel_scheme,
    );
    let polar = count_polar_atoms(&ligand.atoms);
    let contacts = classify_contacts(&bounds, &ligand.atoms, protein);

    debug!(
        volume,
        rings = ligand.ring_count,
        nitrogen = polar.nitrogen,
        oxygen = polar.oxygen,
        contacts = contacts.total(),
        "Ligand profiled."
    );

    LigandProfile {
        volume,
        ring_count: ligand.ring_count,
        polar,
        contacts,
    }
}

/// Distinct atom types of `ligand` that have no van der Waals radius, in
/// first-seen order.
pub fn unknown_atom_types(ligand: &Ligand) -> Vec<&str> {
    ligand
        .atoms
        .iter()
        .map(|atom| atom.atom_type.as_str())
        .filter(|atom_type| !is_known_type(atom_type))
        .unique()
        .collect()
}
