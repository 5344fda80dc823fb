use crate::core::models::atom::Atom;
use phf::{Set, phf_set};

static NITROGEN_TYPES: Set<&'static str> = phf_set! {
    "N.4", "N.3", "N.2", "N.1", "N.ar", "N.am", "N.pl3",
};

static OXYGEN_TYPES: Set<&'static str> = phf_set! {
    "O.3", "O.2", "O.co2", "O.spc", "O.t3p",
};

/// Number of typed nitrogen and oxygen atoms in a ligand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolarCounts {
    pub nitrogen: u32,
    pub oxygen: u32,
}

/// Counts ligand atoms whose type tag is a known nitrogen or oxygen type.
///
/// Bare element tags (`"N"`, `"O"`) and every other type are ignored.
pub fn count_polar_atoms(atoms: &[Atom]) -> PolarCounts {
    atoms
        .iter()
        .fold(PolarCounts::default(), |mut counts, atom| {
            let tag = atom.atom_type.as_str();
            if NITROGEN_TYPES.contains(tag) {
                counts.nitrogen += 1;
            } else if OXYGEN_TYPES.contains(tag) {
                counts.oxygen += 1;
            }
            counts
        })
}
