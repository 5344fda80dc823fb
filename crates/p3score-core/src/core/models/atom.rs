use crate::core::chem::radii;
use nalgebra::Point3;

/// Identifies the protein residue an atom belongs to.
///
/// `seq_id` keeps the raw text of the residue sequence field, insertion code
/// included, and is the key used to de-duplicate contacted residues.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueTag {
    /// Three-letter residue name (e.g., "ALA", "HOH").
    pub name: String,
    /// Residue sequence identifier as written in the source file (e.g., "10", "52A").
    pub seq_id: String,
}

/// A single atom of either input structure.
///
/// Ligand atoms carry a SYBYL-style type tag (e.g., "C.ar", "N.am") that keys
/// the van der Waals radius table and the polarity sets. Protein atoms carry
/// their residue tag and, when the record provides one, an element symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name (e.g., "CA", "C1").
    pub name: String,
    /// The atom type tag used for radius lookup (may be empty for protein atoms).
    pub atom_type: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    /// The owning residue, present for protein atoms only.
    pub residue: Option<ResidueTag>,
}

impl Atom {
    /// Creates a ligand atom.
    pub fn ligand(name: &str, atom_type: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            atom_type: atom_type.to_string(),
            position,
            residue: None,
        }
    }

    /// Creates a protein atom belonging to the residue `residue_name`/`seq_id`.
    pub fn protein(
        name: &str,
        element: &str,
        residue_name: &str,
        seq_id: &str,
        position: Point3<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            atom_type: element.to_string(),
            position,
            residue: Some(ResidueTag {
                name: residue_name.to_string(),
                seq_id: seq_id.to_string(),
            }),
        }
    }

    /// The van der Waals radius of this atom's type tag, `0.0` when unknown.
    #[inline]
    pub fn vdw_radius(&self) -> f64 {
        radii::vdw_radius(&self.atom_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ligand_atom_has_no_residue_and_resolves_radius() {
        let atom = Atom::ligand("C1", "C.ar", Point3::new(1.0, 2.0, 3.0));
        assert!(atom.residue.is_none());
        assert_eq!(atom.vdw_radius(), 1.77);
    }

    #[test]
    fn protein_atom_keeps_its_residue_tag() {
        let atom = Atom::protein("CA", "C", "ALA", "10", Point3::origin());
        let residue = atom.residue.as_ref().unwrap();
        assert_eq!(residue.name, "ALA");
        assert_eq!(residue.seq_id, "10");
        assert_eq!(atom.atom_type, "C");
    }
}
