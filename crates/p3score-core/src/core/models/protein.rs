use super::atom::Atom;
use std::collections::HashSet;

/// A receptor structure as a flat, ordered atom list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Protein {
    atoms: Vec<Atom>,
}

impl Protein {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Number of distinct residue sequence identifiers.
    pub fn residue_count(&self) -> usize {
        self.atoms
            .iter()
            .filter_map(|atom| atom.residue.as_ref())
            .map(|residue| residue.seq_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn residue_count_groups_atoms_by_sequence_id() {
        let protein = Protein::new(vec![
            Atom::protein("N", "N", "ALA", "10", Point3::origin()),
            Atom::protein("CA", "C", "ALA", "10", Point3::origin()),
            Atom::protein("N", "N", "GLY", "11", Point3::origin()),
        ]);
        assert_eq!(protein.len(), 3);
        assert_eq!(protein.residue_count(), 2);
    }
}
