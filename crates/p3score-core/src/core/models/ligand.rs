use super::atom::Atom;

/// One molecule record of a ligand file.
#[derive(Debug, Clone, PartialEq)]
pub struct Ligand {
    /// Molecule name, the first line of the molecule header.
    pub name: String,
    /// Atom count declared in the molecule header.
    pub declared_atom_count: usize,
    /// Ring count derived from the header counts (`bonds - atoms + 1`).
    pub ring_count: i64,
    /// Parsed atoms, in file order.
    pub atoms: Vec<Atom>,
}

impl Ligand {
    pub fn new(name: &str, declared_atom_count: usize, declared_bond_count: usize) -> Self {
        Self {
            name: name.to_string(),
            declared_atom_count,
            ring_count: ring_count(declared_atom_count, declared_bond_count),
            atoms: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Cycle rank of the molecular graph from its header counts.
///
/// Negative for fragmented records, which is kept as-is.
pub fn ring_count(atom_count: usize, bond_count: usize) -> i64 {
    bond_count as i64 - atom_count as i64 + 1
}
