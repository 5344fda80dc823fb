//! Per-ligand computations run by the prediction workflow.
//!
//! [`profile`] assembles the structural descriptors of one ligand;
//! [`binding_site`] classifies the protein residues it contacts.

pub mod binding_site;
pub mod profile;
