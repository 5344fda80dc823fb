//! # Core Module
//!
//! Stateless building blocks of the affinity predictor.
//!
//! - **Chemistry tables** ([`chem`]) - van der Waals radii, polar atom types and
//!   amino-acid classes
//! - **Molecular representation** ([`models`]) - atoms, ligands, proteins and the
//!   per-ligand feature records
//! - **Geometry** ([`geometry`]) - ligand bounding boxes and voxel volume estimation
//! - **File I/O** ([`io`]) - PDB and MOL2 readers, the external score log reader
//!   and the CSV report writer
//! - **Regression** ([`regression`]) - the model artifact, polynomial feature
//!   expansion and standardized linear scoring
//! - **Utilities** ([`utils`]) - shared numeric helpers

pub mod chem;
pub mod geometry;
pub mod io;
pub mod models;
pub mod regression;
pub mod utils;
