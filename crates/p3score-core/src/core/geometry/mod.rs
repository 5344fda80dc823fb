//! Ligand bounding geometry and voxel-based volume estimation.
//!
//! [`bounds::LigandBounds`] is computed once per ligand and feeds both the
//! volume estimate and the binding-site search (its center and interaction
//! radius define the coarse protein shell).

pub mod bounds;
pub mod voxel;
