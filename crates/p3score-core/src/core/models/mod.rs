//! # Molecular Models Module
//!
//! In-memory representation of the two input structures and of the per-ligand
//! feature records derived from them.
//!
//! ## Data Flow
//!
//! ```text
//! PDB  ──► Protein ─┐
//!                   ├─► LigandProfile ─┐
//! MOL2 ──► Ligand ──┘                  ├─► RawFeatures ──► regression
//! score log ──► ExternalScores ────────┘
//! ```
//!
//! Structures are immutable once parsed. A [`Protein`](protein::Protein) is
//! loaded once per run and shared read-only between all ligands.

pub mod atom;
pub mod features;
pub mod ligand;
pub mod protein;
