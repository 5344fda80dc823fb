//! # P3-Score Core Library
//!
//! Predicts protein-ligand binding affinity (a pKd-like value and a derived
//! binding energy) from a protein structure, a multi-molecule ligand file and
//! five per-ligand terms produced by an external empirical scoring program.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that parsing, geometry and the
//! regression model stay independent of one another.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `Ligand`,
//!   `Protein`), static chemistry tables, bounding geometry and voxel volume
//!   estimation, file readers/writers and the standardized linear model.
//!
//! - **[`engine`]: The Logic Core.** Configuration, progress reporting and the
//!   per-ligand tasks that turn parsed structures into raw feature records
//!   (volume, polarity, binding-site residue classes).
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together to
//!   score a whole batch of ligands against one protein.

pub mod core;
pub mod engine;
pub mod workflows;
