//! # Engine Module
//!
//! Per-ligand feature computation for affinity prediction.
//!
//! ## Overview
//!
//! The engine turns one parsed ligand plus the shared, read-only protein into
//! the structural part of its raw feature record: the voxel volume, the ring
//! and polar atom counts, and the classes of the protein residues the ligand
//! touches. Ligands are independent of each other, so workflows may profile
//! them concurrently.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - grid accuracy and voxel sampling scheme
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events
//! - **Error Handling** ([`error`]) - engine and workflow failures
//! - **Tasks** ([`tasks`]) - the ligand profile and the binding-site classifier

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
