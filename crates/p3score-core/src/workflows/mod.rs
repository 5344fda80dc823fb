//! # Workflows Module
//!
//! Top-level entry points that run a complete prediction from parsed inputs.
//!
//! ## Overview
//!
//! A workflow takes the protein, the ligands, the external score rows and a
//! validated model, checks that they belong together, profiles every ligand
//! and scores the assembled raw feature records. File handling stays with the
//! caller; see [`crate::core::io`] for the readers and the report writer.
//!
//! - **Prediction Workflow** ([`predict`]) - raw features and pKd per ligand

pub mod predict;
