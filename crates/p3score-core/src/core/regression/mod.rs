//! The standardized polynomial linear model that turns a raw feature record
//! into a predicted affinity.
//!
//! [`params::ModelArtifact`] holds the fitted constants, [`expansion`] builds
//! the selected polynomial terms, and [`scoring::AffinityModel`] combines the
//! two into a validated predictor.

pub mod expansion;
pub mod params;
pub mod scoring;
