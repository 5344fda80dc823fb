use super::expansion::{ExpansionError, FeatureExpander};
use super::params::{ModelArtifact, ModelError};
use crate::core::utils::rounding::round_to;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Cannot expand raw features: {0}")]
    Expansion(#[from] ExpansionError),
}

/// A validated standardized linear model over expanded features.
///
/// The prediction is `Σ ((x[i] - mean[i]) / scale[i]) · coef[i] + intercept`,
/// accumulated in index order with the intercept added last, then rounded to
/// 4 decimals.
#[derive(Debug, Clone)]
pub struct AffinityModel {
    artifact: ModelArtifact,
    expander: FeatureExpander,
}

impl AffinityModel {
    /// Builds the expander for `artifact` and checks that its output matches
    /// the standardization tables.
    pub fn new(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        let expander = FeatureExpander::new(&artifact.selection, artifact.raw_feature_count)?;
        if expander.output_len() != artifact.mean.len() {
            return Err(ModelError::ExpansionMismatch {
                expanded: expander.output_len(),
                parameters: artifact.mean.len(),
            });
        }
        Ok(Self { artifact, expander })
    }

    pub fn builtin() -> Result<Self, ModelError> {
        Self::new(ModelArtifact::builtin()?)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn raw_feature_count(&self) -> usize {
        self.expander.raw_count()
    }

    pub fn expanded_len(&self) -> usize {
        self.expander.output_len()
    }

    /// Predicts pKd (-log Kd) for one raw feature record.
    pub fn predict(&self, raw: &[f64]) -> Result<f64, ScoringError> {
        let expanded = self.expander.expand(raw)?;
        let a = &self.artifact;
        let mut sum = 0.0;
        for (i, x) in expanded.iter().enumerate() {
            sum += ((x - a.mean[i]) / a.scale[i]) * a.coefficients[i];
        }
        sum += a.intercept();
        trace!(raw_sum = sum, "Linear model evaluated.");
        Ok(round_to(sum, 4))
    }

    /// Converts a predicted pKd into a binding energy, rounded to 4 decimals.
    pub fn binding_energy(&self, pkd: f64) -> f64 {
        round_to(pkd * self.artifact.binding_energy_factor, 4)
    }
}
