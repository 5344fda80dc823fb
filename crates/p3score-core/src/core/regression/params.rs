use super::expansion::ExpansionError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// The model artifact compiled into the library.
pub const BUILTIN_MODEL_TOML: &str = include_str!("../../../data/p3score-v1.toml");

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid model artifact: {0}")]
    Invalid(String),
    #[error("Feature expansion error: {0}")]
    Expansion(#[from] ExpansionError),
    #[error(
        "Expansion produces {expanded} terms but the model carries {parameters} standardization entries"
    )]
    ExpansionMismatch { expanded: usize, parameters: usize },
}

/// Fitted constants of a standardized linear model over expanded features.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    /// Length of the raw feature record the model expects.
    pub raw_feature_count: usize,
    /// Multiplier converting a predicted pKd into a binding energy.
    pub binding_energy_factor: f64,
    /// Enumeration positions retained by the expansion.
    pub selection: Vec<usize>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    /// One weight per expanded term followed by the intercept.
    pub coefficients: Vec<f64>,
}

impl ModelArtifact {
    /// Parses and validates the embedded reference model.
    pub fn builtin() -> Result<Self, ModelError> {
        Self::from_toml_str(BUILTIN_MODEL_TOML, "<builtin>")
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let display = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: display.clone(),
            source: e,
        })?;
        Self::from_toml_str(&content, &display)
    }

    fn from_toml_str(content: &str, origin: &str) -> Result<Self, ModelError> {
        let artifact: Self = toml::from_str(content).map_err(|e| ModelError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Checks the internal consistency of the standardization tables.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::Invalid(format!(
                "mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.coefficients.len() != self.mean.len() + 1 {
            return Err(ModelError::Invalid(format!(
                "expected {} coefficients (one per term plus intercept), found {}",
                self.mean.len() + 1,
                self.coefficients.len()
            )));
        }
        if let Some(index) = self.scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(ModelError::Invalid(format!(
                "scale entry {index} must be finite and non-zero"
            )));
        }
        if !self.binding_energy_factor.is_finite() {
            return Err(ModelError::Invalid(
                "binding-energy-factor must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// The trailing coefficient.
    pub fn intercept(&self) -> f64 {
        self.coefficients.last().copied().unwrap_or(0.0)
    }
}
