use crate::core::geometry::voxel::VoxelScheme;
use thiserror::Error;
use tracing::warn;

/// The accuracy range the reference model was calibrated on.
pub const NOMINAL_ACCURACY: (f64, f64) = (2.0, 3.0);

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Accuracy must be a finite positive number of grid intervals per Å (got {0})")]
    InvalidAccuracy(f64),
}

/// Settings for the structural feature computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionConfig {
    /// Voxel grid intervals per Ångström.
    pub accuracy: f64,
    pub voxel_scheme: VoxelScheme,
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    accuracy: Option<f64>,
    voxel_scheme: Option<VoxelScheme>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }
    pub fn voxel_scheme(mut self, scheme: VoxelScheme) -> Self {
        self.voxel_scheme = Some(scheme);
        self
    }

    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let accuracy = self
            .accuracy
            .ok_or(ConfigError::MissingParameter("accuracy"))?;
        if !accuracy.is_finite() || accuracy <= 0.0 {
            return Err(ConfigError::InvalidAccuracy(accuracy));
        }
        let (low, high) = NOMINAL_ACCURACY;
        if !(low..=high).contains(&accuracy) {
            warn!(
                accuracy,
                "Accuracy is outside the nominal range {low}-{high}; predictions may drift from the calibrated model."
            );
        }
        Ok(PredictionConfig {
            accuracy,
            voxel_scheme: self.voxel_scheme.unwrap_or_default(),
        })
    }
}
