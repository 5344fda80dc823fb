use p3score::core::geometry::voxel::VoxelScheme;

pub struct DefaultsConfig {
    pub accuracy: f64,
    pub voxel_scheme: VoxelScheme,
    pub xscore_bin: String,
    pub output: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            accuracy: 3.0,
            voxel_scheme: VoxelScheme::Uniform,
            xscore_bin: "xscore".to_string(),
            output: "predict_info.csv".to_string(),
        }
    }
}
