use crate::cli::ModelCommands;
use crate::error::Result;
use p3score::core::regression::params::{BUILTIN_MODEL_TOML, ModelArtifact};
use p3score::core::regression::scoring::AffinityModel;
use std::path::Path;
use tracing::info;

pub fn run(command: ModelCommands) -> Result<()> {
    match command {
        ModelCommands::Show { model } => {
            let artifact = match &model {
                Some(path) => ModelArtifact::load(path)?,
                None => ModelArtifact::builtin()?,
            };
            let model = AffinityModel::new(artifact)?;
            print!("{}", describe(&model));
            Ok(())
        }
        ModelCommands::Export { output } => export(&output),
    }
}

fn describe(model: &AffinityModel) -> String {
    let artifact = model.artifact();
    format!(
        "Model:                 {} v{}\n\
         Raw features:          {}\n\
         Expanded terms:        {}\n\
         Intercept:             {}\n\
         Binding-energy factor: {}\n",
        artifact.name,
        artifact.version,
        model.raw_feature_count(),
        model.expanded_len(),
        artifact.intercept(),
        artifact.binding_energy_factor,
    )
}

fn export(output: &Path) -> Result<()> {
    info!("Exporting built-in model artifact to {:?}", output);
    std::fs::write(output, BUILTIN_MODEL_TOML)?;
    println!("Built-in model written to: {}", output.display());
    Ok(())
}
