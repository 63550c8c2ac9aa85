use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

use restwise_core::{Config, LinearModel};

#[derive(Subcommand)]
pub enum ModelAction {
    /// Show the active model artifact
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON artifact file
    Check {
        /// Path to the artifact file
        path: PathBuf,
    },
}

#[derive(Serialize)]
struct ModelInfo {
    source: String,
    artifact: LinearModel,
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Info { json } => {
            let config = Config::load()?;
            let (artifact, source) = match &config.model.artifact_path {
                Some(path) => (LinearModel::load(path)?, path.display().to_string()),
                None => (LinearModel::bundled(), "bundled".to_string()),
            };
            if json {
                let info = ModelInfo { source, artifact };
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("source: {source}");
                println!("version: {}", artifact.version);
                println!("features: {}", artifact.feature_names.join(", "));
            }
        }
        ModelAction::Check { path } => match LinearModel::load(&path) {
            Ok(artifact) => {
                println!(
                    "ok: {} ({} features)",
                    artifact.version,
                    artifact.feature_names.len()
                );
            }
            Err(e) => {
                eprintln!("invalid artifact: {e}");
                std::process::exit(1);
            }
        },
    }
    Ok(())
}
