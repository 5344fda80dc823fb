//! Three-tier configuration for the `predict` command.
//!
//! Values come from the command line first, then from an optional TOML file,
//! then from [`defaults::DefaultsConfig`].

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::{AppConfig, ScoreSource};
