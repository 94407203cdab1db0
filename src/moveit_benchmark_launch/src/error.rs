//! Error types for the moveit_benchmark_launch builder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("YAML parse error in {path}: {message}")]
    YamlErrorWithContext { path: String, message: String },

    #[error("Expected a mapping in {path}, found {found}")]
    NotAMapping { path: String, found: &'static str },

    #[error("Invalid output target '{0}' (expected screen, log or both)")]
    InvalidOutput(String),

    #[error("Record serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
