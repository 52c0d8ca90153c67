use std::path::PathBuf;
use thiserror::Error;
use topgen::core::models::template::TemplateLoadError;
use topgen::engine::error::EngineError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to load template '{path}': {source}", path = path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateLoadError,
    },

    #[error("Failed to write topology to '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit status for this failure. Usage errors reported by clap exit with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Argument(_) => 2,
            CliError::Engine(EngineError::InvalidChainLength(_)) => 3,
            CliError::Output { .. } | CliError::Io(_) => 4,
            CliError::Engine(EngineError::InternalConsistency(_)) => 5,
            CliError::Engine(EngineError::InvalidTemplate(_)) | CliError::Template { .. } => 6,
            CliError::Other(_) => 1,
        }
    }
}
