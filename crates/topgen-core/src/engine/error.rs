use thiserror::Error;

use crate::core::models::chain::ChainLengthError;
use crate::core::models::template::TemplateError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Invalid chain length: {0}")]
    InvalidChainLength(#[from] ChainLengthError),

    #[error("Invalid monomer template: {0}")]
    InvalidTemplate(#[from] TemplateError),

    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
}
