//! Script Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Script is empty")]
    EmptyScript,

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    #[error("Invalid emphasis keyword table: {0}")]
    InvalidKeywords(String),
}
