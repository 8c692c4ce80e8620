//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{AnalyzerError, SynthesisError};
use crate::domain::audio::AudioError;
use crate::domain::script::ScriptError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 逐行合成全部失败，没有任何音频可用
    #[error("{0}")]
    AllLinesFailed(String),

    /// 解码 / 拼接 / 封装错误
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 全部对白行合成失败
    pub fn all_lines_failed(attempted: usize) -> Self {
        Self::AllLinesFailed(format!(
            "Audio generation failed for all dialogue lines ({} attempted). \
             Please check if the script's language is supported by the selected voices.",
            attempted
        ))
    }
}

impl From<ScriptError> for ApplicationError {
    fn from(err: ScriptError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<AnalyzerError> for ApplicationError {
    fn from(err: AnalyzerError) -> Self {
        Self::ExternalServiceError(format!(
            "Failed to extract dialogue from the script: {}",
            err
        ))
    }
}
