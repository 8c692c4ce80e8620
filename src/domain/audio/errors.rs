//! Audio Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    /// base64 载荷格式错误
    #[error("Invalid base64 audio payload: {0}")]
    DecodeError(String),

    /// 拼接后长度与输入长度之和不一致（内部逻辑错误）
    #[error("PCM concatenation length mismatch: expected {expected} bytes, got {actual}")]
    ConcatenationLengthMismatch { expected: usize, actual: usize },

    /// PCM 字节数未按采样帧对齐，或超出 WAV 容器上限
    #[error("Cannot encode WAV: {0}")]
    EncodeError(String),

    /// 不是合法的 WAV 文件
    #[error("Invalid WAV data: {0}")]
    InvalidWav(String),
}
