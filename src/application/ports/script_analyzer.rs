//! Script Analyzer Port - 剧本理解服务抽象
//!
//! 输入原始剧本文本，输出语言代码与有序对白列表

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::script::DialogueLine;

/// 剧本分析错误
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 剧本分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedScript {
    /// 检测到的 ISO 639-1 语言代码
    pub language: String,
    pub dialogues: Vec<DialogueLine>,
}

/// Script Analyzer Port
#[async_trait]
pub trait ScriptAnalyzerPort: Send + Sync {
    async fn analyze(&self, script: &str) -> Result<ExtractedScript, AnalyzerError>;
}
