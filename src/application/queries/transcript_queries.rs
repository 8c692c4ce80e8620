//! Transcript Queries - 对白文本导出

use crate::domain::script::DialogueLine;

/// 导出对白文本查询
#[derive(Debug, Clone)]
pub struct ExportTranscriptQuery {
    pub dialogues: Vec<DialogueLine>,
}

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTranscriptResponse {
    pub content: String,
    pub file_name: String,
    pub content_type: String,
}
