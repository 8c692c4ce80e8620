//! Voice Queries

/// 列出音色目录与支持的语言
#[derive(Debug, Clone)]
pub struct ListVoices;
