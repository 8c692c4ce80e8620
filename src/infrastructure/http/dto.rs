//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::script::{Character, DialogueLine, SupportedLanguage};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Script DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ExtractScriptRequest {
    pub script: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub code: &'static str,
    pub name: &'static str,
    pub recommended: bool,
}

impl From<SupportedLanguage> for LanguageResponse {
    fn from(language: SupportedLanguage) -> Self {
        Self {
            code: language.code(),
            name: language.name(),
            recommended: language.is_recommended(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub language: LanguageResponse,
    /// 剧本理解服务返回的原始语言代码
    pub detected_language: String,
    /// 非英语剧本，音色效果可能不佳
    pub language_warning: bool,
    pub dialogues: Vec<DialogueLine>,
    pub characters: Vec<Character>,
}

#[derive(Debug, Deserialize)]
pub struct AssignVoicesRequest {
    pub dialogues: Vec<DialogueLine>,
    /// 已有（或手动指定）的音色分配
    #[serde(default)]
    pub characters: Vec<Character>,
}

#[derive(Debug, Serialize)]
pub struct CharactersResponse {
    pub characters: Vec<Character>,
}

// ============================================================================
// Audio DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateAudioRequest {
    pub dialogues: Vec<DialogueLine>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

// ============================================================================
// Transcript DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub dialogues: Vec<DialogueLine>,
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<String>,
    pub male: Vec<String>,
    pub female: Vec<String>,
    pub languages: Vec<LanguageResponse>,
}
