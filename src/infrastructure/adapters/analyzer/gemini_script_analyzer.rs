//! Gemini Script Analyzer - 调用 Gemini 理解剧本
//!
//! 实现 ScriptAnalyzerPort trait
//!
//! 请求 JSON 输出（responseMimeType + responseSchema），
//! 解析 candidates[0].content.parts[0].text

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::application::ports::{AnalyzerError, ExtractedScript, ScriptAnalyzerPort};
use crate::infrastructure::adapters::gemini::{
    GeminiClient, GeminiError, GenerateContentRequest, GenerationConfig,
};

impl From<GeminiError> for AnalyzerError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::NetworkError(msg) => AnalyzerError::NetworkError(msg),
            GeminiError::Timeout => AnalyzerError::Timeout,
            GeminiError::ServiceError(msg) => AnalyzerError::ServiceError(msg),
            GeminiError::InvalidResponse(msg) => AnalyzerError::InvalidResponse(msg),
        }
    }
}

const PROMPT_HEADER: &str = "\
Analyze the following script. Perform four tasks:
1. Identify the primary language of the script and return its two-letter ISO 639-1 code (e.g., \"en\" for English, \"ur\" for Urdu). If not clear, default to \"other\".
2. Extract all character dialogue, ignoring scene headings, action descriptions, etc.
3. For each line of dialogue, determine the character's likely gender (\"male\", \"female\", or \"neutral\") based on their name and context.
4. For each line, suggest a brief delivery note to guide TTS generation (e.g., \"(sadly)\", \"(shouting)\").

Return a single valid JSON object with two keys: \"language\" (a string for the language code) and \"dialogues\" (an array of objects, where each object has \"character\", \"dialogue\", \"deliveryNote\", and \"gender\" keys).

SCRIPT:
";

/// 结构化输出 schema
static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "language": {
                "type": "STRING",
                "description": "The detected two-letter ISO 639-1 language code of the script."
            },
            "dialogues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "character": { "type": "STRING", "description": "The name of the character speaking." },
                        "dialogue": { "type": "STRING", "description": "The line of dialogue spoken by the character." },
                        "deliveryNote": { "type": "STRING", "description": "A suggested delivery note for the TTS model, e.g., \"(shouting)\", \"(whispering)\"." },
                        "gender": { "type": "STRING", "description": "The detected gender of the character: \"male\", \"female\", or \"neutral\"." }
                    },
                    "required": ["character", "dialogue", "deliveryNote", "gender"]
                }
            }
        },
        "required": ["language", "dialogues"]
    })
});

/// Gemini 剧本分析客户端
pub struct GeminiScriptAnalyzer {
    client: GeminiClient,
    model: String,
}

impl GeminiScriptAnalyzer {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    fn build_request(script: &str) -> GenerateContentRequest {
        GenerateContentRequest::text(
            format!("{}{}", PROMPT_HEADER, script),
            GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(RESPONSE_SCHEMA.clone()),
                ..Default::default()
            },
        )
    }
}

/// 解析并校验模型返回的 JSON 文本
///
/// 要求 `language` 非空且 `dialogues` 为数组
pub(crate) fn parse_extracted(text: &str) -> Result<ExtractedScript, AnalyzerError> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| AnalyzerError::InvalidResponse(format!("Malformed JSON: {}", e)))?;

    let has_language = value
        .get("language")
        .and_then(Value::as_str)
        .is_some_and(|l| !l.trim().is_empty());
    let has_dialogues = value.get("dialogues").is_some_and(Value::is_array);
    if !has_language || !has_dialogues {
        return Err(AnalyzerError::InvalidResponse(
            "Invalid data structure received from API".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| AnalyzerError::InvalidResponse(format!("Invalid dialogue entry: {}", e)))
}

#[async_trait]
impl ScriptAnalyzerPort for GeminiScriptAnalyzer {
    async fn analyze(&self, script: &str) -> Result<ExtractedScript, AnalyzerError> {
        tracing::debug!(
            model = %self.model,
            script_len = script.len(),
            "Sending script analysis request"
        );

        let response = self
            .client
            .generate_content(&self.model, &Self::build_request(script))
            .await?;

        let text = response.first_text().ok_or_else(|| {
            AnalyzerError::InvalidResponse(format!(
                "No text in analysis response (finish reason: {})",
                response.finish_reason().unwrap_or("unknown")
            ))
        })?;

        parse_extracted(text)
    }
}
