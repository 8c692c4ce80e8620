//! Delivery Note - 语气提示解析
//!
//! 语气提示由两部分组成:
//! - 标记标签（`<...>`），原样透传给合成服务
//! - 描述文本，去掉标签后按关键词表归类为三档强调

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ScriptError;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid markup regex"));
static UNSPEAKABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\p{P}…]*$").expect("valid unspeakable regex"));

/// 强调级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisLevel {
    Strong,
    Moderate,
    Reduced,
}

impl EmphasisLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmphasisLevel::Strong => "strong",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Reduced => "reduced",
        }
    }
}

impl std::fmt::Display for EmphasisLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 语气关键词表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisKeywords {
    pub strong: Vec<String>,
    pub reduced: Vec<String>,
}

impl Default for EmphasisKeywords {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            strong: words(&["shout", "yell", "loud", "angry", "excited", "emphatic", "strong"]),
            reduced: words(&["whisper", "sad", "soft", "quiet", "sigh", "reduced"]),
        }
    }
}

/// 语气分类器
///
/// 关键词匹配单词开头，`shouting` 命中 `shout`；strong 优先于 reduced
#[derive(Debug, Clone)]
pub struct EmphasisClassifier {
    strong: Option<Regex>,
    reduced: Option<Regex>,
}

impl EmphasisClassifier {
    pub fn new(keywords: &EmphasisKeywords) -> Result<Self, ScriptError> {
        Ok(Self {
            strong: Self::compile(&keywords.strong)?,
            reduced: Self::compile(&keywords.reduced)?,
        })
    }

    fn compile(words: &[String]) -> Result<Option<Regex>, ScriptError> {
        let alternatives: Vec<String> = words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();

        if alternatives.is_empty() {
            return Ok(None);
        }

        let pattern = format!(r"\b(?:{})", alternatives.join("|"));
        Regex::new(&pattern)
            .map(Some)
            .map_err(|e| ScriptError::InvalidKeywords(e.to_string()))
    }

    /// 对描述文本归类（调用方负责先去掉标签）
    pub fn classify(&self, descriptive_note: &str) -> EmphasisLevel {
        let lower = descriptive_note.to_lowercase();
        if self.strong.as_ref().is_some_and(|re| re.is_match(&lower)) {
            return EmphasisLevel::Strong;
        }
        if self.reduced.as_ref().is_some_and(|re| re.is_match(&lower)) {
            return EmphasisLevel::Reduced;
        }
        EmphasisLevel::Moderate
    }

    /// 解析完整语气提示
    pub fn parse_note(&self, note: &str) -> DeliveryNote {
        let markup = extract_markup(note);
        let descriptive = strip_markup(note);
        let level = self.classify(&descriptive);
        DeliveryNote {
            level,
            markup,
            descriptive,
        }
    }
}

/// 解析后的语气提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryNote {
    pub level: EmphasisLevel,
    /// 以空格拼接的标记标签
    pub markup: String,
    /// 去掉标签后的描述文本
    pub descriptive: String,
}

/// 提取所有标记标签，以单个空格拼接
pub fn extract_markup(note: &str) -> String {
    MARKUP_TAG
        .find_iter(note)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 去掉所有标记标签
pub fn strip_markup(note: &str) -> String {
    MARKUP_TAG.replace_all(note, "").trim().to_string()
}

/// XML 转义
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 是否有可朗读的内容
///
/// 空白、省略号、任意文字的标点组成的行不发起合成
pub fn is_speakable(text: &str) -> bool {
    !UNSPEAKABLE.is_match(text.trim())
}
