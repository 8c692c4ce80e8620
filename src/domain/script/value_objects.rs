//! Script Context - Value Objects

use serde::{Deserialize, Deserializer, Serialize};

/// 角色性别（用于音色池选择）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Neutral,
}

impl Gender {
    /// 宽松解析，未知取值视为 neutral
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Gender::parse(&raw))
    }
}

/// 支持的剧本语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    En,
    Ur,
    Es,
    Fr,
    De,
    Other,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 6] = [
        SupportedLanguage::En,
        SupportedLanguage::Ur,
        SupportedLanguage::Es,
        SupportedLanguage::Fr,
        SupportedLanguage::De,
        SupportedLanguage::Other,
    ];

    /// 将检测到的 ISO 639-1 代码归一化，不在列表中的归为 Other
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" => Self::En,
            "ur" => Self::Ur,
            "es" => Self::Es,
            "fr" => Self::Fr,
            "de" => Self::De,
            _ => Self::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ur => "ur",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Other => "other",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ur => "Urdu",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Other => "Other",
        }
    }

    /// 预置音色只针对英语优化
    pub fn is_recommended(&self) -> bool {
        matches!(self, Self::En)
    }
}

impl std::fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
