//! Script Context - Entities

use serde::{Deserialize, Serialize};

use super::Gender;

/// 对白行 - 最小合成单位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// 说话角色名
    pub character: String,
    /// 对白文本
    pub dialogue: String,
    /// 语气提示，可包含 SSML 风格标签，如 `(shouting) <break time="0.5s"/>`
    #[serde(rename = "deliveryNote", alias = "delivery_note", default)]
    pub delivery_note: String,
    #[serde(default)]
    pub gender: Gender,
}

impl DialogueLine {
    pub fn new(
        character: impl Into<String>,
        dialogue: impl Into<String>,
        delivery_note: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            character: character.into(),
            dialogue: dialogue.into(),
            delivery_note: delivery_note.into(),
            gender,
        }
    }
}

/// 角色及其分配的音色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub voice: String,
}

impl Character {
    pub fn new(name: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            voice: voice.into(),
        }
    }
}

/// 按名称去重，保留首次出现的角色
pub fn distinct_characters(characters: &[Character]) -> Vec<&Character> {
    let mut seen: Vec<&Character> = Vec::with_capacity(characters.len());
    for character in characters {
        if !seen.iter().any(|c| c.name == character.name) {
            seen.push(character);
        }
    }
    seen
}

/// 按首次出现顺序列出对白中的角色名
pub fn speaker_names(dialogues: &[DialogueLine]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for line in dialogues {
        if !names.contains(&line.character.as_str()) {
            names.push(&line.character);
        }
    }
    names
}
