//! Fake Script Analyzer - 离线剧本解析
//!
//! 识别 `NAME: (note) text` 形式的行，其余行（场景、动作描述）忽略。
//! 可用 `NAME [female]:` 标注性别

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::ports::{AnalyzerError, ExtractedScript, ScriptAnalyzerPort};
use crate::domain::script::{DialogueLine, Gender};

static DIALOGUE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^:\[\]()]+?)\s*(?:\[(\w+)\])?\s*:\s*(?:(\([^)]*\)))?\s*(.*)$")
        .expect("dialogue line pattern is valid")
});

/// Fake Script Analyzer
pub struct FakeScriptAnalyzer {
    language: String,
}

impl FakeScriptAnalyzer {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    fn parse_line(line: &str) -> Option<DialogueLine> {
        let caps = DIALOGUE_LINE.captures(line)?;
        let character = caps.get(1)?.as_str().trim();
        let dialogue = caps.get(4).map_or("", |m| m.as_str()).trim();
        if character.is_empty() || dialogue.is_empty() {
            return None;
        }

        Some(DialogueLine::new(
            character,
            dialogue,
            caps.get(3).map_or("", |m| m.as_str()),
            caps.get(2).map_or(Gender::Neutral, |m| Gender::parse(m.as_str())),
        ))
    }
}

impl Default for FakeScriptAnalyzer {
    fn default() -> Self {
        Self::new("en")
    }
}

#[async_trait]
impl ScriptAnalyzerPort for FakeScriptAnalyzer {
    async fn analyze(&self, script: &str) -> Result<ExtractedScript, AnalyzerError> {
        let dialogues: Vec<DialogueLine> = script.lines().filter_map(Self::parse_line).collect();

        tracing::debug!(
            lines = dialogues.len(),
            "FakeScriptAnalyzer: parsed dialogue lines"
        );

        Ok(ExtractedScript {
            language: self.language.clone(),
            dialogues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_script() {
        let script = "\
INT. KITCHEN - NIGHT

Anna [female]: (angrily) Where were you?
Ben: Out.
Ben walks away.
Anna [female]:
";
        let extracted = FakeScriptAnalyzer::default().analyze(script).await.unwrap();

        assert_eq!(extracted.language, "en");
        assert_eq!(
            extracted.dialogues,
            vec![
                DialogueLine::new("Anna", "Where were you?", "(angrily)", Gender::Female),
                DialogueLine::new("Ben", "Out.", "", Gender::Neutral),
            ]
        );
    }
}
