//! Voice Assignment - 角色音色分配
//!
//! 规则:
//! - 按角色首次出现顺序处理
//! - 角色性别取其第一句对白的性别
//! - female 使用女声池，其余（male / neutral）使用男声池，组内轮询
//! - 已有分配的角色保留原音色
//! - 音色池为空时该组角色不分配音色

use serde::{Deserialize, Serialize};

use super::entities::speaker_names;
use super::{Character, DialogueLine, Gender, ScriptError};

/// 预置音色目录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceCatalogue {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

impl Default for VoiceCatalogue {
    fn default() -> Self {
        Self {
            male: vec!["Puck".to_string(), "Charon".to_string(), "Fenrir".to_string()],
            female: vec!["Kore".to_string(), "Zephyr".to_string()],
        }
    }
}

impl VoiceCatalogue {
    /// 全部音色（排序去重）
    pub fn all(&self) -> Vec<String> {
        let mut voices: Vec<String> = self.male.iter().chain(&self.female).cloned().collect();
        voices.sort();
        voices.dedup();
        voices
    }

    pub fn contains(&self, voice: &str) -> bool {
        self.male.iter().chain(&self.female).any(|v| v == voice)
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }

    fn pool_for(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Female => &self.female,
            Gender::Male | Gender::Neutral => &self.male,
        }
    }

    /// 校验手动指定的音色均在目录中
    ///
    /// 空音色视为未指定，分配时回落到音色池
    pub fn validate(&self, characters: &[Character]) -> Result<(), ScriptError> {
        match characters
            .iter()
            .find(|c| !c.voice.is_empty() && !self.contains(&c.voice))
        {
            Some(c) => Err(ScriptError::UnknownVoice(c.voice.clone())),
            None => Ok(()),
        }
    }

    /// 为对白中的角色分配音色
    pub fn assign(&self, dialogues: &[DialogueLine], existing: &[Character]) -> Vec<Character> {
        let names = speaker_names(dialogues);
        let gender_of = |name: &str| {
            dialogues
                .iter()
                .find(|d| d.character == name)
                .map(|d| d.gender)
                .unwrap_or_default()
        };

        let mut female_index = 0usize;
        let mut male_index = 0usize;
        let mut assigned = Vec::with_capacity(names.len());

        for name in names {
            let gender = gender_of(name);
            let pool = self.pool_for(gender);
            let index = if gender == Gender::Female {
                &mut female_index
            } else {
                &mut male_index
            };
            let position = *index;
            *index += 1;

            if pool.is_empty() {
                tracing::debug!(character = %name, gender = gender.as_str(), "Voice pool empty, character left unassigned");
                continue;
            }

            let voice = existing
                .iter()
                .find(|c| c.name == name && !c.voice.is_empty())
                .map(|c| c.voice.clone())
                .unwrap_or_else(|| pool[position % pool.len()].clone());

            assigned.push(Character::new(name, voice));
        }

        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, gender: Gender) -> DialogueLine {
        DialogueLine::new(name, "text", "", gender)
    }

    #[test]
    fn test_catalogue_is_sorted() {
        let catalogue = VoiceCatalogue::default();
        assert_eq!(
            catalogue.all(),
            vec!["Charon", "Fenrir", "Kore", "Puck", "Zephyr"]
        );
    }

    #[test]
    fn test_round_robin_by_gender_group() {
        let catalogue = VoiceCatalogue::default();
        let dialogues = vec![
            line("ANNA", Gender::Female),
            line("BOB", Gender::Male),
            line("CLAIRE", Gender::Female),
            line("ROBOT", Gender::Neutral),
            line("DANA", Gender::Female),
            line("ANNA", Gender::Male),
        ];

        let assigned = catalogue.assign(&dialogues, &[]);
        assert_eq!(
            assigned,
            vec![
                Character::new("ANNA", "Kore"),
                Character::new("BOB", "Puck"),
                Character::new("CLAIRE", "Zephyr"),
                Character::new("ROBOT", "Charon"),
                Character::new("DANA", "Kore"),
            ]
        );
    }

    #[test]
    fn test_existing_assignment_is_kept() {
        let catalogue = VoiceCatalogue::default();
        let dialogues = vec![line("A", Gender::Male), line("B", Gender::Male)];
        let existing = vec![Character::new("B", "Zephyr")];

        let assigned = catalogue.assign(&dialogues, &existing);
        assert_eq!(assigned[0], Character::new("A", "Puck"));
        assert_eq!(assigned[1], Character::new("B", "Zephyr"));
    }

    #[test]
    fn test_empty_pool_skips_group() {
        let catalogue = VoiceCatalogue {
            male: vec!["Puck".to_string()],
            female: vec![],
        };
        let dialogues = vec![line("A", Gender::Female), line("B", Gender::Male)];

        let assigned = catalogue.assign(&dialogues, &[]);
        assert_eq!(assigned, vec![Character::new("B", "Puck")]);
    }

    #[test]
    fn test_validate_overrides() {
        let catalogue = VoiceCatalogue::default();
        assert!(catalogue.validate(&[Character::new("A", "Kore")]).is_ok());
        assert_eq!(
            catalogue.validate(&[Character::new("A", "Alloy")]),
            Err(ScriptError::UnknownVoice("Alloy".to_string()))
        );
        assert!(catalogue.validate(&[Character::new("A", "")]).is_ok());
    }
}
