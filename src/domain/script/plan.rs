//! Synthesis Plan - 合成调用扇出策略
//!
//! - 恰好 2 个不同角色：一次多说话人合成，携带完整对白
//! - 其余情况：逐行单说话人合成，跳过无可朗读内容或无音色的行

use serde::Serialize;

use super::emphasis::{escape_xml, is_speakable, DeliveryNote, EmphasisClassifier};
use super::entities::distinct_characters;
use super::{Character, DialogueLine};

/// 多说话人合成要求的角色数
pub const MULTI_SPEAKER_CHARACTER_COUNT: usize = 2;

/// 合成模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisMode {
    MultiSpeaker,
    PerLine,
}

impl SynthesisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisMode::MultiSpeaker => "multi_speaker",
            SynthesisMode::PerLine => "per_line",
        }
    }
}

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// 空白 / 省略号 / 纯标点
    Unspeakable,
    /// 角色没有分配音色
    MissingVoice,
}

/// 单行的处理方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Synthesize { utterance: String, voice: String },
    Skip(SkipReason),
}

/// 逐行计划中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLine {
    /// 在原始对白中的位置
    pub index: usize,
    pub character: String,
    pub action: LineAction,
}

/// 合成计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisPlan {
    MultiSpeaker {
        transcript: String,
        speakers: Vec<Character>,
    },
    PerLine(Vec<PlannedLine>),
}

impl SynthesisPlan {
    /// 根据不同角色数量决定扇出方式
    pub fn build(
        dialogues: &[DialogueLine],
        characters: &[Character],
        classifier: &EmphasisClassifier,
    ) -> Self {
        let distinct = distinct_characters(characters);

        if distinct.len() == MULTI_SPEAKER_CHARACTER_COUNT {
            let transcript = dialogues
                .iter()
                .map(|line| {
                    let note = classifier.parse_note(&line.delivery_note);
                    format!(
                        "{}: {}",
                        line.character,
                        render_emphasis(&note, &line.dialogue)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            return SynthesisPlan::MultiSpeaker {
                transcript,
                speakers: distinct.into_iter().cloned().collect(),
            };
        }

        let lines = dialogues
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let action = match characters.iter().find(|c| c.name == line.character) {
                    None => LineAction::Skip(SkipReason::MissingVoice),
                    Some(_) if !is_speakable(&line.dialogue) => {
                        LineAction::Skip(SkipReason::Unspeakable)
                    }
                    Some(character) => {
                        let note = classifier.parse_note(&line.delivery_note);
                        LineAction::Synthesize {
                            utterance: format!(
                                "<speak>{}</speak>",
                                render_emphasis(&note, line.dialogue.trim())
                            ),
                            voice: character.voice.clone(),
                        }
                    }
                };
                PlannedLine {
                    index,
                    character: line.character.clone(),
                    action,
                }
            })
            .collect();

        SynthesisPlan::PerLine(lines)
    }

    pub fn mode(&self) -> SynthesisMode {
        match self {
            SynthesisPlan::MultiSpeaker { .. } => SynthesisMode::MultiSpeaker,
            SynthesisPlan::PerLine(_) => SynthesisMode::PerLine,
        }
    }

    /// 计划发起的合成调用数
    pub fn call_count(&self) -> usize {
        match self {
            SynthesisPlan::MultiSpeaker { .. } => 1,
            SynthesisPlan::PerLine(lines) => lines
                .iter()
                .filter(|l| matches!(l.action, LineAction::Synthesize { .. }))
                .count(),
        }
    }
}

/// `<emphasis level="..">{tags} {text}</emphasis>`
fn render_emphasis(note: &DeliveryNote, text: &str) -> String {
    format!(
        "<emphasis level=\"{}\">{} {}</emphasis>",
        note.level,
        note.markup,
        escape_xml(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::{EmphasisKeywords, Gender};

    fn classifier() -> EmphasisClassifier {
        EmphasisClassifier::new(&EmphasisKeywords::default()).unwrap()
    }

    fn line(name: &str, text: &str, note: &str) -> DialogueLine {
        DialogueLine::new(name, text, note, Gender::Neutral)
    }

    #[test]
    fn test_two_characters_use_one_multi_speaker_call() {
        let dialogues = vec![
            line("ANNA", "Where were you?", "(shouting angrily)"),
            line("BOB", "Out & about.", ""),
            line("ANNA", "...", "(sigh)"),
        ];
        let characters = vec![Character::new("ANNA", "Kore"), Character::new("BOB", "Puck")];

        let plan = SynthesisPlan::build(&dialogues, &characters, &classifier());
        assert_eq!(plan.mode(), SynthesisMode::MultiSpeaker);
        assert_eq!(plan.call_count(), 1);

        match plan {
            SynthesisPlan::MultiSpeaker {
                transcript,
                speakers,
            } => {
                assert_eq!(
                    transcript,
                    "ANNA: <emphasis level=\"strong\"> Where were you?</emphasis>\n\
                     BOB: <emphasis level=\"moderate\"> Out &amp; about.</emphasis>\n\
                     ANNA: <emphasis level=\"reduced\"> ...</emphasis>"
                );
                assert_eq!(speakers, characters);
            }
            other => panic!("unexpected plan: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_character_entries_count_once() {
        let dialogues = vec![line("A", "hi", ""), line("B", "yo", "")];
        let characters = vec![
            Character::new("A", "Puck"),
            Character::new("B", "Kore"),
            Character::new("A", "Fenrir"),
        ];

        match SynthesisPlan::build(&dialogues, &characters, &classifier()) {
            SynthesisPlan::MultiSpeaker { speakers, .. } => {
                assert_eq!(
                    speakers,
                    vec![Character::new("A", "Puck"), Character::new("B", "Kore")]
                );
            }
            other => panic!("unexpected plan: {:?}", other),
        }
    }

    #[test]
    fn test_three_characters_fan_out_per_line() {
        let dialogues = vec![
            line("A", " One. ", "<break time=\"1s\"/> (softly)"),
            line("B", "…", ""),
            line("C", "Three", ""),
            line("D", "Four", ""),
            line("A", "Five", "(yelling)"),
        ];
        let characters = vec![
            Character::new("A", "Puck"),
            Character::new("B", "Kore"),
            Character::new("C", "Zephyr"),
        ];

        let plan = SynthesisPlan::build(&dialogues, &characters, &classifier());
        assert_eq!(plan.mode(), SynthesisMode::PerLine);
        assert_eq!(plan.call_count(), 3);

        let lines = match plan {
            SynthesisPlan::PerLine(lines) => lines,
            other => panic!("unexpected plan: {:?}", other),
        };
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0].action,
            LineAction::Synthesize {
                utterance: "<speak><emphasis level=\"reduced\"><break time=\"1s\"/> One.</emphasis></speak>"
                    .to_string(),
                voice: "Puck".to_string(),
            }
        );
        assert_eq!(lines[1].action, LineAction::Skip(SkipReason::Unspeakable));
        assert_eq!(lines[3].action, LineAction::Skip(SkipReason::MissingVoice));
        assert_eq!(lines[4].index, 4);
        assert!(matches!(
            &lines[4].action,
            LineAction::Synthesize { utterance, .. } if utterance.contains("level=\"strong\"")
        ));
    }

    #[test]
    fn test_single_character_is_per_line() {
        let dialogues = vec![line("A", "hi", ""), line("A", "again", "")];
        let characters = vec![Character::new("A", "Puck")];

        let plan = SynthesisPlan::build(&dialogues, &characters, &classifier());
        assert_eq!(plan.mode(), SynthesisMode::PerLine);
        assert_eq!(plan.call_count(), 2);
    }

    #[test]
    fn test_no_characters_skips_every_line() {
        let dialogues = vec![line("A", "hi", "")];
        let plan = SynthesisPlan::build(&dialogues, &[], &classifier());
        assert_eq!(plan.mode(), SynthesisMode::PerLine);
        assert_eq!(plan.call_count(), 0);
    }
}
