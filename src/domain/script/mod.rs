//! Script Context - 剧本对白限界上下文
//!
//! 职责:
//! - 对白行与角色
//! - 语气提示解析与强调分级
//! - 音色分配
//! - 合成扇出计划
//! - 对白文本导出

mod emphasis;
mod entities;
mod errors;
mod plan;
mod transcript;
mod value_objects;
mod voices;

pub use emphasis::{
    escape_xml, extract_markup, is_speakable, strip_markup, DeliveryNote, EmphasisClassifier,
    EmphasisKeywords, EmphasisLevel,
};
pub use entities::{distinct_characters, speaker_names, Character, DialogueLine};
pub use errors::ScriptError;
pub use plan::{
    LineAction, PlannedLine, SkipReason, SynthesisMode, SynthesisPlan,
    MULTI_SPEAKER_CHARACTER_COUNT,
};
pub use transcript::{render_transcript, TRANSCRIPT_FILE_NAME};
pub use value_objects::{Gender, SupportedLanguage};
pub use voices::VoiceCatalogue;
