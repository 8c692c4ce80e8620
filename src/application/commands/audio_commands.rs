//! Audio Commands - 音频生成命令

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::audio::WavFile;
use crate::domain::script::{Character, DialogueLine, SkipReason, SynthesisMode};

/// 生成对白音频命令
#[derive(Debug, Clone)]
pub struct GenerateAudioCommand {
    pub dialogues: Vec<DialogueLine>,
    pub characters: Vec<Character>,
}

/// 未发起合成的行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub index: usize,
    pub character: String,
    pub reason: SkipReason,
}

/// 合成失败的行（不影响整体请求）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedLine {
    pub index: usize,
    pub character: String,
    pub error: String,
}

/// 生成音频响应
#[derive(Debug, Clone)]
pub struct GenerateAudioResponse {
    pub request_id: Uuid,
    pub wav: WavFile,
    pub mode: SynthesisMode,
    /// 参与拼接的 PCM 片段数
    pub segments: usize,
    pub skipped_lines: Vec<SkippedLine>,
    pub failed_lines: Vec<FailedLine>,
    pub generated_at: DateTime<Utc>,
}

impl GenerateAudioResponse {
    /// 下载文件名
    pub fn file_name(&self) -> String {
        format!(
            "dialogue-audio-{}.wav",
            self.generated_at.format("%Y%m%d-%H%M%S")
        )
    }
}
