//! Audio Command Handlers
//!
//! 合成调用严格串行：每行等待上一行返回后再发起

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::application::commands::audio_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesisPort, SynthesisError, SynthesisRequest};
use crate::domain::audio::{
    concatenate, decode_payload, encode_wav, AudioSpec, PcmBuffer, RawAudioPayload,
};
use crate::domain::script::{EmphasisClassifier, LineAction, PlannedLine, SynthesisPlan};

/// GenerateAudio Handler - 生成整段对白音频
pub struct GenerateAudioHandler {
    synthesis: Arc<dyn SpeechSynthesisPort>,
    classifier: Arc<EmphasisClassifier>,
    spec: AudioSpec,
}

/// 逐行合成的中间结果
struct PerLineOutcome {
    segments: Vec<PcmBuffer>,
    skipped: Vec<SkippedLine>,
    failed: Vec<FailedLine>,
}

impl GenerateAudioHandler {
    pub fn new(
        synthesis: Arc<dyn SpeechSynthesisPort>,
        classifier: Arc<EmphasisClassifier>,
        spec: AudioSpec,
    ) -> Self {
        Self {
            synthesis,
            classifier,
            spec,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateAudioCommand,
    ) -> Result<GenerateAudioResponse, ApplicationError> {
        if cmd.dialogues.is_empty() {
            return Err(ApplicationError::validation("No dialogue to synthesize"));
        }

        let request_id = Uuid::new_v4();
        let plan = SynthesisPlan::build(&cmd.dialogues, &cmd.characters, &self.classifier);
        let mode = plan.mode();

        tracing::info!(
            request_id = %request_id,
            mode = mode.as_str(),
            lines = cmd.dialogues.len(),
            planned_calls = plan.call_count(),
            "Generating dialogue audio"
        );

        let (pcm, segments, skipped_lines, failed_lines) = match plan {
            SynthesisPlan::MultiSpeaker {
                transcript,
                speakers,
            } => {
                let payload = self
                    .call(SynthesisRequest::MultiSpeaker {
                        transcript,
                        speakers,
                    })
                    .await
                    .map_err(|e| {
                        tracing::error!(request_id = %request_id, error = %e, "Multi-speaker synthesis failed");
                        ApplicationError::ExternalServiceError(format!(
                            "Multi-speaker synthesis failed: {}",
                            e
                        ))
                    })?;
                (decode_payload(&payload)?, 1, Vec::new(), Vec::new())
            }
            SynthesisPlan::PerLine(lines) => {
                let outcome = self.synthesize_lines(request_id, lines).await?;
                let count = outcome.segments.len();
                let pcm = concatenate(&outcome.segments)?;
                (pcm, count, outcome.skipped, outcome.failed)
            }
        };

        let wav = encode_wav(&pcm, &self.spec)?;

        tracing::info!(
            request_id = %request_id,
            segments = segments,
            skipped = skipped_lines.len(),
            failed = failed_lines.len(),
            pcm_bytes = pcm.len(),
            duration_ms = wav.duration_ms(),
            "Dialogue audio ready"
        );

        Ok(GenerateAudioResponse {
            request_id,
            wav,
            mode,
            segments,
            skipped_lines,
            failed_lines,
            generated_at: Utc::now(),
        })
    }

    /// 单次合成调用，空白载荷视为没有音频
    async fn call(&self, request: SynthesisRequest) -> Result<RawAudioPayload, SynthesisError> {
        let payload = self.synthesis.synthesize(request).await?;
        if payload.is_blank() {
            return Err(SynthesisError::EmptyAudio);
        }
        Ok(payload)
    }

    /// 逐行合成
    ///
    /// 单行失败只记录并跳过；全部失败时返回 AllLinesFailed；
    /// 载荷解码失败直接中止
    async fn synthesize_lines(
        &self,
        request_id: Uuid,
        lines: Vec<PlannedLine>,
    ) -> Result<PerLineOutcome, ApplicationError> {
        let mut outcome = PerLineOutcome {
            segments: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        };
        let mut attempted = 0usize;

        for line in lines {
            let (utterance, voice) = match line.action {
                LineAction::Skip(reason) => {
                    tracing::warn!(
                        request_id = %request_id,
                        index = line.index,
                        character = %line.character,
                        reason = ?reason,
                        "Skipping dialogue line"
                    );
                    outcome.skipped.push(SkippedLine {
                        index: line.index,
                        character: line.character,
                        reason,
                    });
                    continue;
                }
                LineAction::Synthesize { utterance, voice } => (utterance, voice),
            };

            attempted += 1;
            tracing::debug!(
                request_id = %request_id,
                index = line.index,
                voice = %voice,
                text_len = utterance.len(),
                "Synthesizing dialogue line"
            );

            match self
                .call(SynthesisRequest::SingleSpeaker { utterance, voice })
                .await
            {
                Ok(payload) => outcome.segments.push(decode_payload(&payload)?),
                Err(e) => {
                    tracing::warn!(
                        request_id = %request_id,
                        index = line.index,
                        character = %line.character,
                        error = %e,
                        "Dialogue line synthesis failed, excluding from output"
                    );
                    outcome.failed.push(FailedLine {
                        index: line.index,
                        character: line.character,
                        error: e.to_string(),
                    });
                }
            }
        }

        if outcome.segments.is_empty() {
            tracing::error!(
                request_id = %request_id,
                attempted = attempted,
                skipped = outcome.skipped.len(),
                "No dialogue line produced audio"
            );
            return Err(ApplicationError::all_lines_failed(attempted));
        }

        Ok(outcome)
    }
}
