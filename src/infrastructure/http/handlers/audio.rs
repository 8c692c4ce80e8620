//! Audio HTTP Handlers

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateAudioCommand;
use crate::domain::audio::WavFile;
use crate::infrastructure::http::dto::GenerateAudioRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub const X_AUDIO_DURATION_MS: &str = "x-audio-duration-ms";
pub const X_SYNTHESIS_MODE: &str = "x-synthesis-mode";
pub const X_LINES_SKIPPED: &str = "x-lines-skipped";
pub const X_LINES_FAILED: &str = "x-lines-failed";

/// 生成整段对白音频，返回 WAV 附件
///
/// 客户端断开时 axum 丢弃该 future，剩余合成调用不再发起
pub async fn generate_audio(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateAudioRequest>,
) -> Result<Response, ApiError> {
    let result = state
        .generate_audio_handler
        .handle(GenerateAudioCommand {
            dialogues: req.dialogues,
            characters: req.characters,
        })
        .await?;

    let file_name = result.file_name();
    let duration_ms = result.wav.duration_ms();

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, WavFile::CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
            (
                HeaderName::from_static(X_AUDIO_DURATION_MS),
                duration_ms.to_string(),
            ),
            (
                HeaderName::from_static(X_SYNTHESIS_MODE),
                result.mode.as_str().to_string(),
            ),
            (
                HeaderName::from_static(X_LINES_SKIPPED),
                result.skipped_lines.len().to_string(),
            ),
            (
                HeaderName::from_static(X_LINES_FAILED),
                result.failed_lines.len().to_string(),
            ),
        ],
        result.wav.into_bytes(),
    )
        .into_response())
}
