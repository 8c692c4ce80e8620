//! Transcript HTTP Handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::ExportTranscriptQuery;
use crate::infrastructure::http::dto::TranscriptRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 导出纯文本对白（下载附件）
pub async fn export_transcript(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranscriptRequest>,
) -> Result<Response, ApiError> {
    let result = state
        .export_transcript_handler
        .handle(ExportTranscriptQuery {
            dialogues: req.dialogues,
        })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, result.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", result.file_name),
            ),
        ],
        result.content,
    )
        .into_response())
}
