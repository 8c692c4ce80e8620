//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::{ApiResponse, LanguageResponse, VoicesResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出音色目录与支持的语言
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<VoicesResponse>>, ApiError> {
    let result = state.list_voices_handler.handle(ListVoices)?;

    Ok(Json(ApiResponse::success(VoicesResponse {
        voices: result.voices,
        male: result.male,
        female: result.female,
        languages: result.languages.into_iter().map(LanguageResponse::from).collect(),
    })))
}
