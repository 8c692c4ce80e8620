//! Script HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AssignVoicesCommand, ExtractDialogueCommand};
use crate::infrastructure::http::dto::{
    ApiResponse, AssignVoicesRequest, CharactersResponse, ExtractScriptRequest, ScriptResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析剧本：提取对白、检测语言、自动分配音色
pub async fn extract_script(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractScriptRequest>,
) -> Result<Json<ApiResponse<ScriptResponse>>, ApiError> {
    let result = state
        .extract_dialogue_handler
        .handle(ExtractDialogueCommand { script: req.script })
        .await?;

    let language_warning = result.language_warning();

    Ok(Json(ApiResponse::success(ScriptResponse {
        language: result.language.into(),
        detected_language: result.detected_code,
        language_warning,
        dialogues: result.dialogues,
        characters: result.characters,
    })))
}

/// 重新分配音色（保留已有分配）
pub async fn assign_voices(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssignVoicesRequest>,
) -> Result<Json<ApiResponse<CharactersResponse>>, ApiError> {
    let result = state.assign_voices_handler.handle(AssignVoicesCommand {
        dialogues: req.dialogues,
        characters: req.characters,
    })?;

    Ok(Json(ApiResponse::success(CharactersResponse {
        characters: result.characters,
    })))
}
