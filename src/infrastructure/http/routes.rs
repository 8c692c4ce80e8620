//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   存活检查
//! - /api/health            GET   语音合成服务检查
//! - /api/voices            GET   音色目录与支持的语言
//! - /api/script/extract    POST  解析剧本（对白 + 语言 + 自动音色）
//! - /api/script/voices     POST  重新分配音色
//! - /api/audio/generate    POST  生成对白音频（audio/wav 附件）
//! - /api/transcript        POST  导出纯文本对白（text/plain 附件）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
        .route("/voices", get(handlers::list_voices))
        .nest("/script", script_routes())
        .route("/audio/generate", post(handlers::generate_audio))
        .route("/transcript", post(handlers::export_transcript))
}

/// Script 路由
fn script_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/extract", post(handlers::extract_script))
        .route("/voices", post(handlers::assign_voices))
}
