//! Ping Handler
//!
//! 健康检查

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 进程存活
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health 响应
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// 语音合成服务是否可用
    pub synthesis: bool,
}

/// Health endpoint - 检查语音合成服务
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let synthesis = state.synthesis.health_check().await;
    Json(HealthResponse {
        status: if synthesis { "ok" } else { "degraded" },
        synthesis,
    })
}
