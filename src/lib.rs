//! ScriptVox - 剧本对白多角色配音服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Audio Context: base64 PCM 解码、拼接、WAV 封装
//! - Script Context: 对白、角色、语气强调、音色分配、合成扇出计划
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechSynthesis, ScriptAnalyzer）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: Gemini TTS / 剧本理解客户端及离线实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
