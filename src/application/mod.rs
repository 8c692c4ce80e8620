//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesis、ScriptAnalyzer）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Script commands
    AssignVoicesCommand,
    AssignVoicesResponse,
    ExtractDialogueCommand,
    ExtractDialogueResponse,
    // Audio commands
    FailedLine,
    GenerateAudioCommand,
    GenerateAudioResponse,
    SkippedLine,
    // Handlers
    handlers::{AssignVoicesHandler, ExtractDialogueHandler, GenerateAudioHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Script analyzer
    AnalyzerError,
    ExtractedScript,
    ScriptAnalyzerPort,
    // Speech synthesis
    SpeechSynthesisPort,
    SynthesisError,
    SynthesisRequest,
};

pub use queries::{
    // Transcript queries
    ExportTranscriptQuery,
    ExportTranscriptResponse,
    // Voice queries
    ListVoices,
    // Handlers
    handlers::{ExportTranscriptHandler, ListVoicesHandler, VoiceCatalogueResponse},
};
