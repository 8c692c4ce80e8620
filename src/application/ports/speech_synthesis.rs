//! Speech Synthesis Port - 语音合成服务抽象
//!
//! 定义外部语音合成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::RawAudioPayload;
use crate::domain::script::Character;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 响应中没有音频数据
    #[error("No audio data in response")]
    EmptyAudio,
}

/// 合成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisRequest {
    /// 单句 + 单音色
    SingleSpeaker { utterance: String, voice: String },
    /// 完整多说话人对白 + 角色音色映射
    MultiSpeaker {
        transcript: String,
        speakers: Vec<Character>,
    },
}

impl SynthesisRequest {
    /// 发送给合成服务的文本
    pub fn text(&self) -> &str {
        match self {
            SynthesisRequest::SingleSpeaker { utterance, .. } => utterance,
            SynthesisRequest::MultiSpeaker { transcript, .. } => transcript,
        }
    }
}

/// Speech Synthesis Port
///
/// 成功时返回 base64 PCM（单声道 / 16 位 / 24kHz）
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<RawAudioPayload, SynthesisError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
