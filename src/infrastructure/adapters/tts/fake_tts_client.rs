//! Fake TTS Client - 用于测试的语音合成客户端
//!
//! 不调用外部服务，每次返回固定长度的正弦波 PCM（base64）

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{SpeechSynthesisPort, SynthesisError, SynthesisRequest};
use crate::domain::audio::{encode_payload, AudioSpec, PcmBuffer, RawAudioPayload};

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 输出格式
    pub spec: AudioSpec,
    /// 每次调用返回的采样帧数
    pub frames_per_call: usize,
    /// 正弦波频率（Hz）
    pub tone_hz: f32,
    /// 模拟推理延迟
    pub latency_ms: u64,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            spec: AudioSpec::SPEECH_24K_MONO,
            frames_per_call: 12_000,
            tone_hz: 440.0,
            latency_ms: 0,
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    /// 预先生成的 PCM
    pcm: PcmBuffer,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        let pcm = Self::tone(&config);
        tracing::info!(
            frames = config.frames_per_call,
            duration_ms = config.spec.duration_ms(pcm.len()),
            "FakeTtsClient initialized"
        );
        Self { config, pcm }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }

    /// 16 位小端正弦波，所有声道相同
    fn tone(config: &FakeTtsClientConfig) -> PcmBuffer {
        let channels = config.spec.channels.max(1) as usize;
        let rate = config.spec.sample_rate.max(1) as f32;
        let mut bytes = Vec::with_capacity(config.frames_per_call * channels * 2);

        for frame in 0..config.frames_per_call {
            let t = frame as f32 / rate;
            let sample = ((t * config.tone_hz * std::f32::consts::TAU).sin() * 8000.0) as i16;
            for _ in 0..channels {
                bytes.extend_from_slice(&sample.to_le_bytes());
            }
        }

        PcmBuffer::new(bytes)
    }
}

#[async_trait]
impl SpeechSynthesisPort for FakeTtsClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<RawAudioPayload, SynthesisError> {
        tracing::debug!(
            text_len = request.text().len(),
            "FakeTtsClient: returning fixed tone"
        );

        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }

        Ok(encode_payload(&self.pcm))
    }
}
