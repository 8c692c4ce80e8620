//! Gemini TTS Client - 调用 Gemini 语音合成
//!
//! 实现 SpeechSynthesisPort trait
//!
//! - 单说话人: speechConfig.voiceConfig.prebuiltVoiceConfig.voiceName
//! - 多说话人: speechConfig.multiSpeakerVoiceConfig.speakerVoiceConfigs[]
//!
//! 响应中的 base64 PCM 原样返回，由应用层解码

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesisPort, SynthesisError, SynthesisRequest};
use crate::domain::audio::RawAudioPayload;
use crate::infrastructure::adapters::gemini::{
    GeminiClient, GeminiError, GenerateContentRequest, GenerationConfig, MultiSpeakerVoiceConfig,
    SpeakerVoiceConfig, SpeechConfig, VoiceConfig,
};

impl From<GeminiError> for SynthesisError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::NetworkError(msg) => SynthesisError::NetworkError(msg),
            GeminiError::Timeout => SynthesisError::Timeout,
            GeminiError::ServiceError(msg) => SynthesisError::ServiceError(msg),
            GeminiError::InvalidResponse(msg) => SynthesisError::InvalidResponse(msg),
        }
    }
}

/// Gemini TTS 客户端
pub struct GeminiTtsClient {
    client: GeminiClient,
    model: String,
}

impl GeminiTtsClient {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// 构造 generateContent 请求体
    fn build_request(request: &SynthesisRequest) -> GenerateContentRequest {
        let speech_config = match request {
            SynthesisRequest::SingleSpeaker { voice, .. } => SpeechConfig {
                voice_config: Some(VoiceConfig::prebuilt(voice.as_str())),
                multi_speaker_voice_config: None,
            },
            SynthesisRequest::MultiSpeaker { speakers, .. } => SpeechConfig {
                voice_config: None,
                multi_speaker_voice_config: Some(MultiSpeakerVoiceConfig {
                    speaker_voice_configs: speakers
                        .iter()
                        .map(|c| SpeakerVoiceConfig {
                            speaker: c.name.clone(),
                            voice_config: VoiceConfig::prebuilt(c.voice.as_str()),
                        })
                        .collect(),
                }),
            },
        };

        GenerateContentRequest::text(
            request.text(),
            GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: Some(speech_config),
                ..Default::default()
            },
        )
    }
}

#[async_trait]
impl SpeechSynthesisPort for GeminiTtsClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<RawAudioPayload, SynthesisError> {
        let body = Self::build_request(&request);

        tracing::debug!(
            model = %self.model,
            text_len = request.text().len(),
            multi_speaker = matches!(request, SynthesisRequest::MultiSpeaker { .. }),
            "Sending TTS request"
        );

        let response = self.client.generate_content(&self.model, &body).await?;

        let data = response.inline_data().ok_or_else(|| {
            tracing::warn!(
                finish_reason = ?response.finish_reason(),
                "No audio data in TTS response"
            );
            SynthesisError::EmptyAudio
        })?;

        tracing::debug!(payload_len = data.len(), "TTS response received");

        Ok(RawAudioPayload::new(data))
    }

    async fn health_check(&self) -> bool {
        self.client.health_check(&self.model).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::Character;
    use crate::infrastructure::adapters::gemini::GeminiClientConfig;
    use axum::{extract::Path, http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(String, Option<String>, Value)>>>;

    /// 本地模拟 generateContent 服务，记录收到的请求
    async fn spawn_stub(reply: Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();

        let app = Router::new().route(
            "/v1beta/models/:call",
            post(move |Path(call): Path<String>, headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                let reply = reply.clone();
                async move {
                    let key = headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    sink.lock().unwrap().push((call, key, body));
                    Json(reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), captured)
    }

    fn client(base_url: &str) -> GeminiTtsClient {
        let client = GeminiClient::new(GeminiClientConfig::new(base_url, "test-key")).unwrap();
        GeminiTtsClient::new(client, "gemini-2.5-flash-preview-tts")
    }

    #[test]
    fn test_multi_speaker_request_body() {
        let body = GeminiTtsClient::build_request(&SynthesisRequest::MultiSpeaker {
            transcript: "A: hi\nB: yo".to_string(),
            speakers: vec![Character::new("A", "Puck"), Character::new("B", "Kore")],
        });

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{ "parts": [{ "text": "A: hi\nB: yo" }] }],
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "multiSpeakerVoiceConfig": {
                            "speakerVoiceConfigs": [
                                { "speaker": "A", "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Puck" } } },
                                { "speaker": "B", "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } } }
                            ]
                        }
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_synthesize_returns_inline_data() {
        let (base_url, captured) = spawn_stub(json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "audio/L16;rate=24000", "data": "AAAB" } }] }
            }]
        }))
        .await;

        let payload = client(&base_url)
            .synthesize(SynthesisRequest::SingleSpeaker {
                utterance: "<speak>hi</speak>".to_string(),
                voice: "Kore".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(payload.as_str(), "AAAB");

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let (call, key, body) = &captured[0];
        assert_eq!(call, "gemini-2.5-flash-preview-tts:generateContent");
        assert_eq!(key.as_deref(), Some("test-key"));
        assert_eq!(
            body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Kore"
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "<speak>hi</speak>");
    }

    #[tokio::test]
    async fn test_missing_audio_is_error() {
        let (base_url, _) = spawn_stub(json!({
            "candidates": [{ "finishReason": "OTHER" }]
        }))
        .await;

        let err = client(&base_url)
            .synthesize(SynthesisRequest::SingleSpeaker {
                utterance: "hi".to_string(),
                voice: "Kore".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SynthesisError::EmptyAudio));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .synthesize(SynthesisRequest::SingleSpeaker {
                utterance: "hi".to_string(),
                voice: "Kore".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SynthesisError::NetworkError(_)));
    }
}
