//! TTS Adapter - 语音合成客户端实现

mod fake_tts_client;
mod gemini_tts_client;

pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use gemini_tts_client::GeminiTtsClient;
