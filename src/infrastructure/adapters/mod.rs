//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod analyzer;
pub mod gemini;
pub mod tts;

pub use analyzer::*;
pub use gemini::{GeminiClient, GeminiClientConfig, GeminiError};
pub use tts::*;
