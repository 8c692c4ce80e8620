//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod script_analyzer;
mod speech_synthesis;

pub use script_analyzer::{AnalyzerError, ExtractedScript, ScriptAnalyzerPort};
pub use speech_synthesis::{SpeechSynthesisPort, SynthesisError, SynthesisRequest};
