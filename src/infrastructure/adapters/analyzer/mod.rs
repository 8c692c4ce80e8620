//! Script Analyzer Adapter - 剧本理解客户端实现

mod fake_script_analyzer;
mod gemini_script_analyzer;

pub use fake_script_analyzer::FakeScriptAnalyzer;
pub use gemini_script_analyzer::GeminiScriptAnalyzer;
