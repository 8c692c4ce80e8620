//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::audio::AudioSpec;
use crate::domain::script::{EmphasisKeywords, VoiceCatalogue};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音合成 / 剧本理解服务配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 输出音频参数
    #[serde(default)]
    pub audio: AudioConfig,

    /// 音色池
    #[serde(default)]
    pub voices: VoicesConfig,

    /// 语气关键词
    #[serde(default)]
    pub emphasis: EmphasisConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,

    /// 静态文件服务配置（浏览器前端）
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default)]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（如 "/" 表示根路径托管）
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_static_path() -> String {
    "/".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 服务提供方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisProvider {
    /// Gemini generateContent 接口
    #[default]
    Gemini,
    /// 离线确定性实现（开发 / 测试）
    Fake,
}

impl SynthesisProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisProvider::Gemini => "gemini",
            SynthesisProvider::Fake => "fake",
        }
    }
}

/// 语音合成 / 剧本理解服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default)]
    pub provider: SynthesisProvider,

    /// 服务基础 URL
    #[serde(default = "default_synthesis_url")]
    pub base_url: String,

    /// API Key（provider = gemini 时必填）
    #[serde(default)]
    pub api_key: Option<String>,

    /// 语音合成模型
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// 剧本理解模型
    #[serde(default = "default_analysis_model")]
    pub analysis_model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_synthesis_timeout")]
    pub timeout_secs: u64,
}

fn default_synthesis_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_tts_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_analysis_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_synthesis_timeout() -> u64 {
    120
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            provider: SynthesisProvider::default(),
            base_url: default_synthesis_url(),
            api_key: None,
            tts_model: default_tts_model(),
            analysis_model: default_analysis_model(),
            timeout_secs: default_synthesis_timeout(),
        }
    }
}

/// 输出音频参数
///
/// 必须与合成服务返回的 PCM 格式一致
#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    /// 采样率（Hz）
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// 声道数
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// 位深度，仅支持 16
    #[serde(default = "default_bits_per_sample")]
    pub bits_per_sample: u16,
}

fn default_sample_rate() -> u32 {
    AudioSpec::SPEECH_24K_MONO.sample_rate
}

fn default_channels() -> u16 {
    AudioSpec::SPEECH_24K_MONO.channels
}

fn default_bits_per_sample() -> u16 {
    AudioSpec::SPEECH_24K_MONO.bits_per_sample
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            bits_per_sample: default_bits_per_sample(),
        }
    }
}

impl AudioConfig {
    pub fn spec(&self) -> AudioSpec {
        AudioSpec {
            sample_rate: self.sample_rate,
            channels: self.channels,
            bits_per_sample: self.bits_per_sample,
        }
    }
}

/// 音色池配置
#[derive(Debug, Clone, Deserialize)]
pub struct VoicesConfig {
    #[serde(default = "default_male_voices")]
    pub male: Vec<String>,

    #[serde(default = "default_female_voices")]
    pub female: Vec<String>,
}

fn default_male_voices() -> Vec<String> {
    VoiceCatalogue::default().male
}

fn default_female_voices() -> Vec<String> {
    VoiceCatalogue::default().female
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            male: default_male_voices(),
            female: default_female_voices(),
        }
    }
}

impl VoicesConfig {
    pub fn catalogue(&self) -> VoiceCatalogue {
        VoiceCatalogue {
            male: self.male.clone(),
            female: self.female.clone(),
        }
    }
}

/// 语气关键词配置
#[derive(Debug, Clone, Deserialize)]
pub struct EmphasisConfig {
    #[serde(default = "default_strong_keywords")]
    pub strong: Vec<String>,

    #[serde(default = "default_reduced_keywords")]
    pub reduced: Vec<String>,
}

fn default_strong_keywords() -> Vec<String> {
    EmphasisKeywords::default().strong
}

fn default_reduced_keywords() -> Vec<String> {
    EmphasisKeywords::default().reduced
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            strong: default_strong_keywords(),
            reduced: default_reduced_keywords(),
        }
    }
}

impl EmphasisConfig {
    pub fn keywords(&self) -> EmphasisKeywords {
        EmphasisKeywords {
            strong: self.strong.clone(),
            reduced: self.reduced.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（`RUST_LOG` 优先）
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
