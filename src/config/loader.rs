//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, SynthesisProvider};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "SCRIPTVOX";

/// 以逗号分隔的列表型配置项
const LIST_KEYS: &[&str] = &[
    "voices.male",
    "voices.female",
    "emphasis.strong",
    "emphasis.reduced",
];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SCRIPTVOX_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SCRIPTVOX_SERVER__PORT=8080`
/// - `SCRIPTVOX_SYNTHESIS__API_KEY=...`
/// - `SCRIPTVOX_SYNTHESIS__PROVIDER=fake`
/// - `SCRIPTVOX_VOICES__FEMALE=Kore,Zephyr,Aoede`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 标量默认值（列表默认值由 serde 提供）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("synthesis.provider", "gemini")?
        .set_default("synthesis.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("synthesis.tts_model", "gemini-2.5-flash-preview-tts")?
        .set_default("synthesis.analysis_model", "gemini-2.5-flash")?
        .set_default("synthesis.timeout_secs", 120)?
        .set_default("audio.sample_rate", 24000)?
        .set_default("audio.channels", 1)?
        .set_default("audio.bits_per_sample", 16)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SCRIPTVOX_SYNTHESIS__BASE_URL=http://localhost:9000
    let mut env = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .try_parsing(true);
    for key in LIST_KEYS {
        env = env.with_list_parse_key(key);
    }
    builder = builder.add_source(env);

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 声道数上限
const MAX_CHANNELS: u16 = 8;
/// 采样率上限（Hz）
const MAX_SAMPLE_RATE: u32 = 384_000;

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.synthesis.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis base URL cannot be empty".to_string(),
        ));
    }

    if config.synthesis.provider == SynthesisProvider::Gemini
        && config
            .synthesis
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "Synthesis API key is required for the gemini provider".to_string(),
        ));
    }

    if config.audio.bits_per_sample != 16 {
        return Err(ConfigError::ValidationError(format!(
            "Unsupported bits_per_sample {}, only 16 is supported",
            config.audio.bits_per_sample
        )));
    }

    if config.audio.channels == 0 || config.audio.sample_rate == 0 {
        return Err(ConfigError::ValidationError(
            "Audio channels and sample rate must be greater than 0".to_string(),
        ));
    }

    if config.audio.channels > MAX_CHANNELS || config.audio.sample_rate > MAX_SAMPLE_RATE {
        return Err(ConfigError::ValidationError(format!(
            "Audio format {} Hz / {} ch out of range (max {} Hz / {} ch)",
            config.audio.sample_rate, config.audio.channels, MAX_SAMPLE_RATE, MAX_CHANNELS
        )));
    }

    if config.voices.male.is_empty() && config.voices.female.is_empty() {
        return Err(ConfigError::ValidationError(
            "Voice catalogue cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("Provider: {}", config.synthesis.provider.as_str());
    tracing::info!("Synthesis URL: {}", config.synthesis.base_url);
    tracing::info!("TTS Model: {}", config.synthesis.tts_model);
    tracing::info!("Analysis Model: {}", config.synthesis.analysis_model);
    tracing::info!("Synthesis Timeout: {}s", config.synthesis.timeout_secs);
    tracing::info!(
        "Audio: {} Hz / {} ch / {} bit",
        config.audio.sample_rate,
        config.audio.channels,
        config.audio.bits_per_sample
    );
    tracing::info!("Male Voices: {:?}", config.voices.male);
    tracing::info!("Female Voices: {:?}", config.voices.female);
    if config.server.static_files.enabled {
        tracing::info!("Static Files: {:?}", config.server.static_files.dir);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.synthesis.api_key = Some("test-key".to_string());
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_fake_provider_needs_no_api_key() {
        let mut config = AppConfig::default();
        config.synthesis.provider = SynthesisProvider::Fake;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let mut config = valid_config();
        config.synthesis.api_key = Some("  ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = valid_config();
        config.synthesis.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_audio_format() {
        let mut config = valid_config();
        config.audio.bits_per_sample = 24;
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.audio.channels = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_oversized_audio_format() {
        let mut config = valid_config();
        config.audio.channels = 40_000;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = valid_config();
        config.audio.sample_rate = u32::MAX;
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.audio.channels = 2;
        config.audio.sample_rate = 48_000;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_catalogue() {
        let mut config = valid_config();
        config.voices.male.clear();
        config.voices.female.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8088

[synthesis]
provider = "fake"

[voices]
female = ["Aoede"]
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.synthesis.provider, SynthesisProvider::Fake);
        assert_eq!(config.voices.female, vec!["Aoede"]);
        assert_eq!(config.voices.male, vec!["Puck", "Charon", "Fenrir"]);
        assert_eq!(config.audio.sample_rate, 24000);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[audio]\nbits_per_sample = 8\n[synthesis]\nprovider = \"fake\"").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
