//! ScriptVox - 剧本对白多角色配音服务
//!
//! - Domain: audio/, script/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use scriptvox::application::{ScriptAnalyzerPort, SpeechSynthesisPort};
use scriptvox::config::{load_config, print_config, AppConfig, SynthesisProvider};
use scriptvox::domain::script::EmphasisClassifier;
use scriptvox::infrastructure::adapters::{
    FakeScriptAnalyzer, FakeTtsClient, FakeTtsClientConfig, GeminiClient, GeminiClientConfig,
    GeminiScriptAnalyzer, GeminiTtsClient,
};
use scriptvox::infrastructure::http::{AppState, HttpServer, ServerConfig};

/// 按配置创建语音合成与剧本理解适配器
fn build_ports(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn SpeechSynthesisPort>, Arc<dyn ScriptAnalyzerPort>)> {
    match config.synthesis.provider {
        SynthesisProvider::Gemini => {
            let api_key = config.synthesis.api_key.clone().unwrap_or_default();
            let client = GeminiClient::new(
                GeminiClientConfig::new(&config.synthesis.base_url, api_key)
                    .with_timeout(config.synthesis.timeout_secs),
            )?;

            let synthesis: Arc<dyn SpeechSynthesisPort> = Arc::new(GeminiTtsClient::new(
                client.clone(),
                &config.synthesis.tts_model,
            ));
            let analyzer: Arc<dyn ScriptAnalyzerPort> = Arc::new(GeminiScriptAnalyzer::new(
                client,
                &config.synthesis.analysis_model,
            ));
            Ok((synthesis, analyzer))
        }
        SynthesisProvider::Fake => {
            tracing::warn!("Using offline fake synthesis provider");
            let synthesis: Arc<dyn SpeechSynthesisPort> =
                Arc::new(FakeTtsClient::new(FakeTtsClientConfig {
                    spec: config.audio.spec(),
                    ..Default::default()
                }));
            let analyzer: Arc<dyn ScriptAnalyzerPort> = Arc::new(FakeScriptAnalyzer::default());
            Ok((synthesis, analyzer))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},scriptvox={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("ScriptVox - 剧本对白多角色配音服务");
    print_config(&config);

    let (synthesis, analyzer) = build_ports(&config)?;
    let classifier = EmphasisClassifier::new(&config.emphasis.keywords())?;

    let state = AppState::new(
        synthesis,
        analyzer,
        config.voices.catalogue(),
        classifier,
        config.audio.spec(),
    );

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    let static_files = &config.server.static_files;
    if static_files.enabled {
        server_config = server_config.with_static_files(&static_files.path, &static_files.dir);
    }

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
