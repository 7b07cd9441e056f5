use clap::Parser;
use health_report_ai::{analyzer, cli, config, error, output, server};
use analyzer::{GeminiAnalyzer, RemoteAnalyzer, ReportAnalyzer};
use cli::{Cli, Commands};
use config::Config;
use error::{HealthReportError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// 静的配信のデフォルト（trunk build の出力先）
const DEFAULT_STATIC_DIR: &str = "web-wasm/dist";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// APIキーを取得。未設定で端末から実行されていれば入力を促す
fn api_key_or_prompt(config: &Config) -> Result<String> {
    match config.get_api_key() {
        Ok(key) => Ok(key),
        Err(HealthReportError::MissingApiKey) if std::io::stdin().is_terminal() => {
            let key: String = dialoguer::Password::new()
                .with_prompt("Gemini API Key")
                .interact()
                .map_err(|_| HealthReportError::MissingApiKey)?;
            if key.trim().is_empty() {
                return Err(HealthReportError::MissingApiKey);
            }
            Ok(key)
        }
        Err(e) => Err(e),
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;
    let timeout = Duration::from_secs(config.timeout_seconds);

    match cli.command {
        Commands::Serve { addr, static_dir } => {
            let api_key = config.get_api_key().unwrap_or_else(|_| {
                warn!("GEMINI_API_KEY が設定されていません。解析リクエストは失敗します");
                String::new()
            });
            let analyzer = GeminiAnalyzer::new(api_key, config.model.clone(), timeout)?;

            let static_dir = static_dir.or_else(|| {
                let default = PathBuf::from(DEFAULT_STATIC_DIR);
                default.is_dir().then_some(default)
            });
            if static_dir.is_none() {
                warn!("静的ファイルのディレクトリがありません。APIのみ提供します");
            }

            let app = server::router(Arc::new(analyzer), static_dir);
            server::serve(addr, app).await?;
        }

        Commands::Analyze { file, format, output: output_path, server, inline_pdf, model } => {
            println!("🩺 health-report - レポート解析\n");

            let report = analyzer::load_report_file(&file)?;
            println!("✔ {} ({} bytes)", report.name, report.bytes.len());

            let client: Box<dyn ReportAnalyzer> = match server {
                Some(url) => Box::new(RemoteAnalyzer::new(&url, timeout)?),
                None => {
                    let api_key = api_key_or_prompt(&config)?;
                    let model = model.unwrap_or_else(|| config.model.clone());
                    Box::new(GeminiAnalyzer::new(api_key, model, timeout)?.with_inline_pdf(inline_pdf))
                }
            };

            let pb = spinner("AI解析中...".to_string());
            let outcome = client.analyze(&report).await;
            pb.finish_and_clear();
            let result = outcome?;
            println!("✔ 解析完了\n");

            let rendered = output::render_output(&result, format, &report.name)?;
            match output_path {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("✔ 結果を保存: {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }

        Commands::Models => {
            let api_key = api_key_or_prompt(&config)?;
            let gemini = GeminiAnalyzer::new(api_key, config.model.clone(), timeout)?;
            for name in gemini.list_models().await? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
