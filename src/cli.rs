use clap::{Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "health-report")]
#[command(about = "健康診断レポートPDFのAI解析ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 解析サーバーを起動（POST /analyze）
    Serve {
        /// 待ち受けアドレス
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,

        /// フロントエンドの静的ファイル（デフォルト: web-wasm/dist があれば使用）
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// PDFレポートを解析して結果を出力
    Analyze {
        /// PDFファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 出力形式 (text/json/html)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 解析サーバーのURL（指定時はサーバー経由で解析）
        #[arg(long)]
        server: Option<String>,

        /// テキスト抽出せずPDFをそのままGeminiへ送る
        #[arg(long, conflicts_with = "server")]
        inline_pdf: bool,

        /// 使用するモデル（設定ファイルより優先）
        #[arg(short, long)]
        model: Option<String>,
    },

    /// 設定管理
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },

    /// generateContent対応のGeminiモデルを一覧表示
    Models,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_defaults() {
        let cli = Cli::parse_from(["health-report", "analyze", "report.pdf"]);
        match cli.command {
            Commands::Analyze { file, format, output, server, inline_pdf, model } => {
                assert_eq!(file, PathBuf::from("report.pdf"));
                assert_eq!(format, OutputFormat::Text);
                assert!(output.is_none());
                assert!(server.is_none());
                assert!(!inline_pdf);
                assert!(model.is_none());
            }
            _ => panic!("Expected Analyze"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["health-report", "-v", "serve", "--addr", "0.0.0.0:8080"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve { addr, static_dir } => {
                assert_eq!(addr.port(), 8080);
                assert!(static_dir.is_none());
            }
            _ => panic!("Expected Serve"),
        }
    }

    #[test]
    fn test_inline_pdf_conflicts_with_server() {
        let result = Cli::try_parse_from([
            "health-report",
            "analyze",
            "report.pdf",
            "--server",
            "http://localhost:5000",
            "--inline-pdf",
        ]);
        assert!(result.is_err());
    }
}
