//! 健康診断レポートAI解析（サーバー・CLI）

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod server;
