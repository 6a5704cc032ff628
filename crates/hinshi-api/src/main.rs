//! hinshi-api サーバーエントリーポイント

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hinshi::Handler;
use hinshi_api::ApiError;
use hinshi_api::api::{AppState, run_server};
use hinshi_api::config::{Cli, Config};

fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未設定時は info）
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 設定の読み込み（環境変数 < コマンドライン引数）
  let config = Cli::parse().apply(Config::from_env()?)?;
  config.validate()?;
  tracing::info!(
    language = %config.pipeline.preset,
    ner = config.pipeline.ner,
    workers = config.workers,
    "設定を読み込みました"
  );

  // パイプラインのロード（失敗した場合は起動しない）
  let handler = Arc::new(Handler::from_config(&config.pipeline)?);
  tracing::info!(?handler, "パイプラインを初期化しました");

  let runtime = tokio::runtime::Builder::new_multi_thread()
    .worker_threads(config.workers)
    .enable_all()
    .build()
    .map_err(|e| ApiError::internal(format!("ランタイムの構築に失敗しました: {e}")))?;

  let state = AppState::new(config, handler);
  runtime.block_on(run_server(state))
}
