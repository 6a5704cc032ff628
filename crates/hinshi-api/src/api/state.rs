//! アプリケーション状態の定義

use std::sync::Arc;

use hinshi::Handler;
use tokio::sync::Semaphore;

use crate::config::Config;

/// アプリケーション状態
///
/// 全リクエストで共有される。パイプラインは `handler` が保持する。
#[derive(Clone)]
pub struct AppState {
  /// 設定
  pub config: Config,
  /// tag / ner ハンドラー
  ///
  /// - 本番: `Arc::new(Handler::from_config(&config.pipeline)?)`
  /// - テスト: スタブパイプラインを渡した `Handler::new`
  pub handler: Arc<Handler>,
  /// 同時に実行できる解析の数（`config.workers` 個の許可）
  pub inference: Arc<Semaphore>,
}

impl AppState {
  /// AppState を作成する
  #[must_use]
  pub fn new(config: Config, handler: Arc<Handler>) -> Self {
    let inference = Arc::new(Semaphore::new(config.workers.max(1)));
    Self {
      config,
      handler,
      inference,
    }
  }
}
