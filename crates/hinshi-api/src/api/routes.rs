//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers::{health_check, post_ner, post_tag};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// `/ner` は NER パイプラインがロードされている場合のみ登録する。
/// 未登録時のリクエストは 404 になる。
pub fn create_router(state: AppState) -> Router {
  let mut router = Router::new().route("/tag", post(post_tag)).route("/health", get(health_check));

  if state.handler.has_ner() {
    router = router.route("/ner", post(post_ner));
  }

  // アクセスログは既定のフィルター（info）で出力されるレベルにする
  if state.config.access_log {
    router = router.layer(
      TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );
  }

  router.with_state(state)
}

/// サーバーを起動する
///
/// # Errors
/// バインドまたはサーバーの実行に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {e}")))?;

  tracing::info!(ner = state.handler.has_ner(), "サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  Ok(())
}
