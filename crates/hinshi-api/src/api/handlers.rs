//! HTTPハンドラー定義

use std::sync::Arc;

use axum::{Json, extract::State};
use hinshi::Handler;
use tracing::{debug, error, info};

use crate::errors::{ApiError, Result};
use crate::models::{SentenceRequest, Token};

use super::state::AppState;

/// POST /tag エンドポイント
///
/// 品詞タグと見出し語を付与したトークン列を返す。
///
/// # Request Body
/// ```json
/// { "sentence": "I love dogs." }
/// ```
///
/// # Response
/// - 200 OK: `entity` を含まないトークン配列
/// - 400 Bad Request: `sentence` が文字列でない
/// - 401 Unauthorized: `sentence` が欠落・空（本文 "Missing sentence"）
/// - 500 Internal Server Error: パイプラインエラー
pub async fn post_tag(
  State(state): State<AppState>,
  Json(request): Json<SentenceRequest>,
) -> Result<Json<Vec<Token>>> {
  let sentence = request.into_sentence()?;
  debug!(sentence_len = sentence.len(), "tag リクエストを受信");

  let tokens = run_blocking(&state, move |handler| {
    handler.tag(&sentence).map_err(ApiError::from)
  })
  .await?;

  info!(token_count = tokens.len(), "tag 完了");
  Ok(Json(tokens))
}

/// POST /ner エンドポイント
///
/// 起動時に NER が有効な場合のみルーティングされる。
/// 固有表現に属するトークンには `entity`（例: `"B-PERSON"`）が付く。
///
/// # Response
/// - 200 OK: トークン配列
/// - 400 / 401 / 500: `/tag` と同じ
pub async fn post_ner(
  State(state): State<AppState>,
  Json(request): Json<SentenceRequest>,
) -> Result<Json<Vec<Token>>> {
  let sentence = request.into_sentence()?;
  debug!(sentence_len = sentence.len(), "ner リクエストを受信");

  let tokens = run_blocking(&state, move |handler| {
    handler
      .ner(&sentence)?
      .ok_or_else(|| ApiError::internal("NER パイプラインがロードされていません"))
  })
  .await?;

  let entity_count = tokens.iter().filter(|t| t.entity.is_some()).count();
  info!(token_count = tokens.len(), entity_count, "ner 完了");
  Ok(Json(tokens))
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> &'static str {
  "OK"
}

/// CPUバウンドな解析を spawn_blocking で実行する
///
/// 同時実行数は `AppState::inference` の許可数（`workers`）までに制限する。
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T>
where
  T: Send + 'static,
  F: FnOnce(&Handler) -> Result<T> + Send + 'static,
{
  let permit = Arc::clone(&state.inference).acquire_owned().await.map_err(|e| {
    error!(error = %e, "セマフォの取得に失敗");
    ApiError::internal("処理の実行に失敗しました")
  })?;

  let handler = Arc::clone(&state.handler);
  tokio::task::spawn_blocking(move || {
    let _permit = permit;
    f(&handler)
  })
  .await
  .map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })?
}
