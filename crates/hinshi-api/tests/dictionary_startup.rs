//! 実辞書でのサーバー組み立てテスト
//!
//! 辞書のダウンロードが必要なため with_dict_tests フィーチャーで有効化する。

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use hinshi::{DictionaryPreset, Handler, PipelineConfig};
use hinshi_api::{AppState, Config, api::create_router};

fn config_with_ner() -> Config {
  Config {
    pipeline: PipelineConfig::new(DictionaryPreset::Ipadic).with_ner(true),
    ..Config::default()
  }
}

#[tokio::test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
async fn ner_with_ipadic_marks_place_name() {
  let config = config_with_ner();
  let handler = Handler::from_config(&config.pipeline).expect("Handler の構築に失敗");
  let router = create_router(AppState::new(config, Arc::new(handler)));

  let request = Request::builder()
    .method("POST")
    .uri("/ner")
    .header("content-type", "application/json")
    .body(Body::from(r#"{"sentence": "東京に行く"}"#))
    .unwrap();

  let response = router.oneshot(request).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let tokens: Value = serde_json::from_slice(&body).unwrap();
  let tokens = tokens.as_array().unwrap();

  assert_eq!(tokens[0]["text"], "東京");
  assert_eq!(tokens[0]["entity"], "B-GPE");
  assert!(tokens[1..].iter().all(|t| t.get("entity").is_none()));
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn handler_without_ner_has_no_ner_pipeline() {
  let handler =
    Handler::from_config(&PipelineConfig::new(DictionaryPreset::Ipadic)).expect("Handler の構築に失敗");
  assert!(!handler.has_ner());
  assert!(handler.ner("東京").unwrap().is_none());
}
