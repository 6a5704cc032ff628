//! リクエストモデル定義

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ApiError, Result};

/// `/tag`・`/ner` 共通のリクエスト
///
/// `sentence` は任意の JSON 値を受け付け、[`into_sentence`](Self::into_sentence) で検証する。
#[derive(Debug, Default, Deserialize)]
pub struct SentenceRequest {
  /// 解析対象の文
  #[serde(default)]
  pub sentence: Option<Value>,
}

impl SentenceRequest {
  /// 解析対象の文を取り出す
  ///
  /// # Errors
  /// - 欠落・`null`・`false`・`0`・空文字列・空配列・空オブジェクト → `MissingSentence`
  /// - それ以外の文字列でない値 → `InvalidInput`
  pub fn into_sentence(self) -> Result<String> {
    let Some(value) = self.sentence else {
      return Err(ApiError::MissingSentence);
    };

    if is_falsy(&value) {
      return Err(ApiError::MissingSentence);
    }

    match value {
      Value::String(sentence) => Ok(sentence),
      other => Err(ApiError::invalid_input(format!(
        "sentence must be a string, got {other}"
      ))),
    }
  }
}

fn is_falsy(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64().is_some_and(|v| v == 0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(a) => a.is_empty(),
    Value::Object(o) => o.is_empty(),
  }
}
