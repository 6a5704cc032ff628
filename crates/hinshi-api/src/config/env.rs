//! 環境変数からの設定読み込み

use std::path::PathBuf;
use std::str::FromStr;

use hinshi::{DictionaryPreset, PipelineConfig};

use super::constants::{DEFAULT_HOST, DEFAULT_LANGUAGE, DEFAULT_PORT, DEFAULT_WORKERS};
use crate::errors::ApiError;

/// 環境変数名
pub mod vars {
  /// バインドホスト
  pub const HOST: &str = "HINSHI_API_HOST";
  /// バインドポート
  pub const PORT: &str = "HINSHI_API_PORT";
  /// 言語識別子（辞書プリセット名）
  pub const LANGUAGE: &str = "HINSHI_LANGUAGE";
  /// `/ner` を有効化する
  pub const NER: &str = "HINSHI_NER";
  /// ローカル辞書ファイル
  pub const DICT_PATH: &str = "HINSHI_DICT_PATH";
  /// 辞書キャッシュディレクトリー
  pub const CACHE_DIR: &str = "HINSHI_CACHE_DIR";
  /// ランタイムのワーカースレッド数
  pub const WORKERS: &str = "HINSHI_WORKERS";
  /// HTTP アクセスログを有効化する
  pub const ACCESS_LOG: &str = "HINSHI_ACCESS_LOG";
}

/// APIサーバーの設定
#[derive(Debug, Clone)]
pub struct Config {
  /// バインドホスト（例: "0.0.0.0"）
  pub host: String,
  /// バインドポート
  pub port: u16,
  /// パイプラインのロード設定（言語・NER・辞書の場所）
  pub pipeline: PipelineConfig,
  /// ワーカースレッド数（同時に実行する解析の上限も兼ねる）
  pub workers: usize,
  /// リクエストごとのアクセスログを出力するか
  pub access_log: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      pipeline: PipelineConfig::new(DictionaryPreset::Ipadic),
      workers: DEFAULT_WORKERS,
      access_log: false,
    }
  }
}

impl Config {
  /// 環境変数から設定を読み込む
  ///
  /// # Errors
  /// 環境変数の値が不正な場合にエラーを返す
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// `lookup`（環境変数またはテスト用のマップ）から設定を読み込む
  ///
  /// # Errors
  /// 値を解釈できない場合にエラーを返す
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup(vars::HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match lookup(vars::PORT) {
      Some(value) => parse_value(vars::PORT, &value)?,
      None => DEFAULT_PORT,
    };

    let language = lookup(vars::LANGUAGE).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let preset = DictionaryPreset::from_str(&language).map_err(|e| ApiError::config(e.to_string()))?;

    let ner = match lookup(vars::NER) {
      Some(value) => parse_flag(vars::NER, &value)?,
      None => false,
    };

    let workers = match lookup(vars::WORKERS) {
      Some(value) => parse_value(vars::WORKERS, &value)?,
      None => DEFAULT_WORKERS,
    };

    let access_log = match lookup(vars::ACCESS_LOG) {
      Some(value) => parse_flag(vars::ACCESS_LOG, &value)?,
      None => false,
    };

    let mut pipeline = PipelineConfig::new(preset).with_ner(ner);
    if let Some(path) = lookup(vars::DICT_PATH) {
      pipeline = pipeline.with_dictionary_path(PathBuf::from(path));
    }
    if let Some(dir) = lookup(vars::CACHE_DIR) {
      pipeline = pipeline.with_cache_dir(PathBuf::from(dir));
    }

    Ok(Self {
      host,
      port,
      pipeline,
      workers,
      access_log,
    })
  }

  /// バインドアドレス（例: "0.0.0.0:9090"）
  #[must_use]
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }

  /// 設定の妥当性を検証する
  ///
  /// # Errors
  /// - `workers` が 0
  /// - パイプライン設定が不正
  pub fn validate(&self) -> crate::errors::Result<()> {
    if self.workers == 0 {
      return Err(ApiError::config("workers は 1 以上である必要があります"));
    }
    self.pipeline.validate().map_err(|e| ApiError::config(e.to_string()))
  }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> crate::errors::Result<T> {
  value
    .trim()
    .parse()
    .map_err(|_| ApiError::config(format!("{key} の値が不正です: {value}")))
}

fn parse_flag(key: &str, value: &str) -> crate::errors::Result<bool> {
  match value.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    _ => Err(ApiError::config(format!("{key} の値が不正です: {value}"))),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:9090");
    assert_eq!(config.pipeline.preset, DictionaryPreset::Ipadic);
    assert!(!config.pipeline.ner);
    assert_eq!(config.workers, DEFAULT_WORKERS);
    assert!(!config.access_log);
  }

  #[test]
  fn reads_all_variables() {
    let config = Config::from_lookup(lookup_from(&[
      (vars::HOST, "127.0.0.1"),
      (vars::PORT, "5531"),
      (vars::LANGUAGE, "unidic-cwj"),
      (vars::NER, "true"),
      (vars::CACHE_DIR, "/tmp/hinshi-dict"),
      (vars::WORKERS, "4"),
      (vars::ACCESS_LOG, "1"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:5531");
    assert_eq!(config.pipeline.preset, DictionaryPreset::UnidicCwj);
    assert!(config.pipeline.ner);
    assert_eq!(
      config.pipeline.cache_dir.as_deref(),
      Some(std::path::Path::new("/tmp/hinshi-dict"))
    );
    assert_eq!(config.workers, 4);
    assert!(config.access_log);
  }

  #[test]
  fn rejects_non_numeric_port() {
    let err = Config::from_lookup(lookup_from(&[(vars::PORT, "http")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn rejects_unknown_language() {
    let err = Config::from_lookup(lookup_from(&[(vars::LANGUAGE, "xx")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
    assert!(err.to_string().contains("xx"));
  }

  #[test]
  fn rejects_invalid_flag() {
    assert!(Config::from_lookup(lookup_from(&[(vars::NER, "maybe")])).is_err());
  }

  #[test]
  fn validate_rejects_zero_workers() {
    let config = Config {
      workers: 0,
      ..Config::default()
    };
    assert!(config.validate().is_err());
  }

  #[test]
  fn validate_accepts_default() {
    assert!(Config::default().validate().is_ok());
  }
}
