//! コマンドライン引数による上書き
//!
//! 環境変数（`Config::from_env`）よりもフラグが優先される。

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use hinshi::DictionaryPreset;

use super::env::Config;
use crate::errors::ApiError;

/// hinshi-api - 品詞タグ付けと固有表現認識の HTTP サーバー
#[derive(Debug, Default, Parser)]
#[command(name = "hinshi-api", version, about)]
pub struct Cli {
  /// バインドホスト
  #[arg(long)]
  pub host: Option<String>,

  /// バインドポート
  #[arg(long)]
  pub port: Option<u16>,

  /// 言語識別子: ja, ipadic, unidic-cwj, unidic-csj
  #[arg(long)]
  pub language: Option<String>,

  /// 固有表現認識パイプラインをロードし POST /ner を登録する
  #[arg(long)]
  pub ner: bool,

  /// プリセットの代わりにロードするコンパイル済み辞書ファイル
  #[arg(long, value_name = "FILE")]
  pub dict_path: Option<PathBuf>,

  /// 辞書キャッシュディレクトリー
  #[arg(long, value_name = "DIR")]
  pub cache_dir: Option<PathBuf>,

  /// ワーカースレッド数
  #[arg(long)]
  pub workers: Option<usize>,

  /// すべての HTTP リクエストをログに出力する
  #[arg(long)]
  pub access_log: bool,
}

impl Cli {
  /// 指定されたフラグを `config` に上書きする
  ///
  /// 真偽値フラグは設定を有効化する方向にのみ働く。
  ///
  /// # Errors
  /// 不明な言語識別子の場合は設定エラーを返す
  pub fn apply(self, mut config: Config) -> crate::errors::Result<Config> {
    if let Some(host) = self.host {
      config.host = host;
    }
    if let Some(port) = self.port {
      config.port = port;
    }
    if let Some(language) = self.language {
      config.pipeline.preset =
        DictionaryPreset::from_str(&language).map_err(|e| ApiError::config(e.to_string()))?;
    }
    if self.ner {
      config.pipeline.ner = true;
    }
    if let Some(path) = self.dict_path {
      config.pipeline.dictionary_path = Some(path);
    }
    if let Some(dir) = self.cache_dir {
      config.pipeline.cache_dir = Some(dir);
    }
    if let Some(workers) = self.workers {
      config.workers = workers;
    }
    if self.access_log {
      config.access_log = true;
    }
    Ok(config)
  }
}
