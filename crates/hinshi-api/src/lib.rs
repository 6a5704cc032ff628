//! hinshi-api クレート
//!
//! 品詞タグ付けと固有表現認識を HTTP API として提供する Web サーバー。
//!
//! ## エンドポイント
//! - `POST /tag` - 品詞タグと見出し語付きのトークン列
//! - `POST /ner` - 上記に IOB 形式の固有表現ラベルを加えたもの（NER 有効で起動した場合のみ）
//! - `GET /health` - ヘルスチェック
//!
//! ## 使用例
//! ```bash
//! curl -X POST http://127.0.0.1:9090/tag \
//!   -H "Content-Type: application/json" \
//!   -d '{"sentence": "東京タワーは東京の観光名所です"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::AppState;
pub use config::{Cli, Config};
pub use errors::{ApiError, ApiErrorKind};
pub use models::{SentenceRequest, Token};
