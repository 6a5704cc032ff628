//! モデルモジュール
//!
//! レスポンスはライブラリの [`Token`] 配列をそのまま返す。

mod request;

pub use hinshi::Token;
pub use request::SentenceRequest;
