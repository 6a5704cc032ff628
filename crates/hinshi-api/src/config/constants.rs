//! API設定の定数定義

/// デフォルトのバインドホスト
///
/// 全インターフェースで待ち受ける。
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 9090;

/// デフォルトの言語識別子（辞書プリセット名）
///
/// IPAdic は固有名詞の細分類（人名・地域・組織）を持つため、固有表現認識と相性が良い。
pub const DEFAULT_LANGUAGE: &str = "ipadic";

/// デフォルトのワーカースレッド数
pub const DEFAULT_WORKERS: usize = 16;
