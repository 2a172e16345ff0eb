// 進捗報告と状態表示
//
// コマンドの境界でユーザーに見せる出力だけを担当する。
// 診断ログは tracing 側で扱う。

pub mod implementations;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
