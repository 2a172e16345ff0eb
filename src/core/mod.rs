// コアレイヤー - エラー定義と共通データ型
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{BlurifyError, BlurifyResult};
pub use types::{BackupOutcome, BlurPhase, BlurSummary, FileEntry, FileKind, ReplaceSummary};
