// 進捗報告のトレイト定義

use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

/// 進捗・状態の報告を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 通常のステータス行
    async fn report_message(&self, message: &str);

    /// 警告
    async fn report_warning(&self, message: &str);

    /// 処理開始時の報告
    async fn report_started(&self, label: &str, total: usize);

    /// 進捗状況の報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, file_path: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_processed: usize);
}
