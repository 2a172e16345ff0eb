use crate::config::BlurifyConfig;
use crate::core::{BackupOutcome, BlurifyError, BlurifyResult};
use crate::reporting::ProgressReporter;
use crate::storage::StorageBackend;
use std::path::Path;
use tracing::debug;

/// メディアディレクトリのバックアップを管理する
///
/// バックアップは毎回「削除してから丸ごとコピー」で作り直し、部分的な統合はしない。
pub struct BackupManager<'a, S: StorageBackend> {
    storage: &'a S,
}

impl<'a, S: StorageBackend> BackupManager<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// 以前のバックアップを削除する（存在しなければ何もしない）
    pub async fn clear(&self, backup_dir: &Path) -> BlurifyResult<()> {
        self.storage
            .remove_dir_all(backup_dir)
            .await
            .map_err(|source| BlurifyError::backup_failed(backup_dir, source))
    }

    /// `source_dir` を `backup_dir` に丸ごとコピーする
    pub async fn mirror(&self, source_dir: &Path, backup_dir: &Path) -> BlurifyResult<u64> {
        let copied = self
            .storage
            .mirror(source_dir, backup_dir)
            .await
            .map_err(|source| BlurifyError::backup_failed(source_dir, source))?;

        debug!(
            source = %source_dir.display(),
            backup = %backup_dir.display(),
            files = copied,
            "backup mirrored"
        );
        Ok(copied)
    }

    /// 設定に従ってバックアップを作成する
    ///
    /// 無効化されている場合はバックアップ先に一切触れず、警告だけを出す。
    pub async fn run<R>(&self, config: &BlurifyConfig, reporter: &R) -> BlurifyResult<BackupOutcome>
    where
        R: ProgressReporter + ?Sized,
    {
        if !config.backup_enabled() {
            reporter
                .report_warning("Uploads folder backup disabled.")
                .await;
            return Ok(BackupOutcome::Skipped);
        }

        self.clear(config.backup_dir()).await?;
        reporter.report_message("Removed any previous backup.").await;

        let files_copied = self
            .mirror(config.source_dir(), config.backup_dir())
            .await?;
        reporter.report_message("Created backup folder.").await;

        Ok(BackupOutcome::Mirrored { files_copied })
    }
}
