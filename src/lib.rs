pub mod backup;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod imaging;
pub mod processing;
pub mod prompt;
pub mod reporting;
pub mod storage;

use crate::backup::BackupManager;
use crate::classifier::FileClassifier;
use crate::config::BlurifyConfig;
use crate::core::{BlurPhase, BlurSummary, BlurifyError, BlurifyResult, ReplaceSummary};
use crate::imaging::{standard::StandardImageBackend, ImageBackend};
use crate::processing::{BlurProcessor, SvgReplacer};
use crate::prompt::ConfirmationPrompt;
use crate::reporting::ProgressReporter;
use crate::storage::{local::LocalStorageBackend, StorageBackend};
use std::time::Instant;
use tracing::debug;

// 依存関係を直接所有するアプリケーション本体
// ストレージと画像処理を差し替えることでテスト時はモックを注入できる
pub struct App<S, B>
where
    S: StorageBackend,
    B: ImageBackend,
{
    pub storage: S,
    pub imaging: B,
}

impl App<LocalStorageBackend, StandardImageBackend> {
    /// ローカルファイルシステムと標準の画像処理を使うApp
    pub fn local() -> Self {
        Self::new(LocalStorageBackend::new(), StandardImageBackend::new())
    }
}

impl<S, B> App<S, B>
where
    S: StorageBackend,
    B: ImageBackend,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(storage: S, imaging: B) -> Self {
        Self { storage, imaging }
    }

    /// blur コマンド: バックアップ → 走査 → ぼかし
    pub async fn blur<R>(&self, config: &BlurifyConfig, reporter: &R) -> BlurifyResult<BlurSummary>
    where
        R: ProgressReporter + ?Sized,
    {
        debug!(phase = %BlurPhase::Idle, source = %config.source_dir().display());

        let result = self.run_blur(config, reporter).await;
        match &result {
            Ok(summary) => debug!(phase = %BlurPhase::Done, processed = summary.processed_files),
            Err(error) => debug!(phase = %BlurPhase::Aborted, %error),
        }
        result
    }

    async fn run_blur<R>(&self, config: &BlurifyConfig, reporter: &R) -> BlurifyResult<BlurSummary>
    where
        R: ProgressReporter + ?Sized,
    {
        config.validate()?;

        debug!(phase = %BlurPhase::BackingUp, enabled = config.backup_enabled());
        let backup = BackupManager::new(&self.storage)
            .run(config, reporter)
            .await?;

        debug!(phase = %BlurPhase::Scanning);
        let images = FileClassifier::new(&self.storage)
            .raster_images(config.source_dir())
            .await?;
        if images.is_empty() {
            return Err(BlurifyError::no_images_found(config.source_dir()));
        }

        debug!(phase = %BlurPhase::Processing, total = images.len());
        let start_time = Instant::now();
        let processed_files = BlurProcessor::new(&self.imaging, config.blur_sigma())
            .process(&images, reporter)
            .await?;

        Ok(BlurSummary {
            backup,
            total_files: images.len(),
            processed_files,
            total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    /// replace_svg コマンド: 走査 → 確認 → 空ファイル化
    pub async fn replace_svg<P, R>(
        &self,
        config: &BlurifyConfig,
        prompt: &mut P,
        reporter: &R,
    ) -> BlurifyResult<ReplaceSummary>
    where
        P: ConfirmationPrompt + ?Sized,
        R: ProgressReporter + ?Sized,
    {
        config.validate()?;

        let files = FileClassifier::new(&self.storage)
            .vector_images(config.source_dir())
            .await?;
        if files.is_empty() {
            reporter.report_message("No SVG files have been found.").await;
            return Ok(ReplaceSummary {
                replaced_files: Vec::new(),
            });
        }

        let replaced_files = SvgReplacer::new(&self.storage)
            .replace_all(&files, prompt, reporter)
            .await?;

        Ok(ReplaceSummary { replaced_files })
    }
}
