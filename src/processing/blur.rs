use crate::core::{BlurifyError, BlurifyResult};
use crate::imaging::ImageBackend;
use crate::reporting::ProgressReporter;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// ラスター画像をその場でぼかす
///
/// 1件でも失敗したらそこで中断し、失敗したファイルをエラーとして返す。
/// それまでに処理したファイルはぼかされたまま残る。
pub struct BlurProcessor<'a, B: ImageBackend> {
    backend: &'a B,
    sigma: f32,
}

impl<'a, B: ImageBackend> BlurProcessor<'a, B> {
    pub fn new(backend: &'a B, sigma: f32) -> Self {
        Self { backend, sigma }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// 1ファイルを decode → blur → encode する
    pub async fn blur_file(&self, path: &Path) -> Result<()> {
        let decoded = self.backend.decode(path).await?;
        let (width, height) = decoded.dimensions();
        let blurred = self.backend.blur(decoded, self.sigma).await?;
        self.backend.encode(blurred, path).await?;

        debug!(path = %path.display(), width, height, sigma = self.sigma, "blurred");
        Ok(())
    }

    /// 与えられた順に全ファイルを処理し、処理件数を返す
    pub async fn process<R>(&self, images: &[PathBuf], reporter: &R) -> BlurifyResult<usize>
    where
        R: ProgressReporter + ?Sized,
    {
        let total = images.len();
        reporter
            .report_started(&format!("Processing {total} images"), total)
            .await;

        for (index, path) in images.iter().enumerate() {
            if let Err(error) = self.blur_file(path).await {
                reporter.report_error(path, &format!("{error:#}")).await;
                return Err(BlurifyError::image_processing(path, error));
            }
            reporter.report_progress(index + 1, total).await;
        }

        reporter.report_completed(total).await;
        Ok(total)
    }
}
