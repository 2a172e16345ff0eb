use crate::core::{BlurifyError, BlurifyResult};
use crate::prompt::ConfirmationPrompt;
use crate::reporting::ProgressReporter;
use crate::storage::StorageBackend;
use std::path::PathBuf;
use tracing::debug;

/// SVGファイルを空ファイルに置き換える
pub struct SvgReplacer<'a, S: StorageBackend> {
    storage: &'a S,
}

impl<'a, S: StorageBackend> SvgReplacer<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// 一度だけ確認を取ってから全ファイルを置き換える
    ///
    /// 確認が拒否された場合はファイルに一切触れずに `ConfirmationDeclined` を返す。
    pub async fn replace_all<P, R>(
        &self,
        files: &[PathBuf],
        prompt: &mut P,
        reporter: &R,
    ) -> BlurifyResult<Vec<PathBuf>>
    where
        P: ConfirmationPrompt + ?Sized,
        R: ProgressReporter + ?Sized,
    {
        let total = files.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let question = format!("{total} SVG files will be replaced with empty files. Continue?");
        if !prompt.confirm(&question).map_err(BlurifyError::prompt)? {
            return Err(BlurifyError::ConfirmationDeclined);
        }

        reporter
            .report_started(&format!("Replacing {total} SVG files"), total)
            .await;

        let mut replaced = Vec::with_capacity(total);
        for path in files {
            if let Err(error) = self.storage.replace_with_empty(path).await {
                reporter.report_error(path, &format!("{error:#}")).await;
                return Err(BlurifyError::replace(path, error));
            }

            debug!(path = %path.display(), "replaced with empty file");
            reporter
                .report_message(&format!("Replaced {}", path.display()))
                .await;
            replaced.push(path.clone());
        }

        reporter.report_completed(replaced.len()).await;
        Ok(replaced)
    }
}
