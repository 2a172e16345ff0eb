// テスト用の進捗報告モック実装
// 呼び出し順を含めて記録し、フロー全体の検証に使う

use super::traits::ProgressReporter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// 記録された報告イベント
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Message(String),
    Warning(String),
    Started { label: String, total: usize },
    Progress { completed: usize, total: usize },
    Error { file_path: PathBuf, error: String },
    Completed { total_processed: usize },
}

#[derive(Debug, Default, Clone)]
pub struct RecordingProgressReporter {
    pub events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl RecordingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Message(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn progress_ticks(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Progress { completed, total } => Some((completed, total)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait::async_trait]
impl ProgressReporter for RecordingProgressReporter {
    async fn report_message(&self, message: &str) {
        self.push(ReportEvent::Message(message.to_string()));
    }

    async fn report_warning(&self, message: &str) {
        self.push(ReportEvent::Warning(message.to_string()));
    }

    async fn report_started(&self, label: &str, total: usize) {
        self.push(ReportEvent::Started {
            label: label.to_string(),
            total,
        });
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.push(ReportEvent::Progress { completed, total });
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        self.push(ReportEvent::Error {
            file_path: file_path.to_path_buf(),
            error: error.to_string(),
        });
    }

    async fn report_completed(&self, total_processed: usize) {
        self.push(ReportEvent::Completed { total_processed });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_reporter_keeps_order() {
        let reporter = RecordingProgressReporter::new();

        reporter.report_started("Processing 2 images", 2).await;
        reporter.report_progress(1, 2).await;
        reporter.report_progress(2, 2).await;
        reporter.report_completed(2).await;

        assert_eq!(reporter.progress_ticks(), vec![(1, 2), (2, 2)]);
        assert_eq!(
            reporter.events().first(),
            Some(&ReportEvent::Started {
                label: "Processing 2 images".to_string(),
                total: 2
            })
        );
        assert_eq!(
            reporter.events().last(),
            Some(&ReportEvent::Completed { total_processed: 2 })
        );
    }

    #[tokio::test]
    async fn test_generated_mock() {
        let mut reporter = super::super::MockProgressReporter::new();
        reporter
            .expect_report_error()
            .withf(|path, error| path == Path::new("/a.jpg") && error.contains("corrupt"))
            .times(1)
            .return_const(());

        reporter.report_error(Path::new("/a.jpg"), "corrupt header").await;
    }
}
