// 進捗報告の具象実装

use super::traits::ProgressReporter;
use async_trait::async_trait;
use std::io::Write;
use std::path::Path;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_message(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    async fn report_warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("⚠️  Warning: {message}");
        }
    }

    async fn report_started(&self, label: &str, total: usize) {
        if !self.quiet {
            println!("🚀 {label}");
            if total > 0 {
                print!("📊 0/{total}");
                let _ = std::io::stdout().flush();
            }
        }
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if !self.quiet && total > 0 {
            // 同じ行を上書きしてカウンターを進める
            let percentage = (completed as f64 / total as f64) * 100.0;
            print!("\r📊 {completed}/{total} ({percentage:.1}%)");
            let _ = std::io::stdout().flush();
        }
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        if !self.quiet {
            eprintln!("\n❌ Error processing {}: {error}", file_path.display());
        }
    }

    async fn report_completed(&self, total_processed: usize) {
        if !self.quiet {
            println!("\n✅ Done. ({total_processed} files)");
        }
    }
}

/// 何もしない進捗報告実装（テスト・スクリプト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_message(&self, _message: &str) {}

    async fn report_warning(&self, _message: &str) {}

    async fn report_started(&self, _label: &str, _total: usize) {}

    async fn report_progress(&self, _completed: usize, _total: usize) {}

    async fn report_error(&self, _file_path: &Path, _error: &str) {}

    async fn report_completed(&self, _total_processed: usize) {}
}
