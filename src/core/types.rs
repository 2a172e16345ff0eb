// 処理に関連するデータ型定義

use image::ImageFormat;
use std::fmt;
use std::path::PathBuf;

/// ファイルの分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 内容のシグネチャから判定されたラスター画像
    Raster(ImageFormat),
    /// 拡張子から判定されたベクター画像（SVG）
    Vector,
    /// 対象外
    Other,
}

impl FileKind {
    pub fn is_raster(&self) -> bool {
        matches!(self, Self::Raster(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector)
    }
}

/// 走査で見つかったファイルとその分類
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// バックアップ工程の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// バックアップを作成した（コピーしたファイル数）
    Mirrored { files_copied: u64 },
    /// バックアップは無効化されていた
    Skipped,
}

/// blur コマンド全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct BlurSummary {
    pub backup: BackupOutcome,
    pub total_files: usize,
    pub processed_files: usize,
    pub total_processing_time_ms: u64,
}

impl BlurSummary {
    pub fn average_time_per_file_ms(&self) -> f64 {
        if self.processed_files == 0 {
            0.0
        } else {
            self.total_processing_time_ms as f64 / self.processed_files as f64
        }
    }
}

/// replace_svg コマンドのサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceSummary {
    pub replaced_files: Vec<PathBuf>,
}

/// blur コマンドの状態遷移
///
/// `Idle → BackingUp → Scanning → Processing → Done`。
/// バックアップ失敗・画像ゼロ件・個別ファイルの失敗は `Aborted` に遷移する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurPhase {
    Idle,
    BackingUp,
    Scanning,
    Processing,
    Done,
    Aborted,
}

impl fmt::Display for BlurPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::BackingUp => "backing-up",
            Self::Scanning => "scanning",
            Self::Processing => "processing",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}
