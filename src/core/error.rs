// blurify のエラー型定義
// I/O 境界は anyhow、コマンドの失敗種別は thiserror の列挙型で表現する

use std::path::{Path, PathBuf};
use thiserror::Error;

/// コマンド実行時のエラー種別
#[derive(Error, Debug)]
pub enum BlurifyError {
    #[error("Backup of {} failed: {source:#}", .path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("No images have been found.")]
    NoImagesFound { path: PathBuf },

    #[error("Failed to blur {}: {source:#}", .path.display())]
    ImageProcessing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Operation cancelled, no files were changed.")]
    ConfirmationDeclined,

    #[error("Failed to read confirmation: {source:#}")]
    Prompt {
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to scan {}: {source:#}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to replace {}: {source:#}", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl BlurifyError {
    /// バックアップ失敗エラーの作成
    pub fn backup_failed(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::BackupFailed {
            path: path.into(),
            source,
        }
    }

    /// 画像が見つからないエラーの作成
    pub fn no_images_found(path: impl Into<PathBuf>) -> Self {
        Self::NoImagesFound { path: path.into() }
    }

    /// 画像処理エラーの作成
    pub fn image_processing(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::ImageProcessing {
            path: path.into(),
            source,
        }
    }

    /// 確認入力エラーの作成
    pub fn prompt(source: anyhow::Error) -> Self {
        Self::Prompt { source }
    }

    /// 走査エラーの作成
    pub fn scan(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Scan {
            path: path.into(),
            source,
        }
    }

    /// SVG置換エラーの作成
    pub fn replace(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Replace {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// エラーに関連するパス（あれば）
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::BackupFailed { path, .. }
            | Self::NoImagesFound { path }
            | Self::ImageProcessing { path, .. }
            | Self::Scan { path, .. }
            | Self::Replace { path, .. } => Some(path),
            Self::ConfirmationDeclined | Self::Prompt { .. } | Self::Configuration { .. } => None,
        }
    }

    /// ユーザー自身が中断したかどうか
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::ConfirmationDeclined)
    }

    /// エラー解決のための提案
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::BackupFailed { .. } => {
                Some("Check free disk space and permissions, or rerun with --backup=false")
            }
            Self::NoImagesFound { .. } => Some("Check --uploads-dir / --content-dir"),
            Self::ImageProcessing { .. } => {
                Some("The file may be corrupt; restore it from the backup or remove it")
            }
            Self::Configuration { .. } => Some("Run with --help to see the path options"),
            _ => None,
        }
    }
}

/// blurify の結果型
pub type BlurifyResult<T> = std::result::Result<T, BlurifyError>;
