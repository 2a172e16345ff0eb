use crate::core::{BlurifyError, BlurifyResult, FileEntry, FileKind};
use crate::storage::StorageBackend;
use anyhow::Result;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 形式判定のために読み込む先頭バイト数
pub const SNIFF_LEN: usize = 64;

/// 先頭バイト列から画像形式を推定する
pub fn sniff_raster(header: &[u8]) -> Option<ImageFormat> {
    image::guess_format(header).ok()
}

/// このビルドで読み込みと書き出しの両方ができる形式か
///
/// 例えば既定の機能では AVIF は書き出しのみ、DDS は読み込みのみ。
pub fn is_blurrable(format: ImageFormat) -> bool {
    format.reading_enabled() && format.writing_enabled()
}

/// 拡張子が `svg`（大文字小文字は区別しない）かどうか
pub fn is_vector_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// ディレクトリを走査してファイルを分類する
///
/// ラスター画像はファイル内容のシグネチャ、ベクター画像は拡張子で判定する。
/// 2つの判定は独立しており、互いに代用しない。
pub struct FileClassifier<'a, S: StorageBackend> {
    storage: &'a S,
}

impl<'a, S: StorageBackend> FileClassifier<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// 1ファイルを分類する（ラスター判定が優先）
    ///
    /// 画像として認識できても読み書きできない形式はラスター扱いにしない。
    pub async fn classify(&self, path: &Path) -> Result<FileKind> {
        let header = self.storage.read_prefix(path, SNIFF_LEN).await?;

        match sniff_raster(&header) {
            Some(format) if is_blurrable(format) => return Ok(FileKind::Raster(format)),
            Some(format) => {
                warn!(path = %path.display(), ?format, "skipping image format that cannot be re-encoded")
            }
            None => {}
        }

        Ok(if is_vector_path(path) {
            FileKind::Vector
        } else {
            FileKind::Other
        })
    }

    /// ルート以下の全ファイルを分類する
    pub async fn scan(&self, root: &Path) -> BlurifyResult<Vec<FileEntry>> {
        let mut entries = Vec::new();

        for path in self.list(root).await? {
            match self.classify(&path).await {
                Ok(kind) => entries.push(FileEntry { path, kind }),
                Err(error) => warn!(path = %path.display(), error = %error, "skipping unreadable file"),
            }
        }

        Ok(entries)
    }

    /// 内容からラスター画像と判定されたファイルの一覧
    pub async fn raster_images(&self, root: &Path) -> BlurifyResult<Vec<PathBuf>> {
        let entries = self.scan(root).await?;
        let vectors = entries.iter().filter(|entry| entry.kind.is_vector()).count();

        let images: Vec<PathBuf> = entries
            .into_iter()
            .filter(|entry| entry.kind.is_raster())
            .map(|entry| entry.path)
            .collect();

        debug!(
            root = %root.display(),
            raster = images.len(),
            vector = vectors,
            "classified files"
        );
        Ok(images)
    }

    /// 拡張子が svg のファイルの一覧（内容は読まない）
    pub async fn vector_images(&self, root: &Path) -> BlurifyResult<Vec<PathBuf>> {
        let images = self
            .list(root)
            .await?
            .into_iter()
            .filter(|path| is_vector_path(path))
            .collect();

        Ok(images)
    }

    async fn list(&self, root: &Path) -> BlurifyResult<Vec<PathBuf>> {
        self.storage
            .list_files(root)
            .await
            .map_err(|source| BlurifyError::scan(root, source))
    }
}
