use super::StorageBackend;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Clone, Debug)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(root)
            .with_context(|| format!("Failed to read directory: {}", root.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Not a directory: {}", root.display());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(error) => {
                    let path = error
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!(path = %path, %error, "skipping unreadable entry");
                }
            }
        }

        Ok(files)
    }

    fn copy_tree(source: &Path, dest: &Path) -> Result<u64> {
        std::fs::create_dir_all(dest)
            .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

        let mut copied = 0;
        for entry in WalkDir::new(source).min_depth(1) {
            let entry =
                entry.with_context(|| format!("Failed to walk directory: {}", source.display()))?;
            let relative = entry.path().strip_prefix(source).with_context(|| {
                format!("{} is outside of {}", entry.path().display(), source.display())
            })?;
            let target = dest.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                std::fs::create_dir_all(&target)
                    .with_context(|| format!("Failed to create directory: {}", target.display()))?;
            } else if file_type.is_symlink() {
                Self::copy_symlink(entry.path(), &target)?;
            } else {
                std::fs::copy(entry.path(), &target).with_context(|| {
                    format!(
                        "Failed to copy {} to {}",
                        entry.path().display(),
                        target.display()
                    )
                })?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    #[cfg(unix)]
    fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
        let pointee = std::fs::read_link(link)
            .with_context(|| format!("Failed to read link: {}", link.display()))?;
        std::os::unix::fs::symlink(&pointee, target)
            .with_context(|| format!("Failed to create link: {}", target.display()))
    }

    #[cfg(not(unix))]
    fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
        // リンク先の実体をコピーする
        std::fs::copy(link, target)
            .map(|_| ())
            .with_context(|| format!("Failed to copy {} to {}", link.display(), target.display()))
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || Self::walk_files(&root))
            .await
            .context("Failed to spawn blocking task for directory walk")?
    }

    async fn read_prefix(&self, path: &Path, len: usize) -> Result<Vec<u8>> {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let mut buffer = Vec::with_capacity(len);
        file.take(len as u64)
            .read_to_end(&mut buffer)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(buffer)
    }

    async fn remove_dir_all(&self, path: &Path) -> Result<()> {
        let metadata = match tokio::fs::symlink_metadata(path).await {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Failed to inspect: {}", path.display()));
            }
        };

        // ディレクトリ以外（ファイル・リンク）が置かれていてもそのまま消す
        if metadata.is_dir() {
            tokio::fs::remove_dir_all(path)
                .await
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        } else {
            tokio::fs::remove_file(path)
                .await
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
        }

        debug!(path = %path.display(), "removed");
        Ok(())
    }

    async fn mirror(&self, source: &Path, dest: &Path) -> Result<u64> {
        let (source, dest) = (source.to_path_buf(), dest.to_path_buf());
        tokio::task::spawn_blocking(move || Self::copy_tree(&source, &dest))
            .await
            .context("Failed to spawn blocking task for directory copy")?
    }

    async fn replace_with_empty(&self, path: &Path) -> Result<()> {
        let permissions = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?
            .permissions();

        tokio::fs::remove_file(path)
            .await
            .with_context(|| format!("Failed to delete file: {}", path.display()))?;

        tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create file: {}", path.display()))?;

        tokio::fs::set_permissions(path, permissions)
            .await
            .with_context(|| format!("Failed to restore permissions: {}", path.display()))?;

        Ok(())
    }
}
