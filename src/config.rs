// 設定管理
// ホスト（CLI引数・環境変数）から受け取ったパスを検証済みの設定に変換する

use crate::core::{BlurifyError, BlurifyResult};
use crate::imaging::DEFAULT_BLUR_SIGMA;
use std::path::{Path, PathBuf};

/// コンテンツルート直下のメディアディレクトリ名
pub const UPLOADS_DIR_NAME: &str = "uploads";

/// コンテンツルート直下のバックアップディレクトリ名
pub const BACKUP_DIR_NAME: &str = "uploads_copy";

/// ホストから与えられたパス（未検証）
#[derive(Debug, Clone, Default)]
pub struct HostPaths {
    pub content_dir: PathBuf,
    pub uploads_dir: Option<PathBuf>,
    pub backup_dir: Option<PathBuf>,
}

impl HostPaths {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            uploads_dir: None,
            backup_dir: None,
        }
    }

    pub fn with_uploads_dir(mut self, uploads_dir: Option<PathBuf>) -> Self {
        self.uploads_dir = uploads_dir;
        self
    }

    pub fn with_backup_dir(mut self, backup_dir: Option<PathBuf>) -> Self {
        self.backup_dir = backup_dir;
        self
    }

    /// 絶対パスに解決し、検証済みの設定を作る
    ///
    /// - メディアディレクトリ: 既定は `<content>/uploads`。存在するディレクトリであること。
    /// - バックアップ: 既定は `<content>/uploads_copy`。存在しなくてもよい。
    pub fn resolve(&self) -> BlurifyResult<BlurifyConfig> {
        let content_dir = normalize(&absolutize(&self.content_dir)?);

        let uploads_dir = match &self.uploads_dir {
            Some(dir) => absolutize(dir)?,
            None => content_dir.join(UPLOADS_DIR_NAME),
        };
        let source_dir = std::fs::canonicalize(&uploads_dir).map_err(|error| {
            BlurifyError::configuration(format!(
                "uploads directory {} is not accessible: {error}",
                uploads_dir.display()
            ))
        })?;
        if !source_dir.is_dir() {
            return Err(BlurifyError::configuration(format!(
                "uploads path {} is not a directory",
                source_dir.display()
            )));
        }

        let backup_dir = match &self.backup_dir {
            Some(dir) => normalize(&absolutize(dir)?),
            None => content_dir.join(BACKUP_DIR_NAME),
        };

        let config = BlurifyConfig::new(source_dir, backup_dir);
        config.validate()?;
        Ok(config)
    }
}

/// コマンド実行に使う設定
#[derive(Debug, Clone, PartialEq)]
pub struct BlurifyConfig {
    source_dir: PathBuf,
    backup_dir: PathBuf,
    backup_enabled: bool,
    blur_sigma: f32,
}

impl BlurifyConfig {
    pub fn new(source_dir: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            backup_dir: backup_dir.into(),
            backup_enabled: true,
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }

    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.backup_enabled = enabled;
        self
    }

    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = sigma;
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    pub fn backup_enabled(&self) -> bool {
        self.backup_enabled
    }

    pub fn blur_sigma(&self) -> f32 {
        self.blur_sigma
    }

    /// 設定の妥当性をチェック
    ///
    /// バックアップ先はメディアディレクトリと同一・内側・外側（祖先）のいずれでもいけない。
    /// 削除とコピーが互いのツリーを壊すため。
    pub fn validate(&self) -> BlurifyResult<()> {
        if !self.blur_sigma.is_finite() || self.blur_sigma <= 0.0 {
            return Err(BlurifyError::configuration(format!(
                "blur sigma must be a positive number, got {}",
                self.blur_sigma
            )));
        }

        if !self.source_dir.is_absolute() {
            return Err(BlurifyError::configuration(format!(
                "uploads directory must be absolute: {}",
                self.source_dir.display()
            )));
        }

        if self.backup_dir.starts_with(&self.source_dir) {
            return Err(BlurifyError::configuration(format!(
                "backup directory {} is inside the uploads directory {}",
                self.backup_dir.display(),
                self.source_dir.display()
            )));
        }

        if self.source_dir.starts_with(&self.backup_dir) {
            return Err(BlurifyError::configuration(format!(
                "backup directory {} contains the uploads directory {}",
                self.backup_dir.display(),
                self.source_dir.display()
            )));
        }

        Ok(())
    }
}

fn absolutize(path: &Path) -> BlurifyResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| {
            BlurifyError::configuration(format!("cannot resolve {}: {error}", path.display()))
        })
}

/// 存在する部分までシンボリックリンクを解決する
fn normalize(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => normalize(parent).join(name),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = BlurifyConfig::new("/srv/wp-content/uploads", "/srv/wp-content/uploads_copy");

        assert!(config.backup_enabled());
        assert_eq!(config.blur_sigma(), DEFAULT_BLUR_SIGMA);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BlurifyConfig::new("/srv/uploads", "/srv/uploads_copy")
            .with_backup(false)
            .with_blur_sigma(5.0);

        assert!(!config.backup_enabled());
        assert_eq!(config.blur_sigma(), 5.0);
        assert_eq!(config.source_dir(), Path::new("/srv/uploads"));
        assert_eq!(config.backup_dir(), Path::new("/srv/uploads_copy"));
    }

    #[test]
    fn test_validate_sigma() {
        for sigma in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = BlurifyConfig::new("/srv/uploads", "/srv/copy").with_blur_sigma(sigma);
            assert!(
                matches!(config.validate(), Err(BlurifyError::Configuration { .. })),
                "sigma {sigma} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_overlapping_paths() {
        let same = BlurifyConfig::new("/srv/uploads", "/srv/uploads");
        assert!(same.validate().is_err());

        let inside = BlurifyConfig::new("/srv/uploads", "/srv/uploads/backup");
        assert!(inside.validate().is_err());

        let ancestor = BlurifyConfig::new("/srv/wp-content/uploads", "/srv/wp-content");
        assert!(ancestor.validate().is_err());

        // 名前の前方一致だけなら問題ない
        let sibling = BlurifyConfig::new("/srv/uploads", "/srv/uploads_copy");
        assert!(sibling.validate().is_ok());
    }

    #[test]
    fn test_validate_relative_source() {
        let config = BlurifyConfig::new("uploads", "/srv/uploads_copy");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_defaults_from_content_dir() {
        let temp_dir = tempdir().unwrap();
        let content = temp_dir.path().join("wp-content");
        fs::create_dir_all(content.join("uploads")).unwrap();

        let config = HostPaths::new(&content).resolve().unwrap();
        let content = fs::canonicalize(&content).unwrap();

        assert_eq!(config.source_dir(), content.join("uploads"));
        assert_eq!(config.backup_dir(), content.join("uploads_copy"));
        assert!(config.backup_enabled());
    }

    #[test]
    fn test_resolve_explicit_paths() {
        let temp_dir = tempdir().unwrap();
        let media = temp_dir.path().join("media");
        fs::create_dir(&media).unwrap();
        let backup = temp_dir.path().join("not-yet/media-backup");

        let config = HostPaths::new(temp_dir.path())
            .with_uploads_dir(Some(media.clone()))
            .with_backup_dir(Some(backup))
            .resolve()
            .unwrap();

        let root = fs::canonicalize(temp_dir.path()).unwrap();
        assert_eq!(config.source_dir(), root.join("media"));
        assert_eq!(config.backup_dir(), root.join("not-yet/media-backup"));
    }

    #[test]
    fn test_resolve_missing_uploads_dir() {
        let temp_dir = tempdir().unwrap();

        let result = HostPaths::new(temp_dir.path()).resolve();
        assert!(matches!(result, Err(BlurifyError::Configuration { .. })));
    }

    #[test]
    fn test_resolve_uploads_is_file() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("uploads"), b"x").unwrap();

        let result = HostPaths::new(temp_dir.path()).resolve();
        assert!(matches!(result, Err(BlurifyError::Configuration { .. })));
    }

    #[test]
    fn test_resolve_rejects_backup_inside_uploads() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("uploads")).unwrap();

        let result = HostPaths::new(temp_dir.path())
            .with_backup_dir(Some(temp_dir.path().join("uploads/copy")))
            .resolve();
        assert!(result.is_err());
    }
}
