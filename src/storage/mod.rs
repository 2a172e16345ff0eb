use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

/// ファイルシステム操作を抽象化するストレージバックエンドのトレイト
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// ディレクトリ以下の通常ファイルを再帰的に列挙する
    ///
    /// ディレクトリとシンボリックリンクは含めない。読めないエントリは
    /// 警告を出してスキップし、ルート自体が読めない場合のみエラーを返す。
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// ファイル先頭から最大 `len` バイトを読み込む
    async fn read_prefix(&self, path: &Path, len: usize) -> Result<Vec<u8>>;

    /// ディレクトリを再帰的に削除する（存在しない場合は何もしない）
    async fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// `source` 以下のツリーを `dest` に丸ごとコピーし、コピーしたファイル数を返す
    async fn mirror(&self, source: &Path, dest: &Path) -> Result<u64>;

    /// ファイルを削除し、同じパスに空ファイルを作り直す
    async fn replace_with_empty(&self, path: &Path) -> Result<()>;
}
