use anyhow::Result;
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use mockall::automock;
use std::path::Path;

pub mod standard;

/// 既定のぼかし強度（ガウスぼかしのシグマ）
pub const DEFAULT_BLUR_SIGMA: f32 = 2.0;

/// デコード済みの画像と元のファイル形式
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    /// 保存時に使う形式（ファイル内容から判定したもの）
    pub format: ImageFormat,
}

impl DecodedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// 画像のデコード・ぼかし・エンコードを抽象化するトレイト
///
/// 3つの工程はそれぞれ独立して差し替え・テストできる。
#[automock]
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// ファイルから画像を読み込む
    async fn decode(&self, path: &Path) -> Result<DecodedImage>;

    /// ぼかしをかけた画像を返す（形式はそのまま）
    async fn blur(&self, image: DecodedImage, sigma: f32) -> Result<DecodedImage>;

    /// 画像を元の形式でエンコードし、パスに書き込む
    async fn encode(&self, image: DecodedImage, path: &Path) -> Result<()>;
}
