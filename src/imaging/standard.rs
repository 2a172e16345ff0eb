use super::{DecodedImage, ImageBackend};
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

/// `image` クレートによる標準実装
#[derive(Clone, Debug, Default)]
pub struct StandardImageBackend;

impl StandardImageBackend {
    pub fn new() -> Self {
        Self
    }

    fn decode_blocking(path: &Path) -> Result<DecodedImage> {
        let reader = ImageReader::open(path)
            .with_context(|| format!("Failed to open image: {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Failed to read image header: {}", path.display()))?;

        let format = reader
            .format()
            .with_context(|| format!("Unrecognized image format: {}", path.display()))?;

        let image = reader
            .decode()
            .with_context(|| format!("Failed to decode {format:?} image: {}", path.display()))?;

        Ok(DecodedImage { image, format })
    }

    fn encode_blocking(decoded: &DecodedImage, path: &Path) -> Result<()> {
        // 先にメモリ上でエンコードし、成功した場合のみ上書きする
        let mut buffer = Vec::new();
        decoded
            .image
            .write_to(&mut Cursor::new(&mut buffer), decoded.format)
            .with_context(|| {
                format!(
                    "Failed to encode {:?} image: {}",
                    decoded.format,
                    path.display()
                )
            })?;

        std::fs::write(path, &buffer)
            .with_context(|| format!("Failed to write image: {}", path.display()))
    }
}

#[async_trait]
impl ImageBackend for StandardImageBackend {
    async fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::decode_blocking(&path))
            .await
            .context("Failed to spawn blocking task for image decoding")?
    }

    async fn blur(&self, decoded: DecodedImage, sigma: f32) -> Result<DecodedImage> {
        tokio::task::spawn_blocking(move || DecodedImage {
            image: decoded.image.blur(sigma),
            format: decoded.format,
        })
        .await
        .context("Failed to spawn blocking task for image blurring")
    }

    async fn encode(&self, decoded: DecodedImage, path: &Path) -> Result<()> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::encode_blocking(&decoded, &path))
            .await
            .context("Failed to spawn blocking task for image encoding")?
    }
}
