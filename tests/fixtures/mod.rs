// 統合テスト用のヘルパー
// wp-content 風のディレクトリツリーと実際の画像データを用意する

#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub const SVG_DATA: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"4\" height=\"4\"/></svg>";

/// 縞模様の画像（ぼかすと必ずバイト列が変わる）
pub fn striped_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

pub fn encode(format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    striped_image(16, 16).write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

/// wp-content/uploads を持つコンテンツルート
pub struct ContentDir {
    pub temp_dir: TempDir,
}

impl ContentDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("uploads")).unwrap();
        Self { temp_dir }
    }

    /// a.jpg（JPEG）, b.svg, 2024/05/c.png.bak（PNG）, readme.txt
    pub fn with_scenario() -> Self {
        let content = Self::new();
        content.write("a.jpg", &encode(ImageFormat::Jpeg));
        content.write("b.svg", SVG_DATA);
        content.write("2024/05/c.png.bak", &encode(ImageFormat::Png));
        content.write("readme.txt", b"not an image");
        content
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn uploads(&self) -> PathBuf {
        self.root().join("uploads")
    }

    pub fn backup(&self) -> PathBuf {
        self.root().join("uploads_copy")
    }

    pub fn write(&self, relative: &str, content: &[u8]) {
        let path = self.uploads().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> Vec<u8> {
        fs::read(self.uploads().join(relative)).unwrap()
    }

    /// `--content-dir` をこのルートに向けてバイナリを実行する
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, None)
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let mut child = blurify()
            .arg("--content-dir")
            .arg(self.root())
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute binary");

        {
            let mut pipe = child.stdin.take().unwrap();
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes()).unwrap();
            }
        }

        child.wait_with_output().unwrap()
    }
}

/// 環境変数の影響を受けない blurify コマンド
pub fn blurify() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_blurify"));
    command
        .env_remove("BLURIFY_CONTENT_DIR")
        .env_remove("BLURIFY_UPLOADS_DIR")
        .env_remove("BLURIFY_BACKUP_DIR")
        .env_remove("RUST_LOG");
    command
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
