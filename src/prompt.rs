use anyhow::{Context, Result};
use mockall::automock;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// 破壊的な操作の前にユーザーへ確認を求めるトレイト
#[automock]
pub trait ConfirmationPrompt {
    /// `true` なら続行
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// 入出力ストリームを使った対話的な確認
pub struct StdioPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl StdioPrompt<StdinLock<'static>, Stdout> {
    /// 標準入力・標準出力を使う
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompt for StdioPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.writer, "⚠️  {question} [y/N]: ")?;
        self.writer.flush()?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("Failed to read confirmation from stdin")?;

        // EOF は拒否として扱う
        if read == 0 {
            writeln!(self.writer)?;
            return Ok(false);
        }

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

/// 常に続行する（--yes 指定時）
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl ConfirmationPrompt for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}
