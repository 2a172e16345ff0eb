use crate::config::HostPaths;
use crate::prompt::{AssumeYes, ConfirmationPrompt, StdioPrompt};
use crate::reporting::ConsoleProgressReporter;
use crate::App;
use anyhow::Result;

/// replace_svg コマンドの実行
pub async fn execute_replace_svg(paths: HostPaths, yes: bool) -> Result<()> {
    let config = paths.resolve()?;

    println!("🔧 blurify - replace_svgコマンド");
    println!("📂 対象ディレクトリ: {}", config.source_dir().display());

    let mut prompt: Box<dyn ConfirmationPrompt> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdioPrompt::terminal())
    };

    let app = App::local();
    let reporter = ConsoleProgressReporter::new();
    let summary = app
        .replace_svg(&config, prompt.as_mut(), &reporter)
        .await?;

    if !summary.replaced_files.is_empty() {
        println!("\n📊 処理結果:");
        println!("   - 空ファイル化したSVG: {}", summary.replaced_files.len());
    }

    Ok(())
}
