use crate::config::HostPaths;
use crate::core::BackupOutcome;
use crate::reporting::ConsoleProgressReporter;
use crate::App;
use anyhow::Result;

/// blur コマンドの実行
pub async fn execute_blur(paths: HostPaths, backup: bool, sigma: f32) -> Result<()> {
    let config = paths.resolve()?.with_backup(backup).with_blur_sigma(sigma);

    println!("🔧 blurify - blurコマンド");
    println!("📂 対象ディレクトリ: {}", config.source_dir().display());
    if config.backup_enabled() {
        println!("💾 バックアップ先: {}", config.backup_dir().display());
    }

    let app = App::local();
    let reporter = ConsoleProgressReporter::new();
    let summary = app.blur(&config, &reporter).await?;

    println!("\n📊 処理結果:");
    println!("   - 対象画像数: {}", summary.total_files);
    println!("   - 処理済み: {}", summary.processed_files);
    if let BackupOutcome::Mirrored { files_copied } = summary.backup {
        println!("   - バックアップ済みファイル数: {files_copied}");
    }
    println!(
        "   - 総処理時間: {:.2}秒",
        summary.total_processing_time_ms as f64 / 1000.0
    );
    println!(
        "   - 平均処理時間: {:.2}ms/ファイル",
        summary.average_time_per_file_ms()
    );

    Ok(())
}
