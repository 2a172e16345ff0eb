use blurify::cli::{execute_blur, execute_replace_svg, Cli, Commands};
use blurify::config::HostPaths;
use blurify::core::BlurifyError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = HostPaths::new(cli.content_dir)
        .with_uploads_dir(cli.uploads_dir)
        .with_backup_dir(cli.backup_dir);

    let result = match cli.command {
        Commands::Blur { backup, sigma } => execute_blur(paths, backup, sigma).await,
        Commands::ReplaceSvg { yes } => execute_replace_svg(paths, yes).await,
    };

    if let Err(error) = result {
        eprintln!("❌ Error: {error}");
        if let Some(suggestion) = error
            .downcast_ref::<BlurifyError>()
            .and_then(BlurifyError::suggestion)
        {
            eprintln!("💡 {suggestion}");
        }
        std::process::exit(1);
    }
}

// 診断ログは stderr、ユーザー向けの出力は stdout
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
