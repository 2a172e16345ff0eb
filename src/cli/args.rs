use crate::imaging::DEFAULT_BLUR_SIGMA;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blurify")]
#[command(about = "Blur every raster image and blank every SVG under a media directory")]
#[command(version)]
pub struct Cli {
    /// Content root; uploads and backup default to directories inside it
    #[arg(long, global = true, env = "BLURIFY_CONTENT_DIR", default_value = ".")]
    pub content_dir: PathBuf,

    /// Media directory to process [default: <content-dir>/uploads]
    #[arg(long, global = true, env = "BLURIFY_UPLOADS_DIR")]
    pub uploads_dir: Option<PathBuf>,

    /// Backup destination [default: <content-dir>/uploads_copy]
    #[arg(long, global = true, env = "BLURIFY_BACKUP_DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Blur every raster image in the media directory, in place
    Blur {
        /// Back up the media directory first (--backup=false to skip)
        #[arg(
            long,
            default_value_t = true,
            action = ArgAction::Set,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        backup: bool,

        /// Gaussian blur strength
        #[arg(long, default_value_t = DEFAULT_BLUR_SIGMA)]
        sigma: f32,
    },

    /// Replace every SVG file in the media directory with an empty file
    #[command(name = "replace_svg", alias = "replace-svg")]
    ReplaceSvg {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
