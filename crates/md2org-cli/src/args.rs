use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md2org", version)]
#[command(
    about = "Convert an Obsidian markdown note into an org-roam file next to it",
    long_about = None
)]
pub struct Cli {
    /// Markdown file to convert
    pub infile: PathBuf,

    /// Relative path from the vault root to the daily-note directory [default: ./]
    #[arg(long, value_name = "DAILY_PATH")]
    pub daily_path: Option<String>,

    /// Relative path from the vault root to the asset directory [default: ./]
    #[arg(long, value_name = "ASSET_PATH")]
    pub asset_path: Option<String>,

    /// Config file with default paths [default: ~/.config/md2org/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Store the daily and asset paths in use as the new defaults
    #[arg(long)]
    pub save_config: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
