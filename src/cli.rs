use std::path::PathBuf;

use clap::Parser;

use crate::api::Category;

#[derive(Parser, Debug)]
#[command(name = "newsdeck")]
#[command(about = "A terminal reader for Hacker News", long_about = None)]
pub struct Cli {
    /// Initial category: best, new or top
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Initial page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Custom config directory (default: ~/.config/newsdeck)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging (prints log path, sets DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,
}
