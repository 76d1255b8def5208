use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::posts::UserId;

/// Browse posts grouped by author.
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about)]
#[command(group(ArgGroup::new("mode").args(["print", "replay"])))]
pub struct Cli {
    /// Config file (default: <config dir>/postboard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the posts endpoint
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Preselect a user (requires --print or --replay)
    #[arg(long, value_name = "ID", requires = "mode")]
    pub user: Option<UserId>,

    /// Fetch once, print the board to stdout and exit
    #[arg(long, conflicts_with = "replay")]
    pub print: bool,

    /// Fold JSON-lines actions from a file and print the result (no network)
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Write logs to this file (also: POSTBOARD_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
