//! CLI interface for the doubt finder

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doubt-finder")]
#[command(about = "Find doubt markers \"(?)\" in txt, odt and docx files")]
#[command(long_about = "Recursively scans a directory for txt, odt and docx files and reports every line or paragraph containing the doubt marker \"(?)\". Without arguments the directory is asked for interactively.")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to scan (asked for when omitted or invalid)
    pub directory: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Report txt files that are not valid UTF-8
    #[arg(long)]
    pub show_decode_errors: bool,

    /// Do not report files that could not be opened for lack of permission
    #[arg(long)]
    pub hide_permission_errors: bool,

    /// Do not report unreadable documents and other read failures
    #[arg(long)]
    pub hide_other_errors: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the configuration file location
    Path,
}

impl Cli {
    /// Flags only ever move a setting away from its default, so they win over the file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.no_pause {
            config.output.pause_on_exit = false;
        }
        if self.no_color {
            config.output.color = false;
        }
        if self.show_decode_errors {
            config.errors.show_decode_errors = true;
        }
        if self.hide_permission_errors {
            config.errors.show_permission_errors = false;
        }
        if self.hide_other_errors {
            config.errors.show_other_errors = false;
        }
        if self.follow_symlinks {
            config.walk.follow_symlinks = true;
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }
}
