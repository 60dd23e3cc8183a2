//! Doubt finder: reports "(?)" markers left in txt, odt and docx files

use anyhow::Context;
use clap::Parser;
use doubt_finder::cli::{Cli, Commands, ConfigAction};
use doubt_finder::input::InputManager;
use doubt_finder::output::ConsoleReporter;
use doubt_finder::scan::{select_directory, DirectoryWalker, DoubtScanner, ScanContext};
use doubt_finder::Config;
use log::{error, info};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config_path();
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    let result = match cli.command {
        Some(Commands::Config { action }) => show_config(action, &config, config_path),
        None => run_scan(cli.directory, &config),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run_scan(directory: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    if !config.output.color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut reporter = ConsoleReporter::new(io::stdout(), config.output.color);

    let root = select_directory(directory, &mut input, &mut reporter)
        .context("No directory to scan")?;
    info!("Scanning {}", root.display());
    reporter.blank_line()?;

    let walker = DirectoryWalker::new().with_follow_symlinks(config.walk.follow_symlinks);
    let context = ScanContext::new(&root, config.errors);
    DoubtScanner::new(context, InputManager::new(), &mut reporter)
        .scan_all(walker.walk(&root))
        .context("Failed to write scan results")?;

    reporter.blank_line()?;
    if config.output.pause_on_exit {
        reporter.prompt_quit()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    }

    Ok(())
}

fn show_config(action: Option<ConfigAction>, config: &Config, path: PathBuf) -> anyhow::Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let status = if path.exists() { "" } else { " (not present, defaults in use)" };
            println!("# {}{}", path.display(), status);
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}
