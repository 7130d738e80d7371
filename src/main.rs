use anyhow::Result;
use autodocker::config::Config;
use autodocker::engine::DockerEngine;
use autodocker::models::catalog::BaseImageCatalog;
use autodocker::prompt::{ConsolePrompter, Prompter};
use autodocker::stages::{configure, generate, orchestrate};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

const BANNER: &str = r"
    _         _        ____             _
   / \  _   _| |_ ___ |  _ \  ___   ___| | _____ _ __
  / _ \| | | | __/ _ \| | | |/ _ \ / __| |/ / _ \ '__|
 / ___ \ |_| | || (_) | |_| | (_) | (__|   <  __/ |
/_/   \_\__,_|\__\___/|____/ \___/ \___|_|\_\___|_|
------------------------------------------------------
   AutoDocker - Automatically Generate Docker Images
";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short = 'f', long)]
    config_path: Option<String>,

    /// Directory to enumerate and use as the build context
    #[arg(short, long)]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Interactive wizard: configure images, generate build files, optionally build and run them
    Init,
}

fn main() -> Result<()> {
    // Log level is controlled via the RUST_LOG environment variable,
    // e.g. RUST_LOG=info autodocker init
    env_logger::init();

    let cli = Cli::parse();

    let config = match cli.config_path.as_deref() {
        Some(path) => Config::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };

    let root = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::Init => init(&config, &root),
    }
}

/// The interactive flow: configure, generate, then optionally build and run.
fn init(config: &Config, root: &Path) -> Result<()> {
    println!("{}", BANNER);

    let catalog = BaseImageCatalog::default();
    let mut prompter = ConsolePrompter::new();

    let images = configure::configure_images(&mut prompter, root, &config.scan, &catalog)?;

    let pairs = generate::generate_buildfiles(root, &images, &catalog);
    if pairs.is_empty() {
        info!("No build files were generated, nothing to build");
        return Ok(());
    }

    let auto_build = prompter.confirm(
        "Do you want to automatically build and run the Docker containers now?",
        true,
    )?;

    if auto_build {
        let engine = DockerEngine::new(&config.engine.binary);
        orchestrate::build_and_run(&engine, root, &pairs, &config.engine, true);
    }

    Ok(())
}
