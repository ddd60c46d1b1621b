use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use blog_migrate::batch::BatchDriver;
use blog_migrate::config::open_config;
use blog_migrate::logger::configure_logger;

/// Migrates the posts of the old blog into the new blog layout
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. If empty, blog-migrate.toml is searched next to the executable,
    /// in the current directory and in the user config directory
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Migrating posts =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    info!("From {} to {}", config.paths.old_posts_dir.display(), config.paths.new_posts_dir.display());

    // Missing roots end the run with a non-zero exit code, failed posts do not
    let report = BatchDriver::new(&config).run().context("Migration aborted")?;

    println!();
    println!("{}", report);
    info!("Migration finished");

    Ok(())
}
