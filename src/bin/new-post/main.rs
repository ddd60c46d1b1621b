use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use blog_migrate::config::open_config;
use blog_migrate::new_post::{create_post, generate_seed};

/// Creates a new post directory with an empty header
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Title of the post
    title: Option<String>,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(title) = args.title else {
        bail!("No title argument provided\nUsage: new-post <post-title>");
    };

    let config = open_config(args.config_path.map(PathBuf::from))?;
    let seed = generate_seed();

    let post = create_post(&config.paths.new_posts_dir, &config.defaults.index_file_name, &title, &seed)
        .context("Error creating post")?;

    println!("Post created successfully!");
    println!("- File: {}", post.file_path.display());
    println!("- Seed: {}", post.seed);
    println!("- Image URL: {}", post.image_url);

    Ok(())
}
