//! CLI entry point for wsblog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "wsblog")]
#[command(version)]
#[command(about = "List and inspect blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all posts
    #[command(alias = "ls")]
    List {
        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post directory name, e.g. 002-hello
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "wsblog=debug,info"
    } else {
        "wsblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let blog = wsblog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { json } => wsblog::commands::list::run(&blog, json)?,
        Commands::Show { slug, json } => wsblog::commands::show::run(&blog, &slug, json)?,
    }

    Ok(())
}
