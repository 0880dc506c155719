//! CLI entry point for solarblog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solarblog")]
#[command(version)]
#[command(about = "Markdown-backed blog content for the company website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Read posts from this directory instead of the configured one
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post with its rendered body
    Show {
        /// Post slug (file name without .md)
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,

        /// Post category
        #[arg(short = 'g', long)]
        category: Option<String>,
    },

    /// Serve posts as a JSON API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "solarblog=debug,info"
    } else {
        "solarblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let mut site = solarblog::Site::new(&base_dir)?;
    if let Some(dir) = cli.content_dir {
        site.set_content_dir(dir);
    }
    tracing::debug!("Using content directory {:?}", site.content_dir);

    match cli.command {
        Commands::List { r#type, json } => {
            solarblog::commands::list::run(&site, &r#type, json)?;
        }

        Commands::Show { slug, json } => {
            solarblog::commands::show::run(&site, &slug, json)?;
        }

        Commands::New {
            title,
            slug,
            category,
        } => {
            tracing::info!("Creating new post with title: {}", title);
            solarblog::commands::new::run(&site, &title, slug.as_deref(), category.as_deref())?;
        }

        Commands::Serve { port, ip } => {
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            solarblog::server::start(&site, &ip, port).await?;
        }

        Commands::Version => {
            println!("solarblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
