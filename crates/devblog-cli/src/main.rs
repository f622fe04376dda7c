use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devblog_core::article::ArticleId;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "devblog")]
#[command(version, about = "DevBlog - browse developer articles and keep a reading list", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the latest articles
    Articles {
        /// Only show articles whose title, description or tags contain TERM
        #[arg(short, long)]
        search: Option<String>,

        /// Signed-in user id
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Show a single article
    Show {
        id: ArticleId,

        /// Signed-in user id
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Show the dashboard of a user
    Dashboard {
        #[arg(short, long)]
        user: String,

        /// Display name used in the greeting
        #[arg(long)]
        name: Option<String>,
    },
    /// List the saved article ids of a user
    Saved {
        #[arg(short, long)]
        user: String,
    },
    /// Save or unsave an article for a user
    Toggle {
        #[arg(short, long)]
        user: String,

        id: ArticleId,
    },
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = AppContext::load(cli.config)?;
    init_logging(&ctx.config.log_level);

    match cli.command {
        Commands::Articles { search, user } => {
            commands::articles::run(&ctx, search, user).await?
        }
        Commands::Show { id, user } => commands::show::run(&ctx, id, user).await?,
        Commands::Dashboard { user, name } => commands::dashboard::run(&ctx, user, name).await?,
        Commands::Saved { user } => commands::saved::list(&ctx, user)?,
        Commands::Toggle { user, id } => commands::saved::toggle(&ctx, user, id)?,
    }

    Ok(())
}
