//! Shoecard CLI - render and inspect shoe listing cards.
//!
//! Commands:
//! - `shoecard render` - Render a catalog to an HTML page or fragment
//! - `shoecard classify` - Show each listing's variant
//! - `shoecard config` - Manage configuration

mod catalog;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::{ClassifyArgs, ConfigArgs, RenderArgs};

/// Shoecard - Render shoe listing cards
#[derive(Parser)]
#[command(name = "shoecard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Reference date for "new release" checks (YYYY-MM-DD, default: today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a catalog of listings to HTML
    Render(RenderArgs),

    /// Show the variant each listing renders with
    Classify(ClassifyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.today, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    ctx.output.debug(&format!("Reference date: {}", ctx.today));

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Classify(args) => commands::classify::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
