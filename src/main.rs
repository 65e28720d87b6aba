mod error;
mod fetcher;
mod parser;
mod profile;
mod scraper;
mod server;
mod settings;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::error::ScrapeError;
use crate::fetcher::Fetcher;
use crate::profile::{group_thousands, ProfileRecord};
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "tiktok_scraper", about = "TikTok public profile analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (GET /api/tiktok/:username)
    Serve {
        /// Listen port (default: PORT / SCRAPER_PORT / 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Scrape one profile by handle or URL
    Profile {
        /// Handle (@name or name) or full profile URL
        identifier: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract a profile from a saved HTML page (no network)
    Parse {
        file: PathBuf,
        /// Identifier used as username fallback
        #[arg(short, long, default_value = "")]
        input: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;

    let outcome = match cli.command {
        Commands::Serve { port } => {
            let addr: SocketAddr = format!("{}:{}", settings.host, port.unwrap_or(settings.port))
                .parse()
                .context("Invalid listen address")?;
            let state = Arc::new(server::AppState {
                fetcher: Fetcher::new(&settings)?,
                analyzed_by: settings.analyzed_by.clone(),
            });
            server::start(addr, state).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Profile { identifier, json } => {
            let fetcher = Fetcher::new(&settings)?;
            scraper::scrape_profile(&fetcher, &identifier)
                .await
                .map(|p| (p, json))
        }
        Commands::Parse { file, input, json } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            parser::extract_profile(&html, &input).map(|p| (p, json))
        }
    };

    report(outcome)
}

fn report(outcome: Result<(ProfileRecord, bool), ScrapeError>) -> Result<ExitCode> {
    match outcome {
        Ok((profile, true)) => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok((profile, false)) => {
            print_profile(&profile);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.boundary_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_profile(p: &ProfileRecord) {
    println!("@{} ({}){}", p.username, p.nickname, if p.is_verified { " ✓" } else { "" });
    println!("{}", "-".repeat(40));
    println!("Followers: {:>14}", group_thousands(p.followers));
    println!("Following: {:>14}", group_thousands(p.following));
    println!("Likes:     {:>14}", group_thousands(p.likes));
    println!("Videos:    {:>14}", group_thousands(p.videos));
    if let Some(bio) = &p.bio {
        println!("\n{}", bio);
    }
    if let Some(avatar) = &p.avatar_url {
        println!("\nAvatar: {}", avatar);
    }
    if let Some(links) = &p.external_links {
        println!("\n--- Links ---");
        for link in links {
            println!("  {:<10} {}", link.platform, link.url);
        }
    }
}
