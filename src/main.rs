use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;

use palisade::config::Config;
use palisade::oracle::gemini::GeminiOracle;
use palisade::scan::models::{ModerationRequest, ModerationStatus};
use palisade::scan::Moderator;

/// Palisade: fail-open content moderation gateway.
///
/// Routes user-submitted text, images, and video to a multimodal
/// classifier and returns an approved/flagged verdict. Pipeline failures
/// approve rather than block.
#[derive(Parser)]
#[command(name = "palisade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the moderation HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Scan one piece of content from the command line
    Scan {
        /// Text content to scan
        #[arg(default_value = "")]
        content: String,

        /// Remote media URL to scan
        #[arg(long)]
        media_url: Option<String>,

        /// Base64-encoded media bytes to scan
        #[arg(long)]
        media_b64: Option<String>,

        /// Declared content type: text, image, video, or audio
        #[arg(long, default_value = "text")]
        content_type: String,

        /// Print the raw verdict JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("palisade=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            palisade::web::run_server(config, port, &bind).await?;
        }

        Commands::Scan {
            content,
            media_url,
            media_b64,
            content_type,
            json,
        } => {
            let config = Config::load()?;
            config.require_oracle()?;

            let oracle = Arc::new(GeminiOracle::new(&config)?);
            let moderator = Moderator::new(oracle)?;

            let request = ModerationRequest {
                content,
                media_url,
                media_b64,
                content_type: Some(content_type),
            };

            let verdict = moderator.moderate(&request).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
                return Ok(());
            }

            let status = match verdict.moderation_status {
                ModerationStatus::Approved => "approved".green().bold(),
                ModerationStatus::Flagged => "flagged".red().bold(),
            };
            println!("Verdict: {status}");
            if let Some(reason) = &verdict.flag_reason {
                println!("  Reason:   {reason}");
            }
            if let Some(category) = verdict.category {
                println!("  Category: {}", category.as_str());
            }
            println!("  Model:    {}", verdict.model_used.dimmed());
        }
    }

    Ok(())
}
