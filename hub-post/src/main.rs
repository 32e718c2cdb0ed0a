//! hub-post - Compose a post for your social platforms

use std::io::Read;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::Parser;
use libsocialhub::logging::{self, LogFormat};
use libsocialhub::{
    Config, PlatformId, PostDraft, Result, SocialHub, SocialHubError,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hub-post")]
#[command(about = "Compose a post for your social platforms", long_about = None)]
struct Cli {
    /// Post content (reads from stdin if not provided)
    content: Option<String>,

    /// Target platform(s), comma-separated (twitter, facebook, instagram, linkedin)
    #[arg(short, long)]
    platform: Option<String>,

    /// Attach an image reference (repeatable)
    #[arg(short, long = "image", value_name = "REF")]
    images: Vec<String>,

    /// Schedule for later instead of publishing now (RFC 3339 timestamp)
    #[arg(long, value_name = "WHEN")]
    schedule_at: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        logging::init(LogFormat::Text, "debug");
    } else {
        logging::init(LogFormat::Text, "error");
    }

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default()?;

    let content = match cli.content {
        Some(content) => content,
        None => read_stdin()?,
    };

    let platforms = resolve_platforms(cli.platform.as_deref(), &config)?;

    let mut draft = PostDraft::new(content, platforms).with_images(cli.images);
    if let Some(when) = cli.schedule_at.as_deref() {
        draft = draft.scheduled_for(Some(parse_schedule(when)?));
    }

    let mut hub = SocialHub::from_config(&config);
    let post = hub.compose(draft)?;
    info!(post_id = %post.id, status = %post.status, "post created");

    match cli.format.as_str() {
        "json" => {
            let encoded = serde_json::to_string_pretty(&post)
                .map_err(|e| SocialHubError::Validation(format!("failed to encode post: {}", e)))?;
            println!("{}", encoded);
        }
        _ => {
            println!("{} [{}] {}", post.id, post.status, post.content);
            let names: Vec<&str> = post.platforms.iter().map(|p| p.display_name()).collect();
            println!("  platforms: {}", names.join(", "));
            if let Some(at) = post.scheduled_at {
                println!("  scheduled: {}", at.to_rfc3339());
            }
            if let Some(at) = post.published_at {
                println!("  published: {}", at.to_rfc3339());
            }
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| SocialHubError::Validation(format!("failed to read stdin: {}", e)))?;
    Ok(buffer)
}

/// Resolve the target platforms from the flag, falling back to config
/// defaults.
fn resolve_platforms(flag: Option<&str>, config: &Config) -> Result<Vec<PlatformId>> {
    let names: Vec<String> = match flag {
        Some(list) => list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => config.defaults.platforms.clone(),
    };

    names
        .iter()
        .map(|name| {
            PlatformId::from_str(name).map_err(|_| SocialHubError::NotFound(name.clone()))
        })
        .collect()
}

fn parse_schedule(when: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(when)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            SocialHubError::Validation(format!(
                "invalid schedule timestamp '{}': {} (expected RFC 3339, e.g. 2026-09-01T12:00:00Z)",
                when, e
            ))
        })
}
