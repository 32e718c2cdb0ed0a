use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use libsocialhub::query::{filter_and_sort, HistoryQuery, SortOrder};
use libsocialhub::{Post, PostStatus};

#[derive(Parser, Debug)]
#[command(name = "hub-history")]
#[command(version, about = "Filter and sort a post history stream")]
#[command(long_about = r#"Filter and sort posts read as a JSON array from stdin.

EXAMPLES:
    # Show all posts, newest first (default)
    hub-post "Hello" -p twitter -f json | jq '[.]' | hub-history

    # Search content (case-insensitive substring)
    hub-history --search "announcement" < posts.json

    # Filter by status
    hub-history --status scheduled < posts.json
    hub-history --status published < posts.json

    # Oldest first
    hub-history --sort oldest < posts.json

    # Combine filters
    hub-history --search "rust" --status published --sort oldest < posts.json

    # JSON output for scripting
    hub-history --format json < posts.json | jq '.[].content'

    # JSONL output (one JSON object per line)
    hub-history --format jsonl < posts.json

OUTPUT FORMATS:
    text  - Human-readable lines with timestamps and platforms (default)
    json  - JSON array (complete data structure)
    jsonl - JSON lines, one object per line (streaming-friendly)

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (invalid input, unknown status, etc.)
"#)]
struct Args {
    /// Search posts by content
    #[arg(short, long, value_name = "TERM")]
    #[arg(help = "Keep posts containing this text (case-insensitive substring match)")]
    search: Option<String>,

    /// Filter by status
    #[arg(long, default_value = "all", value_name = "STATUS")]
    #[arg(value_parser = ["all", "draft", "scheduled", "published", "failed"])]
    status: String,

    /// Sort order by creation time
    #[arg(long, default_value = "newest", value_name = "ORDER")]
    #[arg(value_parser = ["newest", "oldest"])]
    sort: String,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let posts: Vec<Post> = if input.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&input).context("Failed to parse posts from stdin (expected a JSON array)")?
    };

    let query = build_query(&args)?;
    let matched = filter_and_sort(&posts, &query);

    render(&matched, &args.format)
}

fn build_query(args: &Args) -> Result<HistoryQuery> {
    let status = match args.status.as_str() {
        "all" => None,
        other => Some(
            other
                .parse::<PostStatus>()
                .map_err(anyhow::Error::msg)
                .context("Invalid status filter")?,
        ),
    };

    let sort = args
        .sort
        .parse::<SortOrder>()
        .map_err(anyhow::Error::msg)
        .context("Invalid sort order")?;

    Ok(HistoryQuery {
        search: args.search.clone().unwrap_or_default(),
        status,
        sort,
    })
}

fn render(posts: &[Post], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(posts).context("Failed to serialize posts")?
            );
        }
        "jsonl" => {
            for post in posts {
                println!(
                    "{}",
                    serde_json::to_string(post).context("Failed to serialize post")?
                );
            }
        }
        _ => {
            if posts.is_empty() {
                println!("No posts found");
                return Ok(());
            }
            for post in posts {
                let platforms: Vec<&str> =
                    post.platforms.iter().map(|p| p.display_name()).collect();
                println!(
                    "{}  [{}]  {}  ({})",
                    post.created_at.format("%Y-%m-%d %H:%M"),
                    post.status,
                    post.content,
                    platforms.join(", ")
                );
            }
        }
    }
    Ok(())
}
