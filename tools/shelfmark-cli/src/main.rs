//! Shelfmark CLI
//!
//! Browse the most popular books and look up similar titles from the
//! precomputed recommendation artifacts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shelfmark_core::{
    DEFAULT_POPULAR_COUNT, DEFAULT_TOP_K, ExclusionMode, RecommendConfig, RecommenderContext,
    ShelfmarkError,
};
use shelfmark_store::{
    ArtifactPaths, TitleSuggestion, default_artifact_dir, load_context, suggest_titles,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Number of close matches listed when a title is unknown.
const SUGGESTION_LIMIT: usize = 3;

/// CLI arguments
#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(about = "Book recommendations from precomputed similarity artifacts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding popular.json, books.json, pt.json and similarity_scores.json
    #[arg(short = 'A', long, env = "SHELFMARK_ARTIFACTS", global = true)]
    artifacts: Option<PathBuf>,

    /// Emit JSON lines instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend books similar to a title
    Recommend {
        /// Exact title, as listed by `shelfmark titles`
        title: String,

        /// Number of recommendations
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Drop the top-ranked row instead of the query's own row
        #[arg(long)]
        positional: bool,
    },
    /// Show the most popular books
    Popular {
        /// Number of books to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_POPULAR_COUNT)]
        limit: usize,
    },
    /// List the titles that can be used with `recommend`
    Titles {
        /// Show at most this many titles
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Load and validate the artifacts, then report their sizes
    Inspect,
}

#[derive(Debug, Serialize)]
struct ArtifactSummary {
    popular: usize,
    books: usize,
    unique_titles: usize,
    pivot_rows: usize,
    pivot_users: usize,
    similarity_dim: usize,
}

impl ArtifactSummary {
    fn of(ctx: &RecommenderContext) -> Self {
        Self {
            popular: ctx.popular().len(),
            books: ctx.catalog().len(),
            unique_titles: ctx.catalog().unique_titles(),
            pivot_rows: ctx.pivot().len(),
            pivot_users: ctx.pivot().users().len(),
            similarity_dim: ctx.similarity().dim(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(value).context("Failed to serialize output")?
    );
    Ok(())
}

/// Formats close matches for an unknown title, or `None` when there are none.
fn did_you_mean(hints: &[TitleSuggestion]) -> Option<String> {
    if hints.is_empty() {
        return None;
    }
    let mut message = String::from("Did you mean:\n");
    for hint in hints {
        message.push_str("  ");
        message.push_str(&hint.title);
        message.push('\n');
    }
    Some(message)
}

fn recommend(
    ctx: &RecommenderContext,
    title: &str,
    config: &RecommendConfig,
    json: bool,
) -> Result<()> {
    let results = match ctx.recommend_with(title, config) {
        Ok(results) => results,
        Err(err @ ShelfmarkError::TitleNotFound { .. }) => {
            let hints = suggest_titles(ctx, title, SUGGESTION_LIMIT);
            if let Some(message) = did_you_mean(&hints) {
                eprint!("{message}");
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        for result in &results {
            print_json(result)?;
        }
        return Ok(());
    }

    println!("Because you liked {title:?}...");
    for result in &results {
        println!("{:>2}. {} [{:.3}]", result.rank, result.book, result.score);
        println!("    {}", result.book.image_url);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.artifacts.unwrap_or_else(default_artifact_dir);
    debug!(dir = %dir.display(), "loading artifacts");
    let ctx = load_context(&ArtifactPaths::in_dir(&dir))
        .with_context(|| format!("Failed to load artifacts from {}", dir.display()))?;

    match cli.command {
        Commands::Recommend {
            title,
            top_k,
            positional,
        } => {
            let exclusion = if positional {
                ExclusionMode::DropTopRanked
            } else {
                ExclusionMode::ExcludeQuery
            };
            let config = RecommendConfig::new()
                .with_top_k(top_k)
                .with_exclusion(exclusion);
            recommend(&ctx, &title, &config, cli.json)?;
        }
        Commands::Popular { limit } => {
            let books = ctx.top_popular(limit);
            if cli.json {
                for book in books {
                    print_json(book)?;
                }
            } else {
                println!("Top {} most popular books", books.len());
                for (i, book) in books.iter().enumerate() {
                    println!("{:>3}. {book}", i + 1);
                }
            }
        }
        Commands::Titles { limit } => {
            let titles = ctx.titles();
            let shown = &titles[..limit.unwrap_or(titles.len()).min(titles.len())];
            if cli.json {
                print_json(&shown)?;
            } else {
                for title in shown {
                    println!("{title}");
                }
            }
        }
        Commands::Inspect => {
            let summary = ArtifactSummary::of(&ctx);
            info!(?summary, "artifacts valid");
            if cli.json {
                print_json(&summary)?;
            } else {
                println!("Artifacts in {} are valid", dir.display());
                println!("  popular books:   {}", summary.popular);
                println!(
                    "  catalog records: {} ({} unique titles)",
                    summary.books, summary.unique_titles
                );
                println!(
                    "  pivot table:     {} titles x {} users",
                    summary.pivot_rows, summary.pivot_users
                );
                println!(
                    "  similarity:      {0} x {0}",
                    summary.similarity_dim
                );
            }
        }
    }

    Ok(())
}
