use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use credible_common::{AnalysisOutcome, Config};
use credible_engine::{newsapi::to_search_error, Analyzer, NewsApiSearchService};
use newsapi_client::{ArticlesResponse, HeadlinesQuery};

#[derive(Parser)]
#[command(name = "credible", about = "Heuristic news credibility scoring")]
struct Cli {
    /// Print machine-readable JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score an article from its title and body
    Text {
        #[arg(long)]
        title: String,
        /// Article body
        #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
        content: Option<String>,
        /// Read the article body from a file
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
    /// Score an article by its URL
    Url { url: String },
    /// List current top headlines
    Headlines {
        #[arg(long, default_value = "us")]
        country: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("credible=info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.log_redacted();

    let search = NewsApiSearchService::from_config(&config)?;

    match cli.command {
        Command::Text {
            title,
            content,
            content_file,
        } => {
            let content = match (content, content_file) {
                (Some(content), _) => content,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!("either --content or --content-file is required"),
            };
            let analyzer = Analyzer::new(Arc::new(search));
            let outcome = analyzer.analyze_text(&title, &content).await;
            print_outcome(&outcome, cli.json)?;
        }
        Command::Url { url } => {
            let analyzer = Analyzer::new(Arc::new(search));
            let outcome = analyzer.analyze_url(&url).await;
            print_outcome(&outcome, cli.json)?;
        }
        Command::Headlines {
            country,
            category,
            page_size,
        } => {
            let query = HeadlinesQuery {
                country,
                category,
                page_size,
                ..HeadlinesQuery::default()
            };
            let headlines = search
                .client()
                .top_headlines(&query)
                .await
                .map_err(to_search_error)?;
            info!(total = headlines.total_results, "Fetched headlines");
            print_headlines(&headlines, cli.json)?;
        }
    }

    Ok(())
}

fn print_outcome(outcome: &AnalysisOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!(
        "{} ({}/100, confidence {:.0}%, {} ms)",
        outcome.verdict, outcome.score, outcome.confidence, outcome.elapsed_millis
    );
    for signal in &outcome.signals {
        println!(
            "  [{:+4}] {:<22} {}",
            signal.score_delta,
            signal.category.label(),
            signal.description
        );
    }
    if !outcome.related_articles.is_empty() {
        println!("Related coverage:");
        for article in &outcome.related_articles {
            println!("  - {} ({}) {}", article.title, article.source_name, article.url);
        }
    }
    Ok(())
}

fn print_headlines(headlines: &ArticlesResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&headlines.articles)?);
        return Ok(());
    }

    for article in &headlines.articles {
        println!(
            "{} | {} | {}",
            article.source.name,
            article.title.as_deref().unwrap_or("(untitled)"),
            article.url
        );
    }
    Ok(())
}
