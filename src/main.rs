use anyhow::Result;
use clap::Parser;

use webtldr::core::config::AppConfig;
use webtldr::pipeline::Summarizer;

/// Fetch a web page and print a short markdown summary of it.
#[derive(Debug, Parser)]
#[command(name = "webtldr", version, about)]
struct Args {
    /// URL of the page to summarize
    url: String,

    /// Model identifier for the summary request
    #[arg(long, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// Cut extracted content to at most this many characters before
    /// prompt building
    #[arg(long, env = "WEBTLDR_MAX_CONTENT_CHARS")]
    max_content_chars: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    webtldr::setup_logging();

    let args = Args::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if args.max_content_chars.is_some() {
        config.max_content_chars = args.max_content_chars;
    }

    let summarizer = Summarizer::from_config(&config)?;
    let output = summarizer.display_summary(&args.url).await?;
    println!("{output}");

    Ok(())
}
