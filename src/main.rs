// Search result scraper
//
// Prompts for one query, fetches the result page with the configured
// strategy, prints the records and writes them to CSV.

use anyhow::{Context, Result};
use kodegen_tools_serpscrape::{Reporter, ScrapeConfigBuilder, cli, run};
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
                .add_directive("chromiumoxide::handler=off".parse()?)
                .add_directive("chromiumoxide::conn=off".parse()?),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let config = ScrapeConfigBuilder::from_env()
        .context("Failed to read configuration from environment")?
        .build()
        .context("Invalid configuration")?;

    let query = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        match cli::prompt_query(&mut input, &mut output, config.result_count())? {
            Some(query) => query,
            None => return Ok(()),
        }
    };

    let mut reporter = Reporter::stdout();
    run(&config, &query, &mut reporter)
        .await
        .context("Failed to report search results")?;

    Ok(())
}
