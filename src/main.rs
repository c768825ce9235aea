use bingserp::search::{BingSearch, Credential, StopReason};
use bingserp::{cli, config, output};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = config::load_config(&cli)?;
    tracing::debug!(
        search_url = %config.search_url,
        credential_url = %config.credential_url,
        timeout_secs = config.request_timeout_secs,
        headers = config.headers.len(),
        "Config loaded"
    );

    let searcher = BingSearch::from_config(&config)?;

    match cli.command {
        cli::Commands::Search {
            query,
            skip_credential_doc,
            format,
            ..
        } => {
            let query = query.join(" ");
            let limit = config.default_limit;

            let outcome = if skip_credential_doc {
                let credential = Credential::fallback(searcher.settings().fallback_cookie.clone());
                searcher.search_with(&query, limit, &credential).await?
            } else {
                searcher.perform_search(&query, limit).await?
            };

            if outcome.stop == StopReason::Exhausted && outcome.results.len() < limit {
                tracing::warn!(
                    returned = outcome.results.len(),
                    limit,
                    "Fewer results than requested; Bing ran out of results or blocked the request"
                );
            }

            let rendered = match format {
                cli::OutputFormat::Json => output::render_json(&outcome.results)?,
                cli::OutputFormat::Text => output::render_text(&outcome.results),
            };
            println!("{rendered}");
        }
        cli::Commands::Credential { .. } => {
            let credential = searcher.credential().await;
            println!("{}", output::describe_credential(&credential));
        }
    }

    Ok(())
}
