use std::process::ExitCode;
use std::sync::Arc;

use alman_config::Config;
use alman_config::lookup::Source;
use alman_core::{Entry, OnlineDictionary, PageFetcher};
use alman_http::HttpFetcher;
use alman_lang_german::{Duden, Dwds};
use anyhow::{Context, bail};
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cli;

use self::cli::Args;

const DEBUG_FILTER: &str = "info,alman_app=debug,alman_core=debug,alman_http=debug,alman_lang_german=debug";

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.debug);

    let mut config = Config::new();
    args.apply(&mut config);

    match run(&args, &config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("exit with error: {:?}", e);
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, config: &Config) -> anyhow::Result<String> {
    let fetcher = HttpFetcher::new(&config.http).context("failed to build http client")?;
    let dictionary = dictionary(config.lookup.source, Arc::new(fetcher));

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            on_ctrl_c.cancel();
        }
    });

    let entry = lookup(dictionary.as_ref(), &args.word, config, &cancel).await?;

    if args.json {
        return entry.to_json().context("failed to marshal as json");
    }

    Ok(entry.render())
}

async fn lookup(
    dictionary: &dyn OnlineDictionary,
    word: &str,
    config: &Config,
    cancel: &CancellationToken,
) -> anyhow::Result<Entry> {
    let timeout = config.lookup.timeout();
    tracing::debug!("looking up '{}' in {} (timeout {:?})", word, dictionary.name(), timeout);

    // Dropping the lookup on timeout cancels its in-flight requests
    match tokio::time::timeout(timeout, dictionary.find(word, cancel)).await {
        Ok(result) => {
            result.with_context(|| format!("looking up '{}' in {}", word, dictionary.name()))
        }
        Err(_) => bail!(
            "looking up '{}' in {} timed out after {}s",
            word,
            dictionary.name(),
            config.lookup.timeout_seconds
        ),
    }
}

/// Printed to stderr regardless of the log filter
fn failure_message(error: &anyhow::Error) -> String {
    format!("exit with error: {:#}", error)
}

fn dictionary(source: Source, fetcher: Arc<dyn PageFetcher>) -> Box<dyn OnlineDictionary> {
    match source {
        Source::Duden => Box::new(Duden::new(fetcher)),
        Source::Dwds => Box::new(Dwds::new(fetcher)),
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
