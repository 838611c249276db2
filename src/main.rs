use std::error::Error;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use rur::source::{FileSource, HttpSource, UsageSource};
use rur::types::METERED_PRICES;
use rur::{Config, Notifier, StateStore};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries only the status line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = report_usage().await {
        eprintln!("{} {}", "❌".red(), e);
        let mut cause = e.source();
        while let Some(c) = cause {
            eprintln!("   caused by: {}", c);
            cause = c.source();
        }
        std::process::exit(1);
    }
}

async fn report_usage() -> rur::Result<()> {
    let config = Config::from_env()?;

    let source: Box<dyn UsageSource> = match &config.usage_url {
        Some(url) => Box::new(HttpSource::new(url.as_str())),
        None => Box::new(FileSource::new(&config.usage_file)),
    };
    let store = StateStore::new(&config.state_file);
    let notifier = Notifier::new(config.webhook_url.as_str());

    let costs = rur::run::run(source.as_ref(), &store, &notifier, &METERED_PRICES).await?;

    println!(
        "{} Report published, period total {}",
        "✅".green(),
        costs.total
    );
    Ok(())
}
