mod config;
mod demo;
mod prelude;
mod storage;

use anyhow::Result;
use clap::Parser;
use studentdb_core::storage::{StudentRepository, TableProvisioner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, StoreArgs};
use crate::demo::{Status, Tone};
use crate::prelude::*;
use crate::storage::{DynamoDbRepository, InMemoryRepository};

/// StudentDB - Create, read, update and delete student records in DynamoDB
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the status lines.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studentdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(cli.store);

    tracing::info!(target_store = %config.target_display(), "Connecting");
    for line in config.table_config().describe() {
        tracing::debug!("{}", line);
    }

    if config.in_memory {
        let repo = InMemoryRepository::new(&config.table_name);
        run(&repo, &config).await
    } else {
        let repo = DynamoDbRepository::connect(&config).await;
        run(&repo, &config).await
    }
}

async fn run<R>(repo: &R, config: &Config) -> Result<()>
where
    R: StudentRepository + TableProvisioner,
{
    demo::run_demo(repo, &config.table_name, print_status).await?;

    tracing::info!("Done");
    Ok(())
}

fn print_status(status: Status) {
    let line = status.to_string();
    match status.tone() {
        Tone::Success => aprintln!("{}", p_g(&line)),
        Tone::Notice => aprintln!("{}", p_y(&line)),
        Tone::Failure => aprintln!("{}", p_r(&line)),
    }
}
