//! gymdesk CLI entry point.

use std::sync::Arc;

use clap::Parser;
use gymdesk_client::cli::Cli;
use gymdesk_client::{commands, GymdeskClient, MemberRepository, RepositoryConfig};
use gymdesk_core::status::StatusCache;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymdesk_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RepositoryConfig::from_env();
    tracing::debug!(base_url = %cli.base_url, ?config, "Starting gymdesk");

    let store = GymdeskClient::new(&cli.base_url).with_request_timeout(config.request_timeout);
    let repository = MemberRepository::new(Arc::new(store), config);
    let mut statuses = StatusCache::new();
    let mut stdout = std::io::stdout().lock();

    commands::run(
        cli.command,
        cli.format,
        cli.quiet,
        &repository,
        &mut statuses,
        &mut stdout,
    )
    .await?;

    Ok(())
}
