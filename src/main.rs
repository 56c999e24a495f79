use std::io;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backoffice::config::{self, Config};
use backoffice::console::{Console, Terminal};
use backoffice::infrastructure::HttpBookRepository;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();

    // Check for --base-url CLI argument
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--base-url") {
        match args.get(pos + 1) {
            Some(val) => config = config.with_base_url(val),
            None => tracing::warn!("--base-url needs a value, using {}", config.api_base_url),
        }
    }

    tracing::info!("Back office using catalog service at {}", config.api_base_url);

    let repo = Arc::new(HttpBookRepository::new(config.api_base_url));
    let terminal = Terminal::new(io::stdin().lock(), io::stdout());

    Console::new(repo, terminal).run().await;
}
