//! copydesk - an editorial consistency checker for Markdown blogs

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copydesk::cli::Cli;
use copydesk::report::EXIT_IO;

fn main() {
    // Initialize tracing; logs go to stderr so the report stays clean
    // on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copydesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let code = match copydesk::cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            EXIT_IO
        }
    };
    std::process::exit(code);
}
