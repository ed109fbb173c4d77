use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use selectel_fs::cli;
use selectel_fs::cli::Args;
use selectel_fs::config::load_selectel_config;
use selectel_fs::error::Result;
use selectel_fs::provider::connect;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("selectel_fs=warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

async fn run_app(args: Args) -> Result<()> {
    let config = load_selectel_config()?;
    let adapter = connect(&config).await?;
    cli::run(args, &adapter).await?;
    Ok(())
}
