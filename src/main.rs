use clap::Parser;
use tracing_subscriber::EnvFilter;

use platemate::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("platemate=warn"))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::run(&cli);

    Ok(())
}
