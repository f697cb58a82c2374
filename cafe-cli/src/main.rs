//! Café Clima CLI - query Open-Meteo daily aggregates for Brazilian states.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cafe-cli",
    version,
    about = "Brazilian coffee-climate data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cafe_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cafe_cmd::run(cli.command).await
}
