//! gap-cli - Command line tool for the country indicators dashboard data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gap-cli",
    version,
    about = "Country indicators dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gap_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gap_cmd::run(cli.command).await
}
