//! MHV CLI - sample the Melbourne housing data and render the interactive dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mhv-cli",
    version,
    about = "Melbourne housing interactive plots toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mhv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    mhv_cmd::run(cli.command).await
}
