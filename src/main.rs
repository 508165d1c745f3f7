use anyhow::Result;
use clap::Parser;
use skyshade::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    skyshade::run(cli).await
}
