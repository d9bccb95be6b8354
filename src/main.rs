use anyhow::Result;
use portlite_scan::cli::Cli;
use portlite_scan::{init_tracing, scan};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    scan::run(cli).await
}
