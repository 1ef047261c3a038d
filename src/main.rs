use arena_mint::cli::Args;
use arena_mint::config::Vars;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() -> arena_mint::Result<()> {
    arena_mint::telemetry::setup_telemetry();

    // `.env` has to be loaded before clap reads INJECTIVE_NETWORK.
    let vars = Vars::from_process()?;
    let args = Args::parse();

    debug!("{args:#?}");

    args.run(&vars).await?;

    Ok(())
}
