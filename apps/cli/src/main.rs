mod main_lib;

use clap::Parser;
use main_lib::{init_tracing, run, Args};
use topstories::{ClientConfig, StoriesClient};

fn main() -> anyhow::Result<()> {
    // Loads `.env` before clap reads `TOPSTORIES_API_KEY`.
    let config = ClientConfig::from_env();
    let args = Args::parse();
    init_tracing();

    tracing::debug!("Using base URL {}", config.base_url);
    let client = StoriesClient::with_config(args.api_key.clone().unwrap_or_default(), config)?;

    run(&args, &client, &mut std::io::stdout().lock())
}
