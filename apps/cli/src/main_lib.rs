use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use topstories::{FormatType, StoriesClient, StoriesResult, StoryRecord, Transport, API_KEY_ENV};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Fetch the current New York Times top stories for a section.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Section to fetch, e.g. `home`, `science`, `world`.
    pub section: String,

    /// Response format: `json` or `jsonp`.
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Print `json` results as a compact JSON string instead of pretty-printed records.
    #[arg(long)]
    pub json_string: bool,

    /// Also write the fetched records to this file (`json` format only).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// API key. Defaults to the `TOPSTORIES_API_KEY` environment variable.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Installs the global subscriber. `TOPSTORIES_LOG_FORMAT=json` switches to
/// JSON lines; the filter comes from `RUST_LOG` (default `info`).
///
/// Logs go to stderr so stdout carries only the fetched stories.
pub fn init_tracing() {
    let log_format =
        std::env::var("TOPSTORIES_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Fetches the requested section, prints it to `out` and optionally saves
/// the records to `--output`.
pub fn run<T: Transport>(
    args: &Args,
    client: &StoriesClient<T>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let format: FormatType = args.format.parse()?;
    if args.output.is_some() && !format.is_structured() {
        bail!("--output requires the json format");
    }

    let result = client
        .fetch(&args.section, Some(format.as_str()), args.json_string)
        .with_context(|| format!("Failed to fetch top stories for {}", args.section))?;

    match &result {
        StoriesResult::Records(records) => {
            writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
        }
        StoriesResult::JsonString(text) | StoriesResult::Callback(text) => {
            writeln!(out, "{}", text)?;
        }
    }

    if let Some(path) = &args.output {
        let records: Vec<StoryRecord> = match result {
            StoriesResult::Records(records) => records,
            StoriesResult::JsonString(text) => serde_json::from_str(&text)?,
            StoriesResult::Callback(_) => bail!("--output requires the json format"),
        };
        client
            .persist(path, &records)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Saved {} stories to {}", records.len(), path.display());
    }

    Ok(())
}
