//! Entry point: parse CLI and dispatch to command handlers.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use fpl_stats::{
    cli::{Commands, FplStats},
    commands::{
        extract::{handle_extract, ExtractParams},
        plot::{handle_plot, PlotParams},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = FplStats::parse();

    match app.command {
        Commands::Extract {
            output,
            delay_ms,
            limit,
            base_url,
            debug,
        } => {
            let target = output.display().to_string();
            handle_extract(ExtractParams {
                output,
                base_url,
                delay: Duration::from_millis(delay_ms),
                limit,
                debug,
            })
            .await
            .with_context(|| format!("extract into {} failed", target))?;
        }

        Commands::Plot {
            input,
            output_dir,
            chart,
        } => {
            let source = input.display().to_string();
            handle_plot(PlotParams {
                input,
                output_dir,
                charts: chart.into_charts(),
            })
            .with_context(|| format!("plotting from {} failed", source))?;
        }
    }

    Ok(())
}
