//! # CLI
//!
//! Command-line interface for the showroom site.
//!
//! Each command is a plain function (`cmd_*`) so integration tests can call
//! it directly without spawning the binary.

use crate::api;
use crate::config::SiteConfig;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use serde::Serialize;
use showroom_core::content::SiteContent;
use showroom_core::render::render_page;
use showroom_core::trace::{replay, ReplayReport, ScrollTrace};
use showroom_core::{Page, RegionId};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "showroom", version, about = "Showroom marketing site server and tools")]
pub struct Cli {
    /// JSON site configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the page over HTTP.
    Serve {
        /// Listen address, overrides `server.addr`.
        #[arg(long)]
        addr: Option<String>,
    },
    /// Render the page to a file, or stdout.
    Render {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the declared reveal regions.
    Regions,
    /// Replay a recorded scroll trace through the reveal observer.
    Replay {
        /// Trace file (JSON).
        trace: PathBuf,
    },
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = SiteConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { addr } => cmd_serve(config, addr).await,
        Commands::Render { output } => cmd_render(&config, output.as_deref()),
        Commands::Regions => cmd_regions(&config, cli.json),
        Commands::Replay { trace } => cmd_replay(&config, &trace, cli.json).map(|_| ()),
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Render the full HTML document for `config`.
pub fn render_html(config: &SiteConfig) -> String {
    let page = Page::compose(config.page_config());
    render_page(&page, SiteContent::kharisma(), &BTreeSet::new())
}

/// Serve the page, optionally on a different address.
pub async fn cmd_serve(mut config: SiteConfig, addr: Option<String>) -> Result<(), AppError> {
    if let Some(addr) = addr {
        config.server.addr = addr;
    }
    api::serve(config).await
}

/// Write the rendered page to `output`, or stdout when `None`.
pub fn cmd_render(config: &SiteConfig, output: Option<&Path>) -> Result<(), AppError> {
    let html = render_html(config);

    match output {
        Some(path) => {
            std::fs::write(path, &html).map_err(|e| AppError::file(path, e))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct RegionListing {
    regions: Vec<RegionId>,
    threshold: String,
    margin: String,
    class: String,
}

/// Print the regions the page declares for reveal.
pub fn cmd_regions(config: &SiteConfig, json: bool) -> Result<(), AppError> {
    let page = Page::compose(config.page_config());
    let listing = RegionListing {
        regions: page.reveal_regions(),
        threshold: config.reveal.threshold.to_string(),
        margin: config.reveal.margin.to_string(),
        class: config.reveal.class.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        println!("Reveal regions ({}):", listing.regions.len());
        for region in &listing.regions {
            println!("  {}", region);
        }
        println!("Threshold: {}", listing.threshold);
        println!("Margin:    {}", listing.margin);
        println!("Class:     {}", listing.class);
    }
    Ok(())
}

/// Load a trace file, replay it and print the report.
pub fn cmd_replay(config: &SiteConfig, trace_path: &Path, json: bool) -> Result<ReplayReport, AppError> {
    let text = std::fs::read_to_string(trace_path).map_err(|e| AppError::file(trace_path, e))?;
    let trace: ScrollTrace = serde_json::from_str(&text)?;

    if !trace.primitive {
        warn!("Trace has no visibility primitive; every region reveals at start");
    }

    debug!(
        regions = trace.regions.len(),
        steps = trace.steps.len(),
        "Replaying {}",
        trace_path.display()
    );
    let report = replay(&trace, config.reveal_options())?;
    for event in &report.events {
        debug!(step = event.step, region = %event.region, "Region revealed");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for event in &report.events {
            println!("step {:>3}: revealed {}", event.step, event.region);
        }
        println!(
            "{} revealed, {} pending after {} steps",
            report.revealed.len(),
            report.pending.len(),
            report.steps
        );
        for region in &report.pending {
            println!("  pending: {}", region);
        }
    }
    Ok(report)
}
