//! MCA Dashboard - Main entry point
//!
//! Reads precomputed MCA results from JSON documents, shapes them into chart
//! series, and writes a static Plotly dashboard page.
//!
//! Module organization:
//! - `mca`: result model, shaping and themes
//! - `plotly_integration`: Plotly-specific rendering code
//! - `config`: dashboard configuration
//! - `pipeline`: shared generation pipeline

pub mod config;
pub mod mca;
pub mod pipeline;
pub mod plotly_integration;

use anyhow::Context;

#[tokio::main]
async fn main() {
    println!("MCA Dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Parse command-line arguments; flags map onto the MCA_* env vars
    let args: Vec<String> = std::env::args().collect();
    parse_args(&args);

    // Print environment info
    print_env_info();

    let config = config::DashboardConfig::from_env();

    match run(&config).await {
        Ok(result) => {
            println!(
                "\n✓ Dashboard generated: {} ({} charts{})",
                result.output_path.display(),
                result.n_charts,
                if result.geo_included {
                    ", regional map included"
                } else {
                    ""
                }
            );
        }
        Err(e) => {
            eprintln!("\n✗ Dashboard generation failed: {:#}", e);
            eprintln!("\nNote: the generator expects result documents such as:");
            eprintln!("  {}", config.results_path().display());
            eprintln!("  {} (optional)", config.geo_path().display());
            std::process::exit(1);
        }
    }
}

async fn run(config: &config::DashboardConfig) -> anyhow::Result<pipeline::DashboardResult> {
    pipeline::generate_dashboard(config)
        .await
        .context("data could not be loaded or rendered")
}

/// Parse command-line arguments and set environment variables
fn parse_args(args: &[String]) {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dataDir" if i + 1 < args.len() => {
                std::env::set_var("MCA_DATA_DIR", &args[i + 1]);
                i += 2;
            }
            "--resultsFile" if i + 1 < args.len() => {
                std::env::set_var("MCA_RESULTS_FILE", &args[i + 1]);
                i += 2;
            }
            "--geoFile" if i + 1 < args.len() => {
                std::env::set_var("MCA_GEO_FILE", &args[i + 1]);
                i += 2;
            }
            "--output" if i + 1 < args.len() => {
                std::env::set_var("MCA_OUTPUT", &args[i + 1]);
                i += 2;
            }
            "--theme" if i + 1 < args.len() => {
                std::env::set_var("MCA_THEME", &args[i + 1]);
                i += 2;
            }
            "--labelPositions" if i + 1 < args.len() => {
                std::env::set_var("MCA_LABEL_POSITIONS", &args[i + 1]);
                i += 2;
            }
            "--markerScale" if i + 1 < args.len() => {
                std::env::set_var("MCA_MARKER_SIZE_SCALE", &args[i + 1]);
                i += 2;
            }
            "--markerOffset" if i + 1 < args.len() => {
                std::env::set_var("MCA_MARKER_SIZE_OFFSET", &args[i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }
}

/// Print environment info for debugging
fn print_env_info() {
    for (name, var) in [
        ("data dir", "MCA_DATA_DIR"),
        ("output", "MCA_OUTPUT"),
        ("theme", "MCA_THEME"),
    ] {
        match std::env::var(var) {
            Ok(value) => println!("{}: {}", name, value),
            Err(_) => println!("{}: (default)", name),
        }
    }
    println!();
}
