//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stitchwise", version, about = "Crochet calculators: yardage, hooks, gauge, glossary")]
pub struct Cli {
    /// TOML config file with estimator settings and defaults
    #[arg(long, global = true, env = "STITCHWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate yarn for a rectangular piece
    Estimate(EstimateArgs),
    /// List yarn weights
    Weights {
        /// Filter by text
        query: Option<String>,
    },
    /// Hook size chart and conversions
    Hooks(HookArgs),
    /// Crochet thread chart
    Threads {
        /// Show a single thread size
        #[arg(long)]
        size: Option<u8>,
    },
    /// Search the stitch glossary
    Glossary {
        /// Text to search for (abbreviation, name or description)
        query: Option<String>,
        /// Only show one tier (basic, intermediate, advanced)
        #[arg(long)]
        tier: Option<String>,
    },
    /// Stitch and row counts from a gauge swatch
    Gauge(GaugeArgs),
    /// Render head tags from a page metadata JSON file
    Meta {
        /// JSON file containing title, description, canonical_url, ...
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Finished width
    #[arg(long)]
    pub width: String,
    /// Finished height
    #[arg(long)]
    pub height: String,
    /// Unit of width and height (in, cm)
    #[arg(long)]
    pub unit: Option<String>,
    /// Yarn weight (e.g., worsted, "super bulky")
    #[arg(long)]
    pub weight: Option<String>,
    /// Unit to headline the quantity in (yd, m)
    #[arg(long, default_value = "yd")]
    pub report_in: String,
}

#[derive(Debug, Args)]
pub struct HookArgs {
    /// Look up a metric size in mm (nearest match if not in the chart)
    #[arg(long, conflicts_with_all = ["us", "uk", "weight"])]
    pub mm: Option<f64>,
    /// Look up a US label, letter or number (H/8, H, 8)
    #[arg(long, conflicts_with_all = ["uk", "weight"])]
    pub us: Option<String>,
    /// Look up a UK size
    #[arg(long, conflicts_with = "weight")]
    pub uk: Option<String>,
    /// Hooks recommended for a yarn weight
    #[arg(long)]
    pub weight: Option<String>,
}

#[derive(Debug, Args)]
pub struct GaugeArgs {
    /// Stitches counted across the swatch
    #[arg(long)]
    pub stitches: String,
    /// Rows counted up the swatch
    #[arg(long)]
    pub rows: String,
    /// Swatch side length
    #[arg(long, default_value = "4")]
    pub swatch: String,
    /// Target width
    #[arg(long)]
    pub width: String,
    /// Target height
    #[arg(long)]
    pub height: String,
    /// Unit for swatch and target (in, cm)
    #[arg(long)]
    pub unit: Option<String>,
}
