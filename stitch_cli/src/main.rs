//! # Stitchwise CLI
//!
//! Terminal front end for the stitch_core calculators. Each subcommand
//! builds the same form state a web widget would, runs it through
//! stitch_core, and prints the result as text or JSON.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stitch_core::calculator::{GaugeForm, GlossaryForm, YardageForm};
use stitch_core::page_meta::PageMeta;
use stitch_core::search::filter_rows;
use stitch_core::tables::{
    find_hook_by_metric, find_hook_by_uk_label, find_hook_by_us_label, find_thread,
    hooks_for_weight, nearest_hook, HookSize, ThreadSize, HOOK_SIZES, THREAD_SIZES, YARN_WEIGHTS,
};
use stitch_core::{StitchConfig, StitchError, StitchResult, YardageUnit};

use crate::cli::{Cli, Command, EstimateArgs, GaugeArgs, HookArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> StitchResult<()> {
    let config = StitchConfig::load_or_default(cli.config.as_deref())?;
    debug!(?config, "resolved configuration");

    match &cli.command {
        Command::Estimate(args) => run_estimate(args, &config, cli.json),
        Command::Weights { query } => {
            let weights = filter_rows(YARN_WEIGHTS, query.as_deref().unwrap_or(""));
            if cli.json {
                return print_json(&weights);
            }
            println!("{:<12} {:>4} {:>9}  Hook", "Weight", "CYC", "yd/sq in");
            for w in weights {
                println!(
                    "{:<12} {:>4} {:>9.2}  {}",
                    w.display_name, w.cyc_number, w.yards_per_sq_in, w.recommended_hook
                );
            }
            Ok(())
        }
        Command::Hooks(args) => run_hooks(args, cli.json),
        Command::Threads { size } => {
            let threads: Vec<&ThreadSize> = match size {
                Some(size) => vec![find_thread(*size)
                    .ok_or_else(|| StitchError::invalid_input("size", format!("no thread size {size}")))?],
                None => THREAD_SIZES.iter().collect(),
            };
            if cli.json {
                return print_json(&threads);
            }
            println!("{:>6} {:>8}  {:<10} Typical use", "Size", "Hook", "Steel");
            for t in threads {
                println!(
                    "{:>6} {:>6.2}mm  {:<10} {}",
                    t.size, t.steel_hook_mm, t.steel_hook_label, t.typical_use
                );
            }
            Ok(())
        }
        Command::Glossary { query, tier } => {
            let form = GlossaryForm {
                query: query.clone().unwrap_or_default(),
                tier: tier.clone().unwrap_or_default(),
            };
            let terms = form.compute()?;
            if cli.json {
                return print_json(&terms);
            }
            if terms.is_empty() {
                println!("No matching stitches.");
            }
            for t in terms {
                let uk = match (t.uk_abbreviation, t.uk_name) {
                    (Some(abbr), Some(name)) => format!("  [UK: {abbr}, {name}]"),
                    (Some(abbr), None) => format!("  [UK: {abbr}]"),
                    (None, Some(name)) => format!("  [UK: {name}]"),
                    (None, None) => String::new(),
                };
                println!("{:<8} {} ({}){}", t.abbreviation, t.full_name, t.tier, uk);
                println!("         {}", t.description);
            }
            Ok(())
        }
        Command::Gauge(args) => run_gauge(args, &config, cli.json),
        Command::Meta { file } => {
            let text = std::fs::read_to_string(file).map_err(|e| {
                StitchError::invalid_input("file", format!("{}: {}", file.display(), e))
            })?;
            let meta: PageMeta = serde_json::from_str(&text)?;
            print!("{}", meta.render_head()?);
            Ok(())
        }
    }
}

fn run_estimate(args: &EstimateArgs, config: &StitchConfig, json: bool) -> StitchResult<()> {
    let form = YardageForm {
        width: args.width.clone(),
        height: args.height.clone(),
        unit: args.unit.clone().unwrap_or_default(),
        weight: args.weight.clone().unwrap_or_default(),
    };
    let report_in: YardageUnit = args.report_in.parse()?;
    let request = form.to_request(config)?;
    let result = stitch_core::estimate(&request, &config.estimator)?;

    if json {
        return print_json(&result);
    }

    let headline = report_in.convert(result.yards());
    println!("═══════════════════════════════════════");
    println!("  YARN ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Size:     {} x {} {}", request.width, request.height, request.unit);
    println!("  Weight:   {}", result.weight);
    println!("  Margin:   +{:.0}%", config.estimator.safety_margin * 100.0);
    println!();
    println!("Yarn needed:");
    println!("  {:.0} {}", headline.ceil(), report_in);
    println!("  ({} yd / {:.1} m, raw {:.1} yd)", result.primary_yards, result.secondary_meters, result.raw_yards);
    println!();
    println!("Skeins:");
    for p in &result.packages {
        println!("  {:>4} x {:.0} yd", p.count, p.package_size_yd);
    }
    Ok(())
}

fn run_hooks(args: &HookArgs, json: bool) -> StitchResult<()> {
    let hooks: Vec<&HookSize> = if let Some(mm) = args.mm {
        match find_hook_by_metric(mm) {
            Some(hook) => vec![hook],
            None => {
                let hook = nearest_hook(mm)
                    .ok_or_else(|| StitchError::invalid_dimension("mm", mm.to_string(), "Must be finite"))?;
                if !json {
                    println!("{mm} mm is not a standard size; nearest is {} mm", hook.metric_mm);
                }
                vec![hook]
            }
        }
    } else if let Some(us) = &args.us {
        vec![find_hook_by_us_label(us).ok_or_else(|| unknown_label("us", us))?]
    } else if let Some(uk) = &args.uk {
        vec![find_hook_by_uk_label(uk).ok_or_else(|| unknown_label("uk", uk))?]
    } else if let Some(weight) = &args.weight {
        stitch_core::tables::find_weight(weight)
            .ok_or_else(|| unknown_label("weight", weight))?;
        hooks_for_weight(weight)
    } else {
        HOOK_SIZES.iter().collect()
    };

    if json {
        return print_json(&hooks);
    }
    println!("{:>7}  {:<8} {:<4}  Yarn", "Metric", "US", "UK");
    for h in hooks {
        let weight = h.recommended_weight().map_or(h.recommended_weight, |w| w.display_name);
        println!("{:>5.2}mm  {:<8} {:<4}  {}", h.metric_mm, h.us_label, h.uk_label, weight);
    }
    Ok(())
}

/// A typed lookup key that matches no chart row.
fn unknown_label(field: &str, text: &str) -> StitchError {
    StitchError::invalid_input(field, format!("'{}' is not in the chart", text.trim()))
}

fn run_gauge(args: &GaugeArgs, config: &StitchConfig, json: bool) -> StitchResult<()> {
    let form = GaugeForm {
        swatch_stitches: args.stitches.clone(),
        swatch_rows: args.rows.clone(),
        swatch_size: args.swatch.clone(),
        width: args.width.clone(),
        height: args.height.clone(),
        unit: args.unit.clone().unwrap_or_default(),
    };
    let result = form.compute(config)?;
    if json {
        return print_json(&result);
    }
    println!("Gauge: {:.2} st/in, {:.2} rows/in", result.stitches_per_inch, result.rows_per_inch);
    println!("Chain {} stitches and work {} rows.", result.stitches, result.rows);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> StitchResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
