//! rnet - find resistor networks and R-2R ladders from the command line.

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use resistor_net::{
    ladder, parse_value, ColorCode, Limits, NetCalc, RSeries, DEFAULT_TOLERANCE,
};
use serde::Serialize;

use std::process;

#[derive(Parser)]
#[command(name = "rnet")]
#[command(about = "Series/parallel resistor network finder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find networks that approximate a target resistance
    Solve {
        /// Target resistance, e.g. 3700, 3.7K or 2*1850
        #[arg(value_name = "TARGET", allow_hyphen_values = true)]
        target: String,

        /// Tolerance in percent
        #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,

        #[command(flatten)]
        parts: Parts,

        #[command(flatten)]
        limits: LimitArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Show colour and SMD codes for resistor values
    Codes {
        /// Values such as 4.7K or 220
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Size an R-2R ladder DAC
    Ladder {
        /// Value of R, e.g. 10K
        #[arg(value_name = "R")]
        r: String,

        /// Resolution in bits (2-24)
        #[arg(short, long, default_value_t = 8)]
        bits: u32,

        /// Reference voltage; non-positive values use 5 V
        #[arg(long, default_value_t = ladder::DEFAULT_VREF, allow_hyphen_values = true)]
        vref: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

/// Where the available resistor values come from. Defaults to the stock parts bin.
#[derive(Args)]
struct Parts {
    /// Draw parts from a standard series (e3, e6, e12, e24, e48, e96, e192)
    #[arg(short, long, conflicts_with = "values")]
    series: Option<String>,

    /// Comma separated list of available values, e.g. 100,4.7K,1M
    #[arg(long, value_delimiter = ',')]
    values: Vec<String>,
}

#[derive(Args)]
struct LimitArgs {
    /// Largest network, in resistors
    #[arg(short = 'n', long, default_value_t = Limits::default().max_size)]
    max_size: usize,

    /// Networks kept per network size
    #[arg(long, default_value_t = Limits::default().max_networks)]
    max_networks: usize,

    /// Matches listed
    #[arg(long, default_value_t = Limits::default().max_results)]
    max_results: usize,

    /// Leading matches shown with component codes
    #[arg(long, default_value_t = Limits::default().top_codes)]
    top_codes: usize,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Solve {
            target,
            tolerance,
            parts,
            limits,
            format,
        } => handle_solve(&target, tolerance, &parts, &limits, &format),
        Commands::Codes { values, format } => handle_codes(&values, &format),
        Commands::Ladder {
            r,
            bits,
            vref,
            format,
        } => handle_ladder(&r, bits, vref, &format),
    };

    process::exit(exit_code);
}

#[cfg(feature = "expr_builder")]
fn parse_target(input: &str) -> Result<f64, String> {
    resistor_net::eval_target(input).map_err(|e| e.to_string())
}

#[cfg(not(feature = "expr_builder"))]
fn parse_target(input: &str) -> Result<f64, String> {
    parse_value(input).ok_or_else(|| format!("Cannot read a value from '{}'", input))
}

fn calculator(parts: &Parts) -> Result<NetCalc, String> {
    if let Some(name) = &parts.series {
        return RSeries::by_name(name)
            .map(NetCalc::from_series)
            .ok_or_else(|| format!("Unknown series '{}'", name));
    }
    if parts.values.is_empty() {
        return Ok(NetCalc::stock());
    }
    parts
        .values
        .iter()
        .map(|v| parse_value(v).ok_or_else(|| format!("Cannot read a value from '{}'", v)))
        .collect::<Result<Vec<f64>, String>>()
        .map(NetCalc::new)
}

fn handle_solve(
    target: &str,
    tolerance: f64,
    parts: &Parts,
    limits: &LimitArgs,
    format: &OutputFormat,
) -> i32 {
    let result = parse_target(target).and_then(|target| {
        let calc = calculator(parts)?.limits(Limits {
            max_size: limits.max_size,
            max_networks: limits.max_networks,
            max_results: limits.max_results,
            top_codes: limits.top_codes,
        });
        debug!("{} available values", calc.available().len());
        calc.solve(target, Some(tolerance)).map_err(|e| e.to_string())
    });

    match result {
        Ok(solution) => {
            match format {
                OutputFormat::Human => print!("{}", solution),
                OutputFormat::Json => print_json(&solution),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_codes(values: &[String], format: &OutputFormat) -> i32 {
    let mut codes = Vec::with_capacity(values.len());
    for v in values {
        match parse_value(v) {
            Some(r) => codes.push(ColorCode::new(r)),
            None => {
                eprintln!("Error: Cannot read a value from '{}'", v);
                return 1;
            }
        }
    }

    match format {
        OutputFormat::Human => {
            for code in &codes {
                println!("{}", code);
            }
        }
        OutputFormat::Json => print_json(&codes),
    }
    0
}

fn handle_ladder(r: &str, bits: u32, vref: f64, format: &OutputFormat) -> i32 {
    let result = parse_value(r)
        .ok_or_else(|| format!("Cannot read a value from '{}'", r))
        .and_then(|r| ladder::ladder(r, bits, vref).map_err(|e| e.to_string()));

    match result {
        Ok(spec) => {
            match format {
                OutputFormat::Human => print!("{}", spec),
                OutputFormat::Json => print_json(&spec),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}
