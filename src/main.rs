// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `trunk` - print the Wirtinger trunk bound of a strand structure file.

use std::fs::File;
use std::io::BufReader;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use wirtinger_trunk::{search_bound, Result, SearchOptions, StrandStructure};

/// Compute the Wirtinger trunk bound (6 or 8) of a bridge number four diagram.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file mapping each strand label to its arc sequence and over-crossings
    structure: String,

    /// Search the seed triples on a rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Seed triples per parallel work unit
    #[arg(long, default_value_t = 32)]
    chunk_size: usize,

    /// Print the full search report as JSON
    #[arg(long)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            parallel: self.parallel,
            threads: self.threads,
            chunk_size: self.chunk_size,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Reading strand structure from {}", args.structure);
    let structure = StrandStructure::from_reader(BufReader::new(File::open(&args.structure)?))?;
    info!("{} strands", structure.len());

    let report = search_bound(&structure, &args.options())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Wirtinger trunk is {}", report.bound);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!("{args:?}");

    if let Err(err) = run(&args) {
        error!("{err}");
        eprintln!("trunk: {err}");
        process::exit(1);
    }
}
