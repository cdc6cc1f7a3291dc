// Wed Feb 04 2026 - Alex

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use pattern_scan_bench::{
    bench::Driver,
    bench::TrialSource,
    corpus::read_corpus,
    scanner::Registry,
    utils::{format_bytes, init_logger},
};
use std::path::PathBuf;

const DEFAULT_REGION_SIZE: usize = 64 * 1024 * 1024;
const DEFAULT_TRIALS: usize = 512;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Differential benchmark for wildcard signature scanners", long_about = None)]
struct Args {
    /// Optional corpus file; its contents become the scan region.
    file: Option<PathBuf>,

    /// PRNG seed; 0 draws one from OS entropy and reports it.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Data-zone size in bytes for random-data mode; ignored with FILE.
    #[arg(long, default_value_t = DEFAULT_REGION_SIZE)]
    region_size: usize,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    init_logger(args.verbose);

    println!("{}", "Pattern Scan Benchmark".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let mut source = match build_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let mut registry = Registry::with_default_scanners();
    registry.seal();

    println!(
        "{} Registered {} scanners",
        "[+]".green(),
        registry.len()
    );
    println!(
        "{} Begin scan: seed 0x{:016X}, size 0x{:X} ({}), trials {}",
        "[*]".blue(),
        source.seed(),
        source.full_size(),
        format_bytes(source.full_size() as u64),
        args.trials
    );
    println!();

    let report = Driver::new(args.trials).run(&mut source, &mut registry);

    println!("{} Scan complete", "[+]".green());
    println!();

    report.print();
}

fn build_source(args: &Args) -> Result<TrialSource> {
    match &args.file {
        Some(path) => {
            println!("{} Scanning file: {}", "[*]".blue(), path.display());
            let content = read_corpus(path)?;
            Ok(TrialSource::from_corpus(&content, args.seed)?)
        }
        None => {
            println!("{} Scanning random data", "[*]".blue());
            Ok(TrialSource::random(args.region_size, args.seed)?)
        }
    }
}
