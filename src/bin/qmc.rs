//! Quine-McCluskey Minimizer - Command Line Interface
//!
//! Reads minterms and don't-cares from a two-line problem file or from the
//! command line and prints the minimized expression.

use clap::Parser;
use qmc_logic::{Minimization, Minimizer, Problem, QmError};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Problem file: minterms on line 1, don't-cares on line 2
    #[arg(value_name = "FILE", conflicts_with_all = ["minterms", "dont_cares"])]
    input: Option<PathBuf>,

    /// Comma-separated minterms
    #[arg(short = 'm', long = "minterms", required_unless_present = "input")]
    minterms: Option<String>,

    /// Comma-separated don't-cares
    #[arg(short = 'd', long = "dont-cares")]
    dont_cares: Option<String>,

    /// Also print the product-of-sums form
    #[arg(short = 'p', long = "pos")]
    pos: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    // A logger may already be installed; keep going without ours in that case
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn solve(args: &Args) -> Result<Minimization, QmError> {
    let minimizer = Minimizer::default();
    match &args.input {
        Some(path) => Problem::from_file(path)?.solve(&minimizer),
        None => minimizer.minimize_text(
            args.minterms.as_deref().unwrap_or_default(),
            args.dont_cares.as_deref().unwrap_or_default(),
        ),
    }
}

fn write_report<W: Write>(
    writer: &mut W,
    result: &Minimization,
    elapsed: Duration,
    pos: Option<&str>,
) -> io::Result<()> {
    writeln!(writer, "Minimized Expression (SOP):")?;
    writeln!(writer, "{}", result.sop())?;
    writeln!(writer, "Number of Product Terms: {}", result.term_count())?;
    writeln!(writer, "Execution Time: {:.6} seconds", elapsed.as_secs_f64())?;
    if let Some(pos) = pos {
        writeln!(writer)?;
        writeln!(writer, "POS:")?;
        writeln!(writer, "{}", pos)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let start = Instant::now();
    let result = match solve(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let uncovered = result.uncovered_minterms();
    if !uncovered.is_empty() {
        log::info!("minterms not covered by the result: {:?}", uncovered);
    }

    let pos = if args.pos {
        match result.to_pos() {
            Ok(pos) => Some(pos),
            Err(e) => {
                eprintln!("Error converting to POS: {}", e);
                process::exit(1);
            }
        }
    } else {
        None
    };

    if let Some(ref output_path) = args.output_file {
        let written = File::create(output_path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, &result, elapsed, pos.as_deref())?;
            writer.flush()
        });
        if let Err(e) = written {
            eprintln!("Error writing output file '{}': {}", output_path.display(), e);
            process::exit(1);
        }
    } else if let Err(e) = write_report(&mut io::stdout().lock(), &result, elapsed, pos.as_deref()) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }
}
