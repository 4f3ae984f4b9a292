use ::std::io::{self, Write};

use ::anyhow::Result;
use ::clap::Parser;
use ::log::debug;
use ::simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use ::sortex::{faults, sorting};

#[derive(Parser, Debug)]
#[command(
    name = "sortex",
    version,
    about = "Console drills: provoked error checks, then interactive name sorting",
    long_about = "Runs two short console exercises in sequence. Part one provokes five distinct error conditions and reports each caught failure. Part two reads a sort order from stdin and prints a fixed list of names sorted that way."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the exercise output on stdout stays clean.
    let log_level =
        if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    debug!("starting sortex (v{})", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    writeln!(out, "\nPart 1. Exception checks.")?;
    faults::run_demonstration(&mut input, &mut out)?;

    writeln!(out, "\nPart 2. Sorting.")?;
    sorting::run_sorting(&mut input, &mut out)?;

    Ok(())
}
