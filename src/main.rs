//! markbrief: summarize a Markdown or HTML document section by section.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use markbrief::{config, Briefer};
use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

#[derive(Parser)]
#[command(name = "markbrief")]
#[command(about = "Section-by-section summaries of Markdown and HTML documents", long_about = None)]
struct Args {
    /// Document to summarize (`.md` is read as Markdown, anything else as HTML)
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Output format: markdown or html
    #[arg(long, short = 'f')]
    format: Option<String>,

    /// Fraction of each section to keep, in (0, 1]
    #[arg(long, short = 'r')]
    ratio: Option<f64>,

    /// Write the brief here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(format) = args.format {
        cfg.format = format;
    }
    if let Some(ratio) = args.ratio {
        cfg.summary_ratio = ratio;
    }

    let brief = Briefer::new(cfg.summary_ratio).brief(&args.path, &cfg.format)?;

    match args.output {
        Some(output) => fs::write(output, brief)?,
        None => io::Write::write_all(&mut io::stdout(), brief.as_bytes())?,
    }
    Ok(())
}
