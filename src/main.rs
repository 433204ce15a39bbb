mod input;
mod rank;
mod report;
mod tracing;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::input::{read_records, read_records_from_path};
use crate::rank::compute_records;
use crate::report::{ReportMode, render_report};

#[derive(Parser, Debug)]
#[command(name = "bravery-rank")]
#[command(version)]
#[command(about = "Rank name/score records and list the bravest entries")]
struct Cli {
    /// Input file (.gz accepted); reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: ReportMode,
}

fn main() {
    tracing::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let records = match &cli.input {
        Some(path) => read_records_from_path(path).map_err(|e| e.to_string())?,
        None => {
            let mut stdin = std::io::stdin().lock();
            read_records(&mut stdin).map_err(|e| e.to_string())?
        }
    };

    let output = compute_records(&records);
    let rendered = render_report(&output, cli.format).map_err(|e| e.to_string())?;

    match &cli.out {
        Some(path) => std::fs::write(path, rendered).map_err(|e| e.to_string())?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
