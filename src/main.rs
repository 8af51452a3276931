use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(about = "Convert Setgraph workout exports into a compact tabular log", long_about = None)]
struct Args {
    /// Path to the exported log (omit when reading from the clipboard)
    input: Option<PathBuf>,

    /// Read the export from the system clipboard instead of a file
    #[arg(short, long)]
    clipboard: bool,

    /// Reorder each session's sets by the name order in this file
    #[arg(short, long, value_name = "FILE")]
    sort: Option<PathBuf>,

    /// Write to a date-named file (YYYYMMDD.out) instead of stdout
    #[arg(short = 'f', long)]
    file: bool,

    /// Print parsed sessions as JSON instead of the tabular form
    #[arg(long)]
    json: bool,

    /// Suppress informational messages (only errors)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = read_input(&args)?;
    let reference = match &args.sort {
        Some(path) => Some(fs::read_to_string(path).with_context(|| {
            format!("Failed to read sort reference {}", path.display())
        })?),
        None => None,
    };

    let output = if args.json {
        sessions_json(&raw, reference.as_deref())?
    } else {
        liftlog::convert(&raw, reference.as_deref())?
    };

    if args.file {
        let name = format!("{}.out", chrono::Local::now().format("%Y%m%d"));
        fs::write(&name, &output).with_context(|| format!("Failed to write {name}"))?;
        if !args.quiet {
            eprintln!("Output saved to {name}");
        }
    } else if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    if args.clipboard {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open the clipboard")?;
        return clipboard
            .get_text()
            .context("Failed to read text from the clipboard");
    }

    let path = args
        .input
        .as_ref()
        .context("no input file provided (or pass --clipboard)")?;
    if !args.quiet {
        eprintln!("Processing export: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Debug surface: the parsed sessions as pretty JSON.
fn sessions_json(raw: &str, reference: Option<&str>) -> Result<String> {
    let lines = liftlog::clean(raw);
    let mut sessions = liftlog::parse_sessions(&lines)?;
    if let Some(reference) = reference {
        let ranks = liftlog::reference_ranks(reference);
        liftlog::sort_sessions(&mut sessions, &ranks);
    }
    Ok(serde_json::to_string_pretty(&sessions)?)
}
