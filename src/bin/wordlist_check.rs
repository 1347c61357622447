use clap::Parser;
use std::path::PathBuf;
use bitphrase::{
    io_utils::{path_cli_error, simple_cli_error, CliError},
    Wordlist, WORDLIST_SIZE,
};

/// Report whether a wordlist file is a complete set of 2048 unique words.
#[derive(Parser)]
struct Args {
    /// Wordlist file, one word per line
    input: PathBuf,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(e.code);
    }
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    let wordlist =
        Wordlist::load(&args.input).map_err(|e| path_cli_error("reading wordlist", &args.input, e))?;
    let report = wordlist.report();

    if args.json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| simple_cli_error(&format!("failed to render JSON: {e}")))?;
        println!("{text}");
    } else {
        println!("words: {} (expected {})", report.len, WORDLIST_SIZE);
        for dup in &report.duplicates {
            println!("duplicate: {dup}");
        }
    }

    if report.complete {
        Ok(())
    } else {
        wordlist
            .check_strict()
            .map_err(|e| path_cli_error("checking wordlist", &args.input, e))
    }
}
