use std::path::PathBuf;

use bitphrase::{
    bits,
    io_utils::{codec_cli_error, path_cli_error, simple_cli_error, CliError},
    Codec, Config, Wordlist,
};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Convert entropy bit-strings to and from word-list mnemonics.
#[derive(Parser)]
#[command(name = "bitphrase", version)]
struct Cli {
    #[command(flatten)]
    source: WordlistSource,
    /// JSON config with codec policy (normalize_whitespace, strict_wordlist)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Split mnemonics on any run of whitespace
    #[arg(long)]
    normalize_whitespace: bool,
    /// Require exactly 2048 unique words in the wordlist
    #[arg(long)]
    strict_wordlist: bool,
    /// Print a JSON object instead of the bare result
    #[arg(long)]
    json: bool,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct WordlistSource {
    /// Wordlist file, one word per line
    #[arg(long, value_name = "PATH")]
    wordlist: Option<PathBuf>,
    /// Inline comma separated wordlist
    #[arg(long, value_name = "WORDS")]
    words: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Turn an entropy bit-string into a mnemonic
    Encode {
        entropy: String,
        /// Entropy is given as hex bytes instead of 0/1 digits
        #[arg(long)]
        hex: bool,
    },
    /// Turn a mnemonic back into its entropy bit-string
    Decode {
        /// Mnemonic words; several arguments are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        mnemonic: Vec<String>,
    },
    /// Encode if the input is all 0/1 digits, decode otherwise
    Convert {
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(e.code);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            Config::from_file(path).map_err(|e| path_cli_error("reading config", path, e))?
        }
        None => Config::default(),
    };
    config.normalize_whitespace |= cli.normalize_whitespace;
    config.strict_wordlist |= cli.strict_wordlist;
    Ok(config)
}

fn load_wordlist(source: &WordlistSource) -> Result<Wordlist, CliError> {
    match (&source.wordlist, &source.words) {
        (Some(path), _) => {
            Wordlist::load(path).map_err(|e| path_cli_error("reading wordlist", path, e))
        }
        (None, Some(inline)) => Ok(Wordlist::parse_inline(inline)),
        (None, None) => Err(simple_cli_error("a wordlist source is required")),
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let wordlist = load_wordlist(&cli.source)?;
    debug!(words = wordlist.len(), ?config, "wordlist loaded");

    let report = wordlist.report();
    if !config.strict_wordlist && !report.complete {
        warn!(
            words = report.len,
            duplicates = report.duplicates.len(),
            "wordlist is not a complete 2048-word list"
        );
    }

    let codec = Codec::new(&wordlist, config).map_err(|e| codec_cli_error("wordlist rejected", e))?;

    let (mode, input, output) = match &cli.command {
        Command::Encode { entropy, hex } => {
            let result = if *hex {
                codec.encode_hex(entropy)
            } else {
                codec.encode(entropy)
            };
            let out = result.map_err(|e| codec_cli_error("encode failed", e))?;
            ("encode", entropy.clone(), out)
        }
        Command::Decode { mnemonic } => {
            let phrase = mnemonic.join(" ");
            let out = codec
                .decode(&phrase)
                .map_err(|e| codec_cli_error("decode failed", e))?;
            ("decode", phrase, out)
        }
        Command::Convert { input } => {
            let text = input.join(" ");
            if bits::is_bit_string(&text) {
                debug!("input is a bit-string, encoding");
                let out = codec
                    .encode(&text)
                    .map_err(|e| codec_cli_error("encode failed", e))?;
                ("encode", text, out)
            } else {
                debug!("input is a mnemonic, decoding");
                let out = codec
                    .decode(&text)
                    .map_err(|e| codec_cli_error("decode failed", e))?;
                ("decode", text, out)
            }
        }
    };

    if cli.json {
        let value = serde_json::json!({
            "mode": mode,
            "input": input,
            "output": output,
        });
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| simple_cli_error(&format!("failed to render JSON: {e}")))?;
        println!("{text}");
    } else {
        println!("{output}");
    }
    Ok(())
}
