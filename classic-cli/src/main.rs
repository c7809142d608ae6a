#![deny(missing_docs)]
//! A command-line interface for the classical cipher library.

use clap::{Args, Parser, Subcommand};
use classic_core::key_generator::generate_vernam_key;
use classic_core::{Algorithm, AlgorithmParams, Mode};
use log::{error, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Caesar shift of three\nclassic-cli encrypt --algorithm caesar --shift 3 \"Attack at dawn\"\n\n# Decrypt a Vigenère message\nclassic-cli decrypt --algorithm vigenere --key LEMON LXFOPVEFRNHR\n\n# Encrypt a file with a 3x3 Hill key and write the result elsewhere\nclassic-cli encrypt --algorithm hill --key GYBNQKURP --size 3 --input ./plain.txt --output ./cipher.txt\n\n# Print a machine readable report\nclassic-cli encrypt --algorithm affine -a 5 -b 8 HELLO --json\n\n# Generate a 32 letter Vernam key\nclassic-cli keygen --length 32"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a classical cipher
    Encrypt(CipherArgs),
    /// Decrypt text with a classical cipher
    Decrypt(CipherArgs),
    /// Generate a random key for the Vernam cipher
    Keygen {
        /// Number of letters in the key
        #[arg(short, long)]
        length: usize,
    },
    /// List the supported algorithms and their parameters
    List,
}

#[derive(Args)]
struct CipherArgs {
    /// The cipher to use, e.g. caesar, rail-fence or hill. See `list`.
    #[arg(long, value_name = "NAME")]
    algorithm: Algorithm,

    /// The text to transform. If omitted, it is read from --input or stdin.
    #[arg()]
    text: Option<String>,

    /// Read the text from this file
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Print a JSON report instead of the bare result
    #[arg(long)]
    json: bool,

    /// Caesar shift
    #[arg(long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Rail Fence rail count
    #[arg(long)]
    rails: Option<usize>,

    /// Keyword for Vigenère, Vernam, Playfair, Hill and Columnar
    #[arg(short, long)]
    key: Option<String>,

    /// Route grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Route grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Affine multiplier
    #[arg(short = 'a', allow_negative_numbers = true)]
    a: Option<i64>,

    /// Affine offset
    #[arg(short = 'b', allow_negative_numbers = true)]
    b: Option<i64>,

    /// Hill block size, 2 or 3
    #[arg(long, default_value_t = 2)]
    size: usize,
}

/// What `--json` prints for one run.
#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    mode: Mode,
    output: &'a str,
    elapsed_micros: u64,
}

fn require<T: Clone>(value: Option<&T>, flag: &str, algorithm: Algorithm) -> Result<T, String> {
    value
        .cloned()
        .ok_or_else(|| format!("{} requires {flag}", algorithm.name()))
}

fn build_params(args: &CipherArgs) -> Result<AlgorithmParams, String> {
    let algorithm = args.algorithm;
    let key = || require(args.key.as_ref(), "--key", algorithm);
    Ok(match algorithm {
        Algorithm::Caesar => AlgorithmParams::Caesar {
            shift: require(args.shift.as_ref(), "--shift", algorithm)?,
        },
        Algorithm::RailFence => AlgorithmParams::RailFence {
            rails: require(args.rails.as_ref(), "--rails", algorithm)?,
        },
        Algorithm::Vigenere => AlgorithmParams::Vigenere { key: key()? },
        Algorithm::Vernam => AlgorithmParams::Vernam { key: key()? },
        Algorithm::Playfair => AlgorithmParams::Playfair { key: key()? },
        Algorithm::Route => AlgorithmParams::Route {
            rows: require(args.rows.as_ref(), "--rows", algorithm)?,
            cols: require(args.cols.as_ref(), "--cols", algorithm)?,
        },
        Algorithm::Affine => AlgorithmParams::Affine {
            a: require(args.a.as_ref(), "-a", algorithm)?,
            b: require(args.b.as_ref(), "-b", algorithm)?,
        },
        Algorithm::Hill => AlgorithmParams::Hill {
            key: key()?,
            size: args.size,
        },
        Algorithm::Columnar => AlgorithmParams::Columnar { key: key()? },
    })
}

/// Text from the positional argument, the input file or stdin.
///
/// One trailing line break is dropped from file and stdin input.
fn read_text(args: &CipherArgs) -> io::Result<String> {
    let mut text = match (&args.text, &args.input) {
        (Some(text), _) => return Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn run_cipher(mode: Mode, args: &CipherArgs) {
    let params = build_params(args).unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });
    if let Err(e) = params.validate() {
        error!("{e}");
        std::process::exit(1);
    }
    let text = read_text(args).unwrap_or_else(|e| {
        error!("Failed to read input text: {e}");
        std::process::exit(1);
    });

    info!("Running {} {mode} on {} characters.", args.algorithm.name(), text.chars().count());
    let started = Instant::now();
    let output = params.apply(mode, &text).unwrap_or_else(|e| {
        error!("{} failed: {e}", args.algorithm.name());
        std::process::exit(1);
    });
    let elapsed_micros = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    info!("Finished in {elapsed_micros} µs.");

    let rendered = if args.json {
        let report = Report {
            algorithm: args.algorithm,
            mode,
            output: &output,
            elapsed_micros,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            error!("Failed to serialize report: {e}");
            std::process::exit(1);
        })
    } else {
        output
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                error!("Failed to write output file '{}': {e}", path.display());
                std::process::exit(1);
            }
            info!("Result written to '{}'.", path.display());
        }
        None => println!("{rendered}"),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encrypt(args) => run_cipher(Mode::Encrypt, args),
        Commands::Decrypt(args) => run_cipher(Mode::Decrypt, args),
        Commands::Keygen { length } => match generate_vernam_key(*length) {
            Ok(key) => println!("{key}"),
            Err(e) => {
                error!("Failed to generate key: {e}");
                std::process::exit(1);
            }
        },
        Commands::List => {
            println!("{:<12} {:<24} {:<14} Parameters", "ID", "Name", "Category");
            println!("{:-<80}", "");
            for algorithm in Algorithm::ALL {
                println!(
                    "{:<12} {:<24} {:<14} {}",
                    algorithm.id(),
                    algorithm.name(),
                    algorithm.category(),
                    algorithm.parameters()
                );
            }
        }
    }
}
