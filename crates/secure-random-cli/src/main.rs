//! SecureRandom CLI, the `srand` command.
//!
//! Prints secure random bytes, tokens, bounded integers and UUIDs, one value
//! per line.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use secure_random::{effective_len, RandomConfig, SecureRandom};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// SecureRandom CLI: generate secure random tokens, identifiers and
/// bounded integers.
#[derive(Parser, Debug)]
#[command(
    name = "srand",
    about = "SecureRandom CLI",
    version,
    long_about = "srand: SecureRandom CLI\n\nGenerate secure random bytes, hex, base64, base58 and base62 tokens,\nunbiased bounded integers and version 4 UUIDs."
)]
struct Cli {
    /// JSON config selecting the entropy backend chain
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Length and repetition flags shared by the encoders.
#[derive(clap::Args, Debug, Clone, Copy)]
struct LenArgs {
    /// Number of random bytes to draw (values <= 0 mean 16)
    #[arg(short = 'n', long, default_value_t = 16, allow_negative_numbers = true)]
    len: i64,

    /// How many values to print
    #[arg(short, long, default_value_t = 1)]
    count: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Random bytes (printed as hex unless --raw)
    Bytes {
        #[command(flatten)]
        args: LenArgs,

        /// Write the raw bytes to stdout
        #[arg(long)]
        raw: bool,
    },

    /// Lowercase hex string, two characters per byte
    Hex {
        #[command(flatten)]
        args: LenArgs,
    },

    /// Standard base64 string
    Base64 {
        #[command(flatten)]
        args: LenArgs,
    },

    /// URL-safe base64 string
    #[command(name = "base64-safe")]
    Base64Safe {
        #[command(flatten)]
        args: LenArgs,

        /// Keep trailing '=' padding
        #[arg(long)]
        padding: bool,
    },

    /// Base58 string (no 0, O, I or l)
    Base58 {
        #[command(flatten)]
        args: LenArgs,
    },

    /// Base62 string ([0-9A-Za-z])
    Base62 {
        #[command(flatten)]
        args: LenArgs,
    },

    /// String over a custom alphabet
    Base {
        /// Digit symbols, in digit order
        #[arg(long)]
        alphabet: String,

        /// Number of symbols to use (default: the whole alphabet)
        #[arg(long)]
        base: Option<usize>,

        #[command(flatten)]
        args: LenArgs,
    },

    /// Integer between 0 and BOUND inclusive
    Number {
        /// Inclusive upper bound (must be > 0)
        #[arg(allow_negative_numbers = true)]
        bound: i64,

        /// How many values to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Version 4 UUID
    Uuid {
        /// How many values to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Print the effective configuration as JSON
    Config,
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = load_config(cli.config.as_deref()).and_then(|config| run(cli.command, &config));

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<RandomConfig> {
    match path {
        Some(path) => RandomConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(RandomConfig::default()),
    }
}

fn run(command: Commands, config: &RandomConfig) -> Result<()> {
    let random = SecureRandom::with_config(config);
    log::debug!("backend chain: {:?}", random.chain().names());

    match command {
        Commands::Bytes { args, raw } => cmd_bytes(&random, args, raw),
        Commands::Hex { args } => emit(args.count, || Ok(random.hex(effective_len(args.len))?)),
        Commands::Base64 { args } => {
            emit(args.count, || Ok(random.base64(effective_len(args.len))?))
        }
        Commands::Base64Safe { args, padding } => emit(args.count, || {
            Ok(random.base64_safe(effective_len(args.len), padding)?)
        }),
        Commands::Base58 { args } => {
            emit(args.count, || Ok(random.base58(effective_len(args.len))?))
        }
        Commands::Base62 { args } => {
            emit(args.count, || Ok(random.base62(effective_len(args.len))?))
        }
        Commands::Base {
            alphabet,
            base,
            args,
        } => cmd_base(&random, &alphabet, base, args),
        Commands::Number { bound, count } => {
            emit(count, || Ok(random.number(bound)?.to_string()))
        }
        Commands::Uuid { count } => emit(count, || Ok(random.uuid()?)),
        Commands::Config => cmd_config(config),
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// Print `count` generated values, one per line.
fn emit<F>(count: usize, mut generate: F) -> Result<()>
where
    F: FnMut() -> Result<String>,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        writeln!(out, "{}", generate()?)?;
    }
    Ok(())
}

/// `srand bytes [--len N] [--count N] [--raw]`
fn cmd_bytes(random: &SecureRandom, args: LenArgs, raw: bool) -> Result<()> {
    let len = effective_len(args.len);
    if !raw {
        return emit(args.count, || Ok(random.hex(len)?));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        out.write_all(&random.bytes(len)?)?;
    }
    out.flush()?;
    Ok(())
}

/// `srand base --alphabet ABC [--base N] [--len N] [--count N]`
fn cmd_base(
    random: &SecureRandom,
    alphabet: &str,
    base: Option<usize>,
    args: LenArgs,
) -> Result<()> {
    let base = base.unwrap_or_else(|| alphabet.chars().count());
    emit(args.count, || {
        Ok(random.base(alphabet, base, effective_len(args.len))?)
    })
}

/// `srand config`
fn cmd_config(config: &RandomConfig) -> Result<()> {
    println!("{}", config.to_json()?);
    Ok(())
}
