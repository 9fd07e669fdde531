//! retro-hash CLI
//!
//! Computes game fingerprints for ROMs and disc images from the command
//! line. Plain 2048-byte-sector `.iso` images are readable out of the box;
//! CUE/CHD/GDI images need an embedder-supplied disc reader and are reported
//! as unsupported here.

mod iso_reader;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use retro_hash_lib::{HashContext, HashIterator, Platform, hash_from_file};

#[derive(Parser)]
#[command(
    name = "retro-hash",
    version,
    about = "Fingerprint retro-console game dumps"
)]
struct Cli {
    /// Files to hash
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Hash as a specific console instead of guessing from the extension
    #[arg(short, long)]
    console: Option<String>,

    /// Print recipe and candidate diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let console = match cli.console.as_deref().map(str::parse::<Platform>) {
        None => None,
        Some(Ok(console)) => Some(console),
        Some(Err(err)) => {
            eprintln!("{}", err.to_string().if_supports_color(Stderr, |t| t.red()));
            return ExitCode::FAILURE;
        }
    };

    let ctx = HashContext::new().with_disc_reader(iso_reader::IsoFileReader);

    let mut failed = false;
    for file in &cli.files {
        let result = match console {
            Some(console) => hash_from_file(&ctx, console, file),
            None => HashIterator::new(&ctx, file, None).iterate(&ctx),
        };

        match result {
            Ok(hash) => {
                println!(
                    "{}  {}",
                    hash.if_supports_color(Stdout, |t| t.green()),
                    file.display()
                );
            }
            Err(err) => {
                eprintln!(
                    "{}: {}",
                    file.display(),
                    err.to_string().if_supports_color(Stderr, |t| t.red())
                );
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
