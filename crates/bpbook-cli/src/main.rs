//! `bpbook` CLI — convert Factorio blueprint books between exchange strings
//! and browsable JSON file trees.
//!
//! ## Usage
//!
//! ```sh
//! # Unpack an exchange string into book.json + one file pair per blueprint
//! bpbook unpack -i my_book -o book_files
//!
//! # Overwrite an existing output folder
//! bpbook unpack -i my_book -o book_files --force
//!
//! # Pack a decoded JSON document back into a shareable exchange string
//! bpbook pack -i book_files/book.json -o repacked
//!
//! # Suppress the progress notes on stderr
//! bpbook unpack -i my_book -o book_files --silent
//! ```
//!
//! The binary is a thin shell: argument parsing plus the `std::fs`-backed
//! driver and the stderr progress sink. All sequencing lives in
//! `bpbook_core::flow`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use bpbook_core::{Driver, FlowConfig, Progress};

#[derive(Parser)]
#[command(
    name = "bpbook",
    version,
    about = "Convert Factorio blueprint books between exchange strings and JSON file trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an exchange string into book.json plus one file pair per blueprint
    Unpack {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Wrap a decoded JSON document back into a shareable exchange string
    Pack {
        #[command(flatten)]
        io: IoArgs,
    },
}

/// Flags shared by both directions, flattened into each subcommand.
#[derive(Args)]
struct IoArgs {
    /// Blueprint book file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output folder for the generated files
    #[arg(short, long, default_value = "blueprint_book_json")]
    output: PathBuf,

    /// Force overwrite of an existing output folder
    #[arg(short, long)]
    force: bool,

    /// Stop verbose output on stderr
    #[arg(short, long)]
    silent: bool,
}

/// [`Driver`] backed by the real file system.
struct FsDriver;

impl Driver for FsDriver {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

/// [`Progress`] sink that writes notes to stderr unless silenced.
/// Artifacts go to files, notes to stderr; stdout stays clean.
struct StderrProgress {
    silent: bool,
}

impl Progress for StderrProgress {
    fn note(&self, message: &str) {
        if !self.silent {
            eprintln!("{message}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (io_args, run, what): (
        IoArgs,
        fn(&dyn Driver, &dyn Progress, &FlowConfig) -> bpbook_core::Result<()>,
        &str,
    ) = match cli.command {
        Commands::Unpack { io } => (io, bpbook_core::unpack, "unpack blueprint book"),
        Commands::Pack { io } => (io, bpbook_core::pack, "pack blueprint book"),
    };

    let config = FlowConfig {
        input: io_args.input,
        output_dir: io_args.output,
        force: io_args.force,
    };
    let progress = StderrProgress {
        silent: io_args.silent,
    };

    run(&FsDriver, &progress, &config).with_context(|| format!("Failed to {what}"))
}
