//! restack - image stack rearrangement CLI
//!
//! Deinterleave, interleave and split NumPy image stacks along axis 0.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "restack")]
#[command(author, version, about = "Image stack rearrangement CLI")]
#[command(long_about = "
Rearranges image stacks (.npy arrays) along their leading axis.

Examples:
  restack info scan.npy                      # Show shape and dtype
  restack deinterleave scan.npy -n 2         # scan_C0.npy, scan_C1.npy
  restack deinterleave scan.npy -n 2 -o out/
  restack interleave c0.npy c1.npy -o merged.npy
  restack split series.npy -n 3              # series_Sub0.npy .. series_Sub2.npy
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display stack information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Split a stack into channels by frame position modulo N
    #[command(visible_alias = "d")]
    Deinterleave(DeinterleaveArgs),

    /// Merge two stacks by alternating frames
    #[command(visible_alias = "il")]
    Interleave(InterleaveArgs),

    /// Partition a stack into equal contiguous substacks
    #[command(visible_alias = "s")]
    Split(SplitArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input stack(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct DeinterleaveArgs {
    /// Input stack
    input: PathBuf,

    /// Number of channels
    #[arg(short = 'n', long, default_value = "2")]
    channels: usize,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct InterleaveArgs {
    /// First stack (even output frames)
    a: PathBuf,

    /// Second stack (odd output frames)
    b: PathBuf,

    /// Output stack
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct SplitArgs {
    /// Input stack
    input: PathBuf,

    /// Number of substacks
    #[arg(short = 'n', long)]
    substacks: usize,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

/// Initialize the tracing/logging subsystem.
///
/// Filtering comes from RUST_LOG; diagnostics go to stderr so command
/// output on stdout stays clean.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Deinterleave(args) => commands::deinterleave::run(args, cli.verbose),
        Commands::Interleave(args) => commands::interleave::run(args, cli.verbose),
        Commands::Split(args) => commands::split::run(args, cli.verbose),
    }
}
