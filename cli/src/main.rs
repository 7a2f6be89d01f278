//! prngzoo CLI - Stream and visualise small non-cryptographic PRNGs.
//!
//! # Commands
//!
//! - `prngzoo list` - Show every generator with its output width
//! - `prngzoo stream <name>` - Write raw output for statistical test suites
//! - `prngzoo image <name>...` - Render output as BMP noise images
//!
//! # Examples
//!
//! ```bash
//! # Feed PractRand from an unbounded little-endian stream
//! prngzoo stream xoshiro256pp --seed 42 | RNG_test stdin64
//!
//! # Inspect the first values of the reference registers
//! prngzoo stream pcg8 --reference --count 16 --format hex
//!
//! # Render every generator as 512x512 RGB noise
//! prngzoo image --all --width 512 --height 512 --mode rgb --out-dir noise
//! ```

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{image, list, stream};

/// prngzoo - small non-cryptographic PRNG catalogue
#[derive(Parser)]
#[command(name = "prngzoo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every generator with output width and family
    List,

    /// Write generator output to stdout or a file
    Stream(stream::StreamArgs),

    /// Render generator output as 24-bit BMP images
    Image(image::ImageArgs),
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout may carry binary output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::List => list::execute(),
        Commands::Stream(args) => stream::execute(args),
        Commands::Image(args) => image::execute(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_and_reference_conflict() {
        let result = Cli::try_parse_from(["prngzoo", "stream", "jsf8", "--seed", "1", "--reference"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_requires_count() {
        let result = Cli::try_parse_from(["prngzoo", "stream", "jsf8", "--save", "x.json"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "prngzoo", "stream", "jsf8", "--count", "10", "--save", "x.json",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_resume_needs_no_name() {
        let cli = Cli::try_parse_from(["prngzoo", "stream", "--resume", "x.json"]).unwrap();
        match cli.command {
            Commands::Stream(args) => assert!(args.name.is_none()),
            _ => panic!("expected stream"),
        }
    }

    #[test]
    fn test_image_all_conflicts_with_names() {
        assert!(Cli::try_parse_from(["prngzoo", "image", "--all", "jsf8"]).is_err());
        assert!(Cli::try_parse_from(["prngzoo", "image"]).is_err());
        assert!(Cli::try_parse_from(["prngzoo", "image", "--all", "--mode", "rgb"]).is_ok());
        assert!(Cli::try_parse_from(["prngzoo", "image", "--all", "--mode", "luma"]).is_ok());
    }
}
