//! `prngzoo stream` command - Write raw generator output.
//!
//! Binary output goes to stdout unbounded by default, ready to pipe into
//! PractRand or dieharder. The reader closing the pipe is a normal end.

use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use prngzoo_core::output::write_stream;
use prngzoo_core::{AnyGenerator, Checkpoint, GeneratorKind, PrngError, StreamFormat};

use super::{build_generator, SeedArgs};
use crate::error::{CliError, CliResult};

/// Output encoding
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum FormatArg {
    /// Little-endian bytes, no framing
    #[default]
    Binary,
    /// 0x-prefixed values, four per line
    Hex,
}

impl From<FormatArg> for StreamFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Binary => StreamFormat::Binary,
            FormatArg::Hex => StreamFormat::Hex,
        }
    }
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Generator name (see `prngzoo list`)
    #[arg(required_unless_present = "resume")]
    pub name: Option<String>,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Number of values to write (default: until the reader stops)
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = FormatArg::Binary)]
    pub format: FormatArg,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Continue from a saved checkpoint
    #[arg(long, conflicts_with_all = ["seed", "reference"])]
    pub resume: Option<PathBuf>,

    /// Save a checkpoint after the last value
    #[arg(long, requires = "count")]
    pub save: Option<PathBuf>,
}

/// Execute the `stream` command.
pub fn execute(args: &StreamArgs) -> CliResult<()> {
    let (mut generator, draws) = open_generator(args)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    tracing::debug!(
        generator = %generator.kind(),
        count = ?args.count,
        format = ?args.format,
        "streaming"
    );

    let written = match write_stream(&mut generator, args.count, args.format.into(), &mut writer)
    {
        Ok(written) => written,
        Err(PrngError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("reader closed the stream");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(path) = &args.save {
        let checkpoint = Checkpoint::capture(&generator, draws + written)?;
        fs::write(path, checkpoint.to_json()?)?;
        tracing::info!(path = %path.display(), draws = checkpoint.draws, "saved checkpoint");
    }

    Ok(())
}

/// Resolve the starting generator and how many values it has already drawn
fn open_generator(args: &StreamArgs) -> CliResult<(AnyGenerator, u64)> {
    let requested = args
        .name
        .as_deref()
        .map(str::parse::<GeneratorKind>)
        .transpose()?;

    match &args.resume {
        Some(path) => {
            let checkpoint = Checkpoint::from_json(&fs::read_to_string(path)?)?;
            if let Some(kind) = requested {
                if kind != checkpoint.kind {
                    return Err(CliError::Config(format!(
                        "checkpoint {} holds {}, not {}",
                        path.display(),
                        checkpoint.kind,
                        kind
                    )));
                }
            }
            let draws = checkpoint.draws;
            Ok((checkpoint.restore()?, draws))
        }
        None => {
            let kind = requested.ok_or_else(|| {
                CliError::Config("a generator name or --resume is required".to_string())
            })?;
            Ok((build_generator(kind, args.seed.resolve()), 0))
        }
    }
}
