//! `prngzoo list` command - Print the generator catalogue.

use std::io::Write;

use prngzoo_core::GeneratorKind;

use crate::error::CliResult;

/// Execute the `list` command.
pub fn execute() -> CliResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out)?;
    out.flush()?;
    Ok(())
}

fn render<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{:<16} {:>4}  FAMILY", "NAME", "BITS")?;
    for kind in GeneratorKind::ALL {
        writeln!(
            out,
            "{:<16} {:>4}  {}",
            kind.name(),
            kind.output_bits(),
            kind.family()
        )?;
    }
    Ok(())
}
