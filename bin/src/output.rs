//! Writing the generated module to disk.

use anyhow::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tickgen_format::ConstArrayFormatter;

/// Renders `ticks` with `formatter` into `path`, creating or truncating the file.
///
/// The write is not atomic: a failure part way through can leave a
/// truncated file behind.
pub(crate) fn write_output<S: AsRef<str>>(
    path: &Path,
    formatter: &ConstArrayFormatter,
    ticks: &[S],
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    formatter.write(ticks, writer)?;
    Ok(())
}
