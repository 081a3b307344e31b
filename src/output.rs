use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::Write;

use crate::simulator::Evaluation;


fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write an SVG document to a file
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    let mut writer = create(path)?;
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;
    log::info!("Wrote ray diagram to {}", path.display());
    Ok(())
}

/// Write the inputs, results and diagram geometry as pretty-printed JSON
pub fn write_json(path: &Path, evaluation: &Evaluation) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, evaluation)
        .context("Failed to serialize evaluation")?;
    writeln!(writer)?;
    writer.flush()?;
    log::info!("Wrote results to {}", path.display());
    Ok(())
}

/// Write rows of values as a whitespace separated table
pub fn writeup<'a, I>(path: &Path, header: &str, rows: I) -> Result<()>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut writer = create(path)?;
    writeln!(writer, "# {}", header)?;
    for row in rows {
        writeln!(writer, "{}", row.iter().join(" "))?;
    }
    writer.flush()?;
    log::info!("Wrote table to {}", path.display());
    Ok(())
}
