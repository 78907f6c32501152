//! CSV sink for simulation output

use ndarray::Array2;
use std::path::Path;

/// Write a simulated table to `path` as CSV.
///
/// Header is `time` followed by the species names; one data row per table
/// row, values formatted with `f64`'s shortest round-trip representation.
pub(crate) fn write_csv(
    path: &Path,
    species: &[&str],
    table: &Array2<f64>,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(species.len() + 1);
    header.push("time");
    header.extend_from_slice(species);
    writer.write_record(&header)?;

    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
