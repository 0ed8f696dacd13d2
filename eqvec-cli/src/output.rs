use std::io::Write;

use anyhow::Context;
use eqvec_core::{EquilibriumSet, Vector};

/// Writes one line per vector: `Vector 1 = 3i + -4j, angle 306.87°`.
pub fn write_text<W: Write>(out: &mut W, set: &EquilibriumSet) -> anyhow::Result<()> {
    for (i, v) in set.iter().enumerate() {
        writeln!(out, "{}", format_vector(i + 1, v)).context("failed to write vector")?;
    }
    Ok(())
}

/// Writes the set as a JSON array of `{x, y, angle}` objects.
pub fn write_json<W: Write>(out: &mut W, set: &EquilibriumSet) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, set).context("failed to serialize vector set")?;
    writeln!(out).context("failed to write vector set")?;
    Ok(())
}

fn format_vector(number: usize, v: &Vector) -> String {
    match v.angle() {
        Some(angle) => format!("Vector {number} = {}i + {}j, angle {angle:.2}°", v.x(), v.y()),
        None => format!("Vector {number} = {}i + {}j, angle undefined", v.x(), v.y()),
    }
}
