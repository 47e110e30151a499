//! Qft command implementation.

use anyhow::Result;
use console::style;

use alsvid_fourier::{iqft, qft};
use alsvid_ir::CellId;

use super::common::{op_breakdown, parse_cell_list};

/// Execute the qft command.
pub fn execute(cells: Option<&str>, width: Option<u32>, inverse: bool) -> Result<()> {
    let cell_ids: Vec<CellId> = match (cells, width) {
        (Some(list), None) => parse_cell_list(list)?,
        (None, Some(n)) => (0..n).map(CellId).collect(),
        (Some(_), Some(_)) => anyhow::bail!("--cells and --width are mutually exclusive"),
        (None, None) => anyhow::bail!("One of --cells or --width is required"),
    };

    let seq = if inverse {
        iqft(&cell_ids)?
    } else {
        qft(&cell_ids)?
    };

    let label = if inverse {
        "inverse Fourier transform"
    } else {
        "Fourier transform"
    };
    println!(
        "{} Generated the {} over {} cells",
        style("✓").green().bold(),
        label,
        cell_ids.len()
    );
    println!("  Result: {} ops", seq.len());
    let breakdown = op_breakdown(&seq);
    if !breakdown.is_empty() {
        println!("  Ops: {breakdown}");
    }
    println!();
    print!("{seq}");

    Ok(())
}
