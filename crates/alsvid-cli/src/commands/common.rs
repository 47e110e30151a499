//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use alsvid_exec::ExecutionResult;
use alsvid_ir::{CellId, OpSequence};
use alsvid_netlist::Netlist;

/// Load a netlist from a file.
pub fn load_netlist(path: &str) -> Result<Netlist> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let netlist = Netlist::parse(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))?;
    debug!(
        "loaded netlist: {} cells, {} gates",
        netlist.total_cells(),
        netlist.gates().len()
    );
    Ok(netlist)
}

/// Parse a comma-separated cell list like `0,2,4`.
pub fn parse_cell_list(list: &str) -> Result<Vec<CellId>> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map(CellId)
                .map_err(|_| anyhow::anyhow!("Invalid cell index: '{token}'"))
        })
        .collect()
}

/// Parse an input assignment bitstring like `1011`, cell 0 first.
pub fn parse_assignment(bits: &str) -> Result<Vec<bool>> {
    bits.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(anyhow::anyhow!(
                "Invalid bit '{other}' in assignment (expected 0 or 1)"
            )),
        })
        .collect()
}

/// One-line tally of the operation kinds a sequence uses.
pub fn op_breakdown(seq: &OpSequence) -> String {
    [
        "flip", "cflip", "ccflip", "mcflip", "h", "cphase", "swap", "barrier",
    ]
    .iter()
    .map(|name| (name, seq.count_of(name)))
    .filter(|(_, count)| *count > 0)
    .map(|(name, count)| format!("{count} {name}"))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Print execution results in a table format.
pub fn print_results(result: &ExecutionResult) {
    use console::style;

    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let total = result.counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}
