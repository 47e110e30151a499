//! Compile command implementation.

use std::fs;

use anyhow::{Context, Result};
use console::style;

use alsvid_compile::{CompileOptions, ReversibleCompiler};
use alsvid_ir::CellId;

use super::common::{load_netlist, op_breakdown};

/// Execute the compile command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    no_barriers: bool,
    controlled: Option<u32>,
    stage: &str,
) -> Result<()> {
    println!(
        "{} Compiling {}",
        style("→").cyan().bold(),
        style(input).green()
    );

    let netlist = load_netlist(input)?;
    println!(
        "  Loaded: {} inputs, {} outputs, {} gates, logic depth {}",
        netlist.n_inputs(),
        netlist.n_outputs(),
        netlist.gates().len(),
        netlist.logic_depth()
    );

    let compiler = ReversibleCompiler::new(netlist).with_options(CompileOptions {
        barriers: !no_barriers,
    });
    let control = controlled.map(CellId);

    let seq = match (stage, control) {
        ("forward", None) => compiler.forward()?,
        ("forward", Some(cell)) => compiler.forward_controlled(cell)?,
        // The copy stage is never conditioned; a control changes nothing here.
        ("copy", _) => compiler.copy_outputs()?,
        ("reverse", None) => compiler.reverse()?,
        ("reverse", Some(cell)) => compiler.reverse_controlled(cell)?,
        ("full", None) => compiler.compile()?,
        ("full", Some(cell)) => compiler.compile_controlled(cell)?,
        (other, _) => {
            anyhow::bail!("Unknown stage: '{other}'. Available: forward, copy, reverse, full")
        }
    };

    println!("{} Compilation complete", style("✓").green().bold());
    println!("  Result: {} ops over {} cells", seq.len(), seq.width());
    let breakdown = op_breakdown(&seq);
    if !breakdown.is_empty() {
        println!("  Ops: {breakdown}");
    }

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&seq)?;
            fs::write(path, json).with_context(|| format!("Failed to write file: {path}"))?;
            println!("  Output: {}", style(path).green());
        }
        None => {
            println!();
            print!("{seq}");
        }
    }

    Ok(())
}
