//! Run command implementation.

use anyhow::Result;
use console::style;

use alsvid_compile::ReversibleCompiler;
use alsvid_exec::{ClassicalExecutor, Executor, StatevectorExecutor};

use super::common::{load_netlist, parse_assignment, print_results};

/// Execute the run command.
pub fn execute(
    input: &str,
    assign: Option<&str>,
    shots: u32,
    readout: &str,
    backend: &str,
) -> Result<()> {
    println!(
        "{} Running {} on the {} backend",
        style("→").cyan().bold(),
        style(input).green(),
        style(backend).yellow()
    );

    let netlist = load_netlist(input)?;

    let assignment = match assign {
        Some(bits) => parse_assignment(bits)?,
        None => vec![false; netlist.n_inputs()],
    };
    if assignment.len() != netlist.n_inputs() {
        anyhow::bail!(
            "Assignment has {} bits but the netlist declares {} inputs",
            assignment.len(),
            netlist.n_inputs()
        );
    }
    // Assignment bits land on the declared input cells, which need not
    // start at register cell 0.
    let mut input_bits = vec![false; netlist.total_cells() as usize];
    for (cell, &bit) in netlist.input_cells().iter().zip(&assignment) {
        input_bits[cell.0 as usize] = bit;
    }

    let readout_cells = match readout {
        "copy" => Some(netlist.layout().copy().iter().collect::<Vec<_>>()),
        "all" => None,
        other => anyhow::bail!("Unknown readout: '{other}'. Available: copy, all"),
    };

    let compiler = ReversibleCompiler::new(netlist);
    let seq = compiler.compile()?;
    println!(
        "  Compiled: {} ops over {} cells",
        seq.len(),
        compiler.register_width()
    );

    let result = match backend {
        "classical" => {
            let mut executor = ClassicalExecutor::new().with_input(&input_bits);
            if let Some(cells) = readout_cells {
                executor = executor.with_readout(cells);
            }
            executor.run(&seq, shots)?
        }
        "statevector" | "sv" => {
            let mut executor = StatevectorExecutor::new().with_input(&input_bits);
            if let Some(cells) = readout_cells {
                executor = executor.with_readout(cells);
            }
            executor.run(&seq, shots)?
        }
        other => anyhow::bail!("Unknown backend: '{other}'. Available: classical, statevector"),
    };

    print_results(&result);

    Ok(())
}
