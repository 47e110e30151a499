//! Alsvid Command-Line Interface
//!
//! The main entry point for the Alsvid CLI tool.
//!
//! ```text
//!               A L S V I D
//!       Reversible Logic Compilation
//!          and Sequence Execution
//!
//!    "All-swift, the horse that hauls the sun"
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{compile, qft, run, version};

/// Alsvid - reversible logic compilation and sequence execution
#[derive(Parser)]
#[command(name = "alsvid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a Boolean netlist into a reversible operation sequence
    Compile {
        /// Input netlist file
        #[arg(short, long)]
        input: String,

        /// Output file for the sequence as JSON (prints the listing if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Suppress barrier emission
        #[arg(long)]
        no_barriers: bool,

        /// Condition the sequence on a control cell outside the register
        #[arg(long)]
        controlled: Option<u32>,

        /// Stage to emit (forward, copy, reverse, full)
        #[arg(long, default_value = "full")]
        stage: String,
    },

    /// Compile a netlist and execute the sequence
    Run {
        /// Input netlist file
        #[arg(short, long)]
        input: String,

        /// Input assignment as a bitstring, one bit per declared input
        /// (all zeros if omitted)
        #[arg(short, long)]
        assign: Option<String>,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Cells to read out (copy, all)
        #[arg(short, long, default_value = "copy")]
        readout: String,

        /// Execution backend (classical, statevector)
        #[arg(short, long, default_value = "classical")]
        backend: String,
    },

    /// Generate a Fourier transform sequence
    Qft {
        /// Comma-separated cell list, e.g. 0,2,4
        #[arg(short, long)]
        cells: Option<String>,

        /// Shorthand for the first n cells
        #[arg(short, long)]
        width: Option<u32>,

        /// Generate the inverse transform
        #[arg(long)]
        inverse: bool,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Compile {
            input,
            output,
            no_barriers,
            controlled,
            stage,
        } => compile::execute(&input, output.as_deref(), no_barriers, controlled, &stage),

        Commands::Run {
            input,
            assign,
            shots,
            readout,
            backend,
        } => run::execute(&input, assign.as_deref(), shots, &readout, &backend),

        Commands::Qft {
            cells,
            width,
            inverse,
        } => qft::execute(cells.as_deref(), width, inverse),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
