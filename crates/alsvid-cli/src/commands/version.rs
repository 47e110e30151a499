//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - reversible logic compilation and sequence execution",
        style("Alsvid").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  alsvid-ir        Cell and operation sequence representation");
    println!("  alsvid-netlist   Boolean netlist parsing and validation");
    println!("  alsvid-compile   Reversible logic compilation");
    println!("  alsvid-fourier   Fourier transform sequence generators");
    println!("  alsvid-exec      Execution engines");
    println!("  alsvid-cli       Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/alsvid").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
