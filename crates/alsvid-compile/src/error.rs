//! Error types for the reversible-logic compiler.

use alsvid_ir::CellId;
use thiserror::Error;

/// Errors that can occur while lowering a netlist into elementary operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Gate kind requested in a controlled pass without a controlled form.
    #[error("gate kind '{kind}' has no controlled form")]
    UnsupportedControlled {
        /// The offending gate kind.
        kind: &'static str,
    },

    /// Control cell collides with the compiled register.
    #[error("control cell {control} lies inside the compiled register of {total} cells")]
    ControlInsideRegister {
        /// The offending control cell.
        control: CellId,
        /// Register size the control must clear, copy slots included.
        total: u32,
    },

    /// An emitted operation failed sequence validation.
    #[error("emitted operation: {0}")]
    Ir(#[from] alsvid_ir::IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
