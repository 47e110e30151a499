//! Error types for sequence execution.

use alsvid_ir::CellId;
use thiserror::Error;

/// Errors that can occur while running an operation sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// An operation with no classical interpretation reached the
    /// classical engine.
    #[error("operation '{op}' has no classical interpretation")]
    NonClassicalOp {
        /// Name of the operation.
        op: &'static str,
    },

    /// The run needs a larger register than the engine supports.
    #[error("sequence addresses {width} cells but the executor supports at most {max}")]
    RegisterTooLarge {
        /// Cells the run would need.
        width: u32,
        /// Cells the engine supports.
        max: u32,
    },

    /// A readout cell lies outside the register.
    #[error("readout cell {cell} outside the register of {width} cells")]
    ReadoutOutOfRange {
        /// The offending readout cell.
        cell: CellId,
        /// Register width of the run.
        width: u32,
    },
}

/// Result type for execution operations.
pub type ExecResult<T> = Result<T, ExecError>;
