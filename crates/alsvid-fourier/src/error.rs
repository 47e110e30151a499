//! Error types for the transform generators.

use alsvid_ir::CellId;
use thiserror::Error;

/// Errors that can occur while generating a transform sequence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FourierError {
    /// A register cell appears more than once in the transform list.
    #[error("cell {cell} appears more than once in the transform cell list")]
    DuplicateCell {
        /// The repeated cell.
        cell: CellId,
    },

    /// An emitted operation failed sequence validation.
    #[error("emitted operation: {0}")]
    Ir(#[from] alsvid_ir::IrError),
}

/// Result type for transform generation.
pub type FourierResult<T> = Result<T, FourierError>;
