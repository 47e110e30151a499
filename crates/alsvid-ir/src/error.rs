//! Error types for the IR crate.

use crate::cell::CellId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Cell index outside the register.
    #[error("cell {cell} out of range for a register of {total} cells")]
    CellOutOfRange {
        /// The offending cell.
        cell: CellId,
        /// Number of cells in the register.
        total: u32,
    },

    /// Same cell referenced twice by one operation.
    #[error("duplicate cell {cell} in {op}")]
    DuplicateCell {
        /// The repeated cell.
        cell: CellId,
        /// Name of the offending operation.
        op: &'static str,
    },

    /// Multi-controlled flip with no control cells.
    #[error("multi-controlled flip requires at least one control")]
    EmptyControls,

    /// Declared register cells do not form a contiguous ascending run.
    #[error("{register} cells do not form a contiguous ascending run")]
    NonContiguousRange {
        /// Which register declaration is malformed.
        register: &'static str,
    },

    /// Declared ranges fail to tile the register address space.
    #[error("register ranges do not tile the address space: expected a range starting at cell {expected}, found {found}")]
    PartitionMismatch {
        /// Cell where the next range should start.
        expected: u32,
        /// Cell where a range actually starts.
        found: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
