//! Error types for netlist parsing and validation.

use alsvid_ir::CellId;
use thiserror::Error;

/// Errors that can occur while reading or validating a netlist.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NetlistError {
    /// Failed to read the netlist file.
    #[error("failed to read netlist: {0}")]
    Io(#[from] std::io::Error),

    /// Lexer error (invalid token).
    #[error("invalid token '{text}' on line {line}")]
    InvalidToken {
        /// Line holding the token.
        line: usize,
        /// The offending source text.
        text: String,
    },

    /// The file ended before the expected content.
    #[error("netlist ended early: expected {expected}")]
    MissingLine {
        /// What the next line should have held.
        expected: &'static str,
    },

    /// Unexpected token.
    #[error("unexpected token on line {line}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// Line holding the token.
        line: usize,
        /// What the parser was looking for.
        expected: &'static str,
        /// What it found instead.
        found: String,
    },

    /// Register index list length differs from its declared count.
    #[error("{register} list on line {line} declares {declared} cells but holds {found}")]
    CountMismatch {
        /// Line holding the list.
        line: usize,
        /// Which register list is inconsistent.
        register: &'static str,
        /// Count declared in the header.
        declared: usize,
        /// Number of indices actually listed.
        found: usize,
    },

    /// Gate line names a kind outside the vocabulary.
    #[error("unknown gate kind '{kind}' on line {line}")]
    UnknownGateKind {
        /// Line holding the gate record.
        line: usize,
        /// The unrecognized kind.
        kind: String,
    },

    /// Gate record operand count does not match its kind.
    #[error("wrong operand count for gate '{kind}' on line {line}: got {got}")]
    ArityMismatch {
        /// Line holding the gate record.
        line: usize,
        /// The gate kind.
        kind: &'static str,
        /// Number of operands found.
        got: usize,
    },

    /// Gate record references a cell outside the declared register.
    #[error("cell {cell} out of range for a register of {total} cells")]
    CellOutOfRange {
        /// The offending cell.
        cell: CellId,
        /// Number of declared cells.
        total: u32,
    },

    /// Gate uses its own target as an operand.
    #[error("gate targeting cell {cell} also reads it as an operand")]
    SelfReference {
        /// The doubly-used cell.
        cell: CellId,
    },

    /// Gate reads the same cell through both operands.
    #[error("gate reads cell {cell} through both operands")]
    DuplicateOperand {
        /// The repeated cell.
        cell: CellId,
    },

    /// Gate writes into the input range.
    #[error("gate targets input cell {cell}")]
    WriteToInput {
        /// The targeted input cell.
        cell: CellId,
    },

    /// Two gates write the same wire.
    #[error("cell {cell} is written by more than one gate")]
    RewrittenCell {
        /// The doubly-written cell.
        cell: CellId,
    },

    /// Gate reads a wire no earlier gate has produced.
    #[error("cell {cell} is read before any gate writes it")]
    UseBeforeDefinition {
        /// The prematurely-read cell.
        cell: CellId,
    },

    /// Register layout error.
    #[error("register layout: {0}")]
    Layout(#[from] alsvid_ir::IrError),
}

/// Result type for netlist operations.
pub type NetlistResult<T> = Result<T, NetlistError>;
