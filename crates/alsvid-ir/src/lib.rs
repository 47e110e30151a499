//! Alsvid Elementary-Operation Intermediate Representation
//!
//! This crate provides the core data structures for representing
//! reversible computations in Alsvid. It forms the foundation of the
//! entire Alsvid compilation stack.
//!
//! # Overview
//!
//! A reversible computation is expressed as a flat, ordered
//! [`OpSequence`] of elementary operations over a register of binary
//! cells. The register itself is partitioned by a [`RegisterLayout`]
//! into named contiguous ranges: the inputs, the intermediate wires,
//! the outputs, and the copy range that receives preserved output
//! values.
//!
//! # Core Components
//!
//! - **Cells**: [`CellId`] for addressing individual register cells
//! - **Operations**: [`Op`] covering conditional bit flips, the
//!   Hadamard transform, controlled phase rotations, exchanges and
//!   barriers
//! - **Sequences**: [`OpSequence`] fluent builder for ordered operation
//!   lists
//! - **Layout**: [`CellRange`] and [`RegisterLayout`] for register
//!   partitioning and copy-slot addressing
//!
//! # Example: Copying a Cell
//!
//! ```rust
//! use alsvid_ir::{CellId, OpSequence};
//!
//! let mut seq = OpSequence::new();
//! seq.barrier().unwrap();
//! seq.cflip(CellId(3), CellId(4)).unwrap();
//! seq.barrier().unwrap();
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.width(), 5);
//! ```

pub mod cell;
pub mod error;
pub mod layout;
pub mod op;
pub mod sequence;

pub use cell::CellId;
pub use error::{IrError, IrResult};
pub use layout::{CellRange, RegisterLayout};
pub use op::Op;
pub use sequence::OpSequence;
