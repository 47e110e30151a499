//! Alsvid Execution Engines
//!
//! This crate runs compiled operation sequences and tallies readout
//! counts. Two engines are provided behind the [`Executor`] trait:
//!
//! - **[`ClassicalExecutor`]**: propagates a single bit assignment
//!   through the flip family. Deterministic, effectively unbounded
//!   register width, rejects phase-bearing operations.
//! - **[`StatevectorExecutor`]**: full 2^n amplitude evolution with
//!   probabilistic sampling. Handles every operation, limited to small
//!   registers.
//!
//! # Statevector memory
//!
//! | Cells | Memory | Evolution Speed |
//! |-------|--------|-----------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25+ | ~512 MB+ | Not recommended |
//!
//! # Example
//!
//! ```
//! use alsvid_exec::{ClassicalExecutor, Executor};
//! use alsvid_ir::{CellId, OpSequence};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut seq = OpSequence::new();
//! seq.flip(CellId(0))?.cflip(CellId(0), CellId(1))?;
//!
//! let executor = ClassicalExecutor::new();
//! let result = executor.run(&seq, 100)?;
//! assert_eq!(result.counts.get("11"), 100);
//! # Ok(())
//! # }
//! ```

pub mod classical;
pub mod error;
pub mod executor;
pub mod result;
pub mod statevector;

pub use classical::ClassicalExecutor;
pub use error::{ExecError, ExecResult};
pub use executor::Executor;
pub use result::{Counts, ExecutionResult};
pub use statevector::{Statevector, StatevectorExecutor};
