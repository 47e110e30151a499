//! Alsvid Fourier Transform Generators
//!
//! This crate generates the operation sequences of the discrete Fourier
//! transform and its inverse over an arbitrary ordered subset of
//! register cells. The generators are pure: they allocate no cells,
//! hold no state and touch only the cells they are given.
//!
//! Angles follow the positional distance within the given list, so a
//! transform over a strided subset like `[0, 2, 4]` carries the same
//! angle ladder as one over `[0, 1, 2]`.
//!
//! # Example
//!
//! ```rust
//! use alsvid_fourier::{iqft, qft};
//! use alsvid_ir::CellId;
//!
//! let cells = [CellId(0), CellId(1), CellId(2)];
//! let forward = qft(&cells).unwrap();
//! let inverse = iqft(&cells).unwrap();
//!
//! // The inverse is the forward sequence inverted op by op.
//! assert_eq!(inverse, forward.inverse());
//! ```

pub mod error;
pub mod transform;

pub use error::{FourierError, FourierResult};
pub use transform::{iqft, iqft_width, qft, qft_width};
