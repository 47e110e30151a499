//! Alsvid Reversible-Logic Compiler
//!
//! This crate lowers a validated Boolean [`Netlist`] into a flat
//! [`OpSequence`] of reversible elementary operations, leaving every
//! scratch cell clean so the compiled circuit can be embedded and
//! repeated.
//!
//! # Compilation Stages
//!
//! ```text
//! Netlist
//!    │
//!    ▼
//! ┌────────────────────┐
//! │ ReversibleCompiler │ ◄── CompileOptions (barrier emission)
//! └────────────────────┘
//!    │
//!    ├── forward pass      gate-by-gate expansion, dependency order
//!    ├── copy stage        outputs duplicated into the copy range
//!    └── reverse pass      mirrored expansion, back to front
//!    │
//!    ▼
//! OpSequence (inputs and copies survive, everything else zero)
//! ```
//!
//! Each Boolean gate kind has a fixed expansion into flips and
//! controlled flips; the reverse pass re-emits the same expansions with
//! gate order and intra-gate operation order both mirrored. A
//! controlled variant conditions the whole circuit on one extra cell
//! outside the register, defined for `and`/`not` netlists.
//!
//! # Example
//!
//! ```rust
//! use alsvid_compile::{CompileOptions, ReversibleCompiler, cancel_adjacent};
//! use alsvid_netlist::Netlist;
//!
//! let netlist = Netlist::parse("2\n1\n1\n0 1\n3\n2\n2 and 0 1\n3 not 2\n").unwrap();
//! let compiler = ReversibleCompiler::new(netlist)
//!     .with_options(CompileOptions { barriers: false });
//!
//! let seq = compiler.compile().unwrap();
//! assert_eq!(seq.len(), 7);
//!
//! // Forward and reverse cancel pairwise once the copy op is removed.
//! let forward = compiler.forward().unwrap();
//! let mut round_trip = forward.clone();
//! round_trip.extend(&compiler.reverse().unwrap());
//! assert!(cancel_adjacent(&round_trip).is_empty());
//! ```

pub mod cancel;
pub mod compiler;
pub mod error;

mod expansion;

pub use cancel::cancel_adjacent;
pub use compiler::{CompileOptions, ReversibleCompiler};
pub use error::{CompileError, CompileResult};

use alsvid_ir::OpSequence;
use alsvid_netlist::Netlist;

/// Compile a netlist with default options.
///
/// Convenience wrapper over [`ReversibleCompiler`] for callers that
/// need the full three-stage sequence and nothing else.
pub fn compile(netlist: Netlist) -> CompileResult<OpSequence> {
    ReversibleCompiler::new(netlist).compile()
}
