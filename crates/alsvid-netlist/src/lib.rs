//! Boolean Netlist Model and Parser for Alsvid
//!
//! This crate reads and validates the line-oriented netlist format the
//! reversible compiler consumes, and exposes the in-memory [`Netlist`]
//! model built from it.
//!
//! # File Format
//!
//! ```text
//! line 1: number of input cells
//! line 2: number of output cells
//! line 3: number of internal cells
//! line 4: the input cell indices
//! line 5: the output cell indices
//! line 6: the internal cell indices
//! line 7+: one gate record per line: "<target> <kind> [<op1> <op2>]"
//! ```
//!
//! Gate kinds are `and`, `or`, `xor`, `nand` (two operands) and `not`
//! (zero or one operand). The three declared index lists must each be a
//! contiguous ascending run, and together tile the register.
//!
//! # Example
//!
//! ```rust
//! use alsvid_netlist::Netlist;
//!
//! let source = "2\n1\n0\n0 1\n2\n\n2 and 0 1\n";
//! let netlist = Netlist::parse(source).unwrap();
//!
//! assert_eq!(netlist.n_inputs(), 2);
//! assert_eq!(netlist.gates().len(), 1);
//! assert_eq!(netlist.logic_depth(), 1);
//! ```
//!
//! Parsing validates everything up front: cell bounds, operand
//! distinctness, the single-writer rule and the wire dependency order.
//! A [`Netlist`] value is always internally consistent.

mod deps;
mod error;
mod lexer;
mod netlist;
mod parser;

pub use error::{NetlistError, NetlistResult};
pub use netlist::{GateRecord, LogicGate, Netlist};
pub use parser::parse;
