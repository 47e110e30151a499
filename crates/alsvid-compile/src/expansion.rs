//! Per-gate expansion tables.
//!
//! Each Boolean gate kind lowers to a fixed sequence of elementary
//! operations touching only its own target and operand cells, so
//! expansions compose gate-by-gate as long as the netlist's dependency
//! order is respected.

use alsvid_ir::{CellId, Op};
use alsvid_netlist::{GateRecord, LogicGate};

use crate::error::{CompileError, CompileResult};

/// Forward expansion of one gate record.
///
/// The target cell must start at zero for the expansion to compute the
/// gate's truth table into it.
pub(crate) fn forward_ops(record: &GateRecord) -> Vec<Op> {
    let target = record.target;
    match record.gate {
        LogicGate::And(a, b) => vec![Op::CCFlip {
            control1: a,
            control2: b,
            target,
        }],
        LogicGate::Nand(a, b) => vec![
            Op::CCFlip {
                control1: a,
                control2: b,
                target,
            },
            Op::Flip { target },
        ],
        LogicGate::Xor(a, b) => vec![
            Op::CFlip { control: a, target },
            Op::CFlip { control: b, target },
        ],
        // De Morgan: invert both operands, conjoin, negate the result,
        // restore the operands.
        LogicGate::Or(a, b) => vec![
            Op::Flip { target: a },
            Op::Flip { target: b },
            Op::CCFlip {
                control1: a,
                control2: b,
                target,
            },
            Op::Flip { target },
            Op::Flip { target: a },
            Op::Flip { target: b },
        ],
        LogicGate::Not(None) => vec![Op::Flip { target }],
        LogicGate::Not(Some(a)) => vec![
            Op::Flip { target },
            Op::CFlip { control: a, target },
        ],
    }
}

/// Reverse expansion of one gate record.
///
/// Every operation in the forward tables is an involution, so emitting
/// the forward expansion with its operation order reversed is the exact
/// inverse of the gate.
pub(crate) fn reverse_ops(record: &GateRecord) -> Vec<Op> {
    let mut ops = forward_ops(record);
    ops.reverse();
    ops
}

/// Controlled form of one gate record.
///
/// Only `and` and `not` have controlled forms: `and` promotes its
/// double flip to a triple-controlled flip, `not` collapses to a single
/// flip conditioned on the control alone. The controlled op is its own
/// inverse, so forward and reverse passes share this table.
pub(crate) fn controlled_op(record: &GateRecord, control: CellId) -> CompileResult<Op> {
    let target = record.target;
    match record.gate {
        LogicGate::And(a, b) => Ok(Op::McFlip {
            controls: vec![control, a, b],
            target,
        }),
        LogicGate::Not(_) => Ok(Op::CFlip { control, target }),
        LogicGate::Or(_, _) | LogicGate::Xor(_, _) | LogicGate::Nand(_, _) => {
            Err(CompileError::UnsupportedControlled {
                kind: record.gate.name(),
            })
        }
    }
}
