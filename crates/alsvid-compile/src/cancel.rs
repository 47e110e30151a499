//! Adjacent-inverse cancellation over operation sequences.

use alsvid_ir::{Op, OpSequence};

/// Remove barriers and adjacent inverse pairs in one pass.
///
/// Scans left to right keeping a stack of surviving operations: an
/// operation whose inverse sits on top of the stack cancels it,
/// anything else is kept. Barriers are dropped up front so they never
/// separate a cancelling pair. A sequence concatenated with its own
/// inverse telescopes down to the empty sequence.
pub fn cancel_adjacent(seq: &OpSequence) -> OpSequence {
    let mut kept: Vec<Op> = Vec::with_capacity(seq.len());
    for op in seq {
        if op.is_barrier() {
            continue;
        }
        match kept.last() {
            Some(top) if *top == op.inverse() => {
                kept.pop();
            }
            _ => kept.push(op.clone()),
        }
    }
    OpSequence::from(kept)
}
