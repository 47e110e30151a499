//! The execution seam between compiled sequences and engines.

use alsvid_ir::OpSequence;

use crate::error::ExecResult;
use crate::result::ExecutionResult;

/// An engine that runs operation sequences against a fresh register.
///
/// Executors are synchronous and pure: a run never observes state from
/// an earlier run, and the same sequence with the same configuration
/// always addresses the same cells. How outcomes are tallied is up to
/// the engine; deterministic engines report one bitstring with the full
/// shot count.
pub trait Executor {
    /// Short name of this executor.
    fn name(&self) -> &str;

    /// Run the sequence and tally `shots` readouts.
    fn run(&self, seq: &OpSequence, shots: u32) -> ExecResult<ExecutionResult>;
}
