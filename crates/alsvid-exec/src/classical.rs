//! Deterministic bit-vector execution.

use alsvid_ir::{CellId, Op, OpSequence};
use tracing::{debug, instrument};

use crate::error::{ExecError, ExecResult};
use crate::executor::Executor;
use crate::result::{Counts, ExecutionResult};

/// Evaluates flip-only sequences over a classical bit register.
///
/// Every cell is a plain bit and a run is one deterministic
/// evaluation, so the tally holds a single bitstring carrying the full
/// shot count. [`Op::Hadamard`] and [`Op::CPhase`] have no classical
/// interpretation and abort the run.
#[derive(Debug, Clone, Default)]
pub struct ClassicalExecutor {
    input: Vec<bool>,
    readout: Option<Vec<CellId>>,
}

impl ClassicalExecutor {
    /// Create an executor starting from an all-zero register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial register bits, cell 0 first. Cells beyond the
    /// given bits start at zero.
    #[must_use]
    pub fn with_input(mut self, bits: &[bool]) -> Self {
        self.input = bits.to_vec();
        self
    }

    /// Restrict the readout to the given cells, in order.
    #[must_use]
    pub fn with_readout(mut self, cells: Vec<CellId>) -> Self {
        self.readout = Some(cells);
        self
    }

    /// Evaluate the sequence and return the final register, cell 0
    /// first.
    pub fn evaluate(&self, seq: &OpSequence) -> ExecResult<Vec<bool>> {
        let width = seq.width().max(self.input.len() as u32) as usize;
        let mut bits = vec![false; width];
        bits[..self.input.len()].copy_from_slice(&self.input);

        for op in seq {
            apply_classical(&mut bits, op)?;
        }
        Ok(bits)
    }

    fn readout_string(&self, bits: &[bool]) -> ExecResult<String> {
        match &self.readout {
            Some(cells) => cells
                .iter()
                .map(|cell| {
                    bits.get(cell.0 as usize).map(|&bit| bit_char(bit)).ok_or(
                        ExecError::ReadoutOutOfRange {
                            cell: *cell,
                            width: bits.len() as u32,
                        },
                    )
                })
                .collect(),
            None => Ok(bits.iter().map(|&bit| bit_char(bit)).collect()),
        }
    }
}

impl Executor for ClassicalExecutor {
    fn name(&self) -> &str {
        "classical"
    }

    #[instrument(skip(self, seq))]
    fn run(&self, seq: &OpSequence, shots: u32) -> ExecResult<ExecutionResult> {
        debug!("Evaluating {} ops classically", seq.len());

        let bits = self.evaluate(seq)?;
        let bitstring = self.readout_string(&bits)?;

        let mut counts = Counts::new();
        counts.insert(bitstring, u64::from(shots));
        Ok(ExecutionResult::new(counts, shots))
    }
}

fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

fn apply_classical(bits: &mut [bool], op: &Op) -> ExecResult<()> {
    match op {
        Op::Flip { target } => bits[target.0 as usize] ^= true,
        Op::CFlip { control, target } => {
            if bits[control.0 as usize] {
                bits[target.0 as usize] ^= true;
            }
        }
        Op::CCFlip {
            control1,
            control2,
            target,
        } => {
            if bits[control1.0 as usize] && bits[control2.0 as usize] {
                bits[target.0 as usize] ^= true;
            }
        }
        Op::McFlip { controls, target } => {
            if controls.iter().all(|c| bits[c.0 as usize]) {
                bits[target.0 as usize] ^= true;
            }
        }
        Op::Swap { a, b } => bits.swap(a.0 as usize, b.0 as usize),
        Op::Barrier => {}
        Op::Hadamard { .. } | Op::CPhase { .. } => {
            return Err(ExecError::NonClassicalOp { op: op.name() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flips_compose_over_the_register() {
        let mut seq = OpSequence::new();
        seq.flip(CellId(0))
            .unwrap()
            .cflip(CellId(0), CellId(1))
            .unwrap()
            .ccflip(CellId(0), CellId(1), CellId(2))
            .unwrap()
            .barrier()
            .unwrap();

        let bits = ClassicalExecutor::new().evaluate(&seq).unwrap();
        assert_eq!(bits, vec![true, true, true]);
    }

    #[test]
    fn test_mcflip_requires_every_control() {
        let mut seq = OpSequence::new();
        seq.mcflip(vec![CellId(0), CellId(1), CellId(2)], CellId(3))
            .unwrap();

        let executor = ClassicalExecutor::new().with_input(&[true, true, false]);
        let bits = executor.evaluate(&seq).unwrap();
        assert!(!bits[3]);

        let executor = ClassicalExecutor::new().with_input(&[true, true, true]);
        let bits = executor.evaluate(&seq).unwrap();
        assert!(bits[3]);
    }

    #[test]
    fn test_swap_exchanges_bits() {
        let mut seq = OpSequence::new();
        seq.swap(CellId(0), CellId(2)).unwrap();

        let executor = ClassicalExecutor::new().with_input(&[true, false, false]);
        assert_eq!(
            executor.evaluate(&seq).unwrap(),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_input_extends_the_register() {
        let mut seq = OpSequence::new();
        seq.flip(CellId(0)).unwrap();

        let executor = ClassicalExecutor::new().with_input(&[true, false, false, true]);
        assert_eq!(
            executor.evaluate(&seq).unwrap(),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn test_run_reports_one_deterministic_outcome() {
        let mut seq = OpSequence::new();
        seq.flip(CellId(1)).unwrap();

        let result = ClassicalExecutor::new().run(&seq, 1000).unwrap();
        assert_eq!(result.shots, 1000);
        assert_eq!(result.counts.len(), 1);
        assert_eq!(result.counts.get("01"), 1000);
    }

    #[test]
    fn test_readout_selects_cells_in_order() {
        let mut seq = OpSequence::new();
        seq.flip(CellId(2)).unwrap();

        let executor = ClassicalExecutor::new().with_readout(vec![CellId(2), CellId(0)]);
        let result = executor.run(&seq, 1).unwrap();
        assert_eq!(result.counts.get("10"), 1);
    }

    #[test]
    fn test_readout_outside_register_is_rejected() {
        let mut seq = OpSequence::new();
        seq.flip(CellId(0)).unwrap();

        let executor = ClassicalExecutor::new().with_readout(vec![CellId(5)]);
        let err = executor.run(&seq, 1).unwrap_err();
        assert!(matches!(
            err,
            ExecError::ReadoutOutOfRange {
                cell: CellId(5),
                width: 1,
            }
        ));
    }

    #[test]
    fn test_rejects_operations_without_classical_meaning() {
        let mut seq = OpSequence::new();
        seq.hadamard(CellId(0)).unwrap();
        let err = ClassicalExecutor::new().evaluate(&seq).unwrap_err();
        assert!(matches!(err, ExecError::NonClassicalOp { op: "h" }));

        let mut seq = OpSequence::new();
        seq.cphase(0.5, CellId(0), CellId(1)).unwrap();
        let err = ClassicalExecutor::new().evaluate(&seq).unwrap_err();
        assert!(matches!(err, ExecError::NonClassicalOp { op: "cphase" }));
    }
}
