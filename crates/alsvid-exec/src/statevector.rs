//! Statevector simulation engine.

use num_complex::Complex64;
use std::time::Instant;
use tracing::{debug, instrument};

use alsvid_ir::{CellId, Op, OpSequence};

use crate::error::{ExecError, ExecResult};
use crate::executor::Executor;
use crate::result::{Counts, ExecutionResult};

/// A register state as 2^n complex amplitudes.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of register cells.
    num_cells: usize,
}

impl Statevector {
    /// Create a statevector with every cell at zero.
    pub fn new(num_cells: usize) -> Self {
        let size = 1 << num_cells;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_cells,
        }
    }

    /// Create a statevector from a classical bit assignment, cell 0
    /// first. Cells beyond the given bits start at zero.
    pub fn from_bits(num_cells: usize, bits: &[bool]) -> Self {
        let mut basis = 0usize;
        for (cell, &bit) in bits.iter().enumerate() {
            if bit {
                basis |= 1 << cell;
            }
        }
        let size = 1 << num_cells;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[basis] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_cells,
        }
    }

    /// Number of register cells.
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Amplitude of a basis state.
    pub fn amplitude(&self, basis: usize) -> Complex64 {
        self.amplitudes[basis]
    }

    /// Probability of observing a basis state.
    pub fn probability(&self, basis: usize) -> f64 {
        self.amplitudes[basis].norm_sqr()
    }

    /// Apply an operation to the statevector.
    pub fn apply(&mut self, op: &Op) {
        match op {
            Op::Flip { target } => self.apply_flip(&[], target.0 as usize),
            Op::CFlip { control, target } => self.apply_flip(&[*control], target.0 as usize),
            Op::CCFlip {
                control1,
                control2,
                target,
            } => self.apply_flip(&[*control1, *control2], target.0 as usize),
            Op::McFlip { controls, target } => self.apply_flip(controls, target.0 as usize),
            Op::Hadamard { target } => self.apply_hadamard(target.0 as usize),
            Op::CPhase {
                angle,
                control,
                target,
            } => self.apply_cphase(*angle, control.0 as usize, target.0 as usize),
            Op::Swap { a, b } => self.apply_swap(a.0 as usize, b.0 as usize),
            Op::Barrier => {}
        }
    }

    /// Sample a basis-state readout.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (basis, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return basis;
            }
        }

        // Rounding can leave the cumulative sum a hair under 1.0.
        self.amplitudes.len() - 1
    }

    /// Render a sampled outcome with cell 0 as the first character.
    pub fn bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_cells)
            .chars()
            .rev()
            .collect()
    }

    // =========================================================================
    // Gate implementations
    // =========================================================================

    /// Flip the target on every basis state where all controls are set.
    /// An empty control list flips unconditionally.
    fn apply_flip(&mut self, controls: &[CellId], target: usize) {
        let ctrl_mask = controls
            .iter()
            .fold(0usize, |mask, c| mask | (1 << c.0 as usize));
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask) == ctrl_mask && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_hadamard(&mut self, target: usize) {
        let mask = 1 << target;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_cphase(&mut self, angle: f64, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let phase = Complex64::from_polar(1.0, angle);
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_swap(&mut self, a: usize, b: usize) {
        let mask_a = 1 << a;
        let mask_b = 1 << b;
        for i in 0..self.amplitudes.len() {
            let bit_a = (i & mask_a) != 0;
            let bit_b = (i & mask_b) != 0;
            if bit_a && !bit_b {
                let j = (i & !mask_a) | mask_b;
                self.amplitudes.swap(i, j);
            }
        }
    }
}

/// Samples operation sequences through full statevector evolution.
///
/// Exact up to floating-point rounding. Memory grows as 2^width, so
/// runs are capped at a configurable register size (20 cells by
/// default, about 16 MB of amplitudes).
#[derive(Debug, Clone)]
pub struct StatevectorExecutor {
    input: Vec<bool>,
    readout: Option<Vec<CellId>>,
    max_cells: u32,
}

impl StatevectorExecutor {
    /// Create an executor starting from an all-zero register.
    pub fn new() -> Self {
        Self {
            input: vec![],
            readout: None,
            max_cells: 20,
        }
    }

    /// Set the initial register bits, cell 0 first.
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

    /// Raise or lower the register-size cap.
    #[must_use]
    pub fn with_max_cells(mut self, max_cells: u32) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Evolve the sequence from the configured input and return the
    /// final state.
    pub fn evolve(&self, seq: &OpSequence) -> ExecResult<Statevector> {
        let width = seq.width().max(self.input.len() as u32);
        if width > self.max_cells {
            return Err(ExecError::RegisterTooLarge {
                width,
                max: self.max_cells,
            });
        }

        let mut state = Statevector::from_bits(width as usize, &self.input);
        for op in seq {
            state.apply(op);
        }
        Ok(state)
    }

    fn project_readout(&self, state: &Statevector, outcome: usize) -> ExecResult<String> {
        match &self.readout {
            Some(cells) => cells
                .iter()
                .map(|cell| {
                    let index = cell.0 as usize;
                    if index >= state.num_cells() {
                        return Err(ExecError::ReadoutOutOfRange {
                            cell: *cell,
                            width: state.num_cells() as u32,
                        });
                    }
                    Ok(if outcome & (1 << index) != 0 { '1' } else { '0' })
                })
                .collect(),
            None => Ok(state.bitstring(outcome)),
        }
    }
}

impl Default for StatevectorExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for StatevectorExecutor {
    fn name(&self) -> &str {
        "statevector"
    }

    #[instrument(skip(self, seq))]
    fn run(&self, seq: &OpSequence, shots: u32) -> ExecResult<ExecutionResult> {
        let start = Instant::now();
        debug!("Starting statevector run: {} ops, {} shots", seq.len(), shots);

        let state = self.evolve(seq)?;
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = state.sample();
            counts.insert(self.project_readout(&state, outcome)?, 1);
        }

        let elapsed = start.elapsed();
        debug!("Statevector run completed in {:?}", elapsed);

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }
}
