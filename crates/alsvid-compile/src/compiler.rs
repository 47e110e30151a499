//! The reversible-logic compiler.

use alsvid_ir::{CellId, OpSequence};
use alsvid_netlist::{GateRecord, Netlist};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{CompileError, CompileResult};
use crate::expansion;

/// Options controlling sequence emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Emit a barrier after each gate expansion and around the copy stage.
    /// Barriers order the printed sequence; they carry no semantics.
    pub barriers: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { barriers: true }
    }
}

/// Compiles a Boolean netlist into a reversible operation sequence.
///
/// The full compilation runs three stages over one register:
///
/// 1. **Forward pass**: expand each gate in dependency order, computing
///    every internal and output cell from the inputs.
/// 2. **Copy stage**: duplicate each output cell into its copy slot.
/// 3. **Reverse pass**: expand each gate back to front with the
///    intra-gate operation order mirrored, returning every non-input
///    cell outside the copy range to zero.
///
/// ```rust
/// use alsvid_compile::ReversibleCompiler;
/// use alsvid_netlist::Netlist;
///
/// let netlist = Netlist::parse("2\n1\n0\n0 1\n2\n\n2 and 0 1\n").unwrap();
/// let compiler = ReversibleCompiler::new(netlist);
/// let seq = compiler.compile().unwrap();
///
/// // Forward and reverse each contribute one ccflip, the copy stage
/// // one cflip into the copy slot.
/// assert_eq!(seq.count_of("ccflip"), 2);
/// assert_eq!(seq.count_of("cflip"), 1);
/// assert_eq!(compiler.register_width(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ReversibleCompiler {
    netlist: Netlist,
    options: CompileOptions,
}

impl ReversibleCompiler {
    /// Create a compiler over a validated netlist, with default options.
    pub fn new(netlist: Netlist) -> Self {
        Self {
            netlist,
            options: CompileOptions::default(),
        }
    }

    /// Set the emission options.
    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// The netlist being compiled.
    pub fn netlist(&self) -> &Netlist {
        &self.netlist
    }

    /// Number of register cells the compiled sequence addresses, copy
    /// slots included.
    pub fn register_width(&self) -> u32 {
        self.netlist.layout().total_cells()
    }

    /// Emit the forward pass alone.
    pub fn forward(&self) -> CompileResult<OpSequence> {
        let mut seq = OpSequence::new();
        self.emit_forward(&mut seq)?;
        Ok(seq)
    }

    /// Emit the output-copy stage alone.
    pub fn copy_outputs(&self) -> CompileResult<OpSequence> {
        let mut seq = OpSequence::new();
        self.emit_copy(&mut seq)?;
        Ok(seq)
    }

    /// Emit the reverse pass alone.
    pub fn reverse(&self) -> CompileResult<OpSequence> {
        let mut seq = OpSequence::new();
        self.emit_reverse(&mut seq)?;
        Ok(seq)
    }

    /// Compile the netlist into the full ancilla-clean sequence.
    ///
    /// After the emitted sequence runs against a register whose
    /// non-input cells start at zero, only the input cells and the copy
    /// slots may hold nonzero values.
    #[instrument(skip(self))]
    pub fn compile(&self) -> CompileResult<OpSequence> {
        info!(
            "Compiling netlist with {} gates over {} cells",
            self.netlist.gates().len(),
            self.register_width()
        );

        let mut seq = OpSequence::new();
        self.emit_forward(&mut seq)?;
        debug!("Forward pass completed, ops: {}", seq.len());
        self.emit_copy(&mut seq)?;
        debug!("Copy stage completed, ops: {}", seq.len());
        self.emit_reverse(&mut seq)?;
        debug!("Reverse pass completed, ops: {}", seq.len());

        Ok(seq)
    }

    /// Emit the forward pass qualified by one extra control cell.
    ///
    /// The control must lie outside the compiled register. Only `and`
    /// and `not` gates have controlled forms; any other kind aborts the
    /// whole compilation.
    pub fn forward_controlled(&self, control: CellId) -> CompileResult<OpSequence> {
        self.check_control(control)?;
        let mut seq = OpSequence::new();
        self.emit_controlled(&mut seq, control, self.netlist.gates().iter())?;
        Ok(seq)
    }

    /// Emit the reverse pass qualified by one extra control cell.
    pub fn reverse_controlled(&self, control: CellId) -> CompileResult<OpSequence> {
        self.check_control(control)?;
        let mut seq = OpSequence::new();
        self.emit_controlled(&mut seq, control, self.netlist.gates().iter().rev())?;
        Ok(seq)
    }

    /// Compile the controlled form of the full three-stage sequence.
    ///
    /// With the control cell at zero the sequence acts as the identity
    /// on every register cell; with the control at one it reproduces
    /// [`ReversibleCompiler::compile`] up to the copy stage remaining
    /// unconditioned.
    #[instrument(skip(self))]
    pub fn compile_controlled(&self, control: CellId) -> CompileResult<OpSequence> {
        self.check_control(control)?;
        info!(
            "Compiling controlled netlist with {} gates, control cell {}",
            self.netlist.gates().len(),
            control
        );

        let mut seq = OpSequence::new();
        self.emit_controlled(&mut seq, control, self.netlist.gates().iter())?;
        debug!("Controlled forward pass completed, ops: {}", seq.len());
        self.emit_copy(&mut seq)?;
        debug!("Copy stage completed, ops: {}", seq.len());
        self.emit_controlled(&mut seq, control, self.netlist.gates().iter().rev())?;
        debug!("Controlled reverse pass completed, ops: {}", seq.len());

        Ok(seq)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn emit_forward(&self, seq: &mut OpSequence) -> CompileResult<()> {
        for record in self.netlist.gates() {
            for op in expansion::forward_ops(record) {
                seq.push(op)?;
            }
            if self.options.barriers {
                seq.barrier()?;
            }
        }
        Ok(())
    }

    fn emit_reverse(&self, seq: &mut OpSequence) -> CompileResult<()> {
        for record in self.netlist.gates().iter().rev() {
            for op in expansion::reverse_ops(record) {
                seq.push(op)?;
            }
            if self.options.barriers {
                seq.barrier()?;
            }
        }
        Ok(())
    }

    fn emit_copy(&self, seq: &mut OpSequence) -> CompileResult<()> {
        if self.options.barriers && !seq.ends_with_barrier() {
            seq.barrier()?;
        }
        let layout = self.netlist.layout();
        for (output, copy) in layout.output().iter().zip(layout.copy().iter()) {
            seq.cflip(output, copy)?;
        }
        if self.options.barriers {
            seq.barrier()?;
        }
        Ok(())
    }

    fn emit_controlled<'a>(
        &self,
        seq: &mut OpSequence,
        control: CellId,
        records: impl Iterator<Item = &'a GateRecord>,
    ) -> CompileResult<()> {
        for record in records {
            seq.push(expansion::controlled_op(record, control)?)?;
            if self.options.barriers {
                seq.barrier()?;
            }
        }
        Ok(())
    }

    fn check_control(&self, control: CellId) -> CompileResult<()> {
        let total = self.netlist.layout().total_cells();
        if control.0 < total {
            return Err(CompileError::ControlInsideRegister { control, total });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::Op;

    fn single_and() -> Netlist {
        Netlist::parse("2\n1\n0\n0 1\n2\n\n2 and 0 1\n").unwrap()
    }

    fn and_not_chain() -> Netlist {
        Netlist::parse("2\n1\n1\n0 1\n3\n2\n2 and 0 1\n3 not 2\n").unwrap()
    }

    fn bare(netlist: Netlist) -> ReversibleCompiler {
        ReversibleCompiler::new(netlist).with_options(CompileOptions { barriers: false })
    }

    #[test]
    fn test_forward_single_and_without_barriers() {
        let seq = bare(single_and()).forward().unwrap();
        assert_eq!(
            seq.ops(),
            &[Op::CCFlip {
                control1: CellId(0),
                control2: CellId(1),
                target: CellId(2),
            }]
        );
    }

    #[test]
    fn test_forward_emits_barrier_after_each_gate() {
        let seq = ReversibleCompiler::new(and_not_chain()).forward().unwrap();
        // one op for the and, two for the conditioned not, a barrier each
        assert_eq!(seq.len(), 5);
        assert!(seq.ops()[1].is_barrier());
        assert!(seq.ends_with_barrier());
    }

    #[test]
    fn test_copy_stage_targets_copy_slots() {
        let seq = bare(and_not_chain()).copy_outputs().unwrap();
        assert_eq!(
            seq.ops(),
            &[Op::CFlip {
                control: CellId(3),
                target: CellId(4),
            }]
        );
    }

    #[test]
    fn test_copy_stage_is_fenced_by_barriers() {
        let seq = ReversibleCompiler::new(and_not_chain())
            .copy_outputs()
            .unwrap();
        assert_eq!(seq.len(), 3);
        assert!(seq.ops()[0].is_barrier());
        assert!(seq.ends_with_barrier());
    }

    #[test]
    fn test_reverse_walks_gates_back_to_front() {
        let seq = bare(and_not_chain()).reverse().unwrap();
        assert_eq!(
            seq.ops(),
            &[
                Op::CFlip {
                    control: CellId(2),
                    target: CellId(3),
                },
                Op::Flip { target: CellId(3) },
                Op::CCFlip {
                    control1: CellId(0),
                    control2: CellId(1),
                    target: CellId(2),
                },
            ]
        );
    }

    #[test]
    fn test_compile_concatenates_the_three_stages() {
        let compiler = bare(and_not_chain());
        let seq = compiler.compile().unwrap();

        let mut expected = compiler.forward().unwrap();
        expected.extend(&compiler.copy_outputs().unwrap());
        expected.extend(&compiler.reverse().unwrap());
        assert_eq!(seq, expected);
    }

    #[test]
    fn test_compile_does_not_double_the_seam_barrier() {
        let seq = ReversibleCompiler::new(single_and()).compile().unwrap();
        assert_eq!(seq.len(), 6);
        let adjacent = seq
            .ops()
            .windows(2)
            .filter(|pair| pair[0].is_barrier() && pair[1].is_barrier())
            .count();
        assert_eq!(adjacent, 0);
    }

    #[test]
    fn test_register_width_includes_copy_slots() {
        assert_eq!(ReversibleCompiler::new(and_not_chain()).register_width(), 5);
        assert_eq!(ReversibleCompiler::new(single_and()).register_width(), 4);
    }

    #[test]
    fn test_controlled_passes_share_the_per_gate_table() {
        let compiler = bare(and_not_chain());
        let forward = compiler.forward_controlled(CellId(5)).unwrap();
        assert_eq!(
            forward.ops(),
            &[
                Op::McFlip {
                    controls: vec![CellId(5), CellId(0), CellId(1)],
                    target: CellId(2),
                },
                Op::CFlip {
                    control: CellId(5),
                    target: CellId(3),
                },
            ]
        );

        let reverse = compiler.reverse_controlled(CellId(5)).unwrap();
        assert_eq!(reverse, forward.inverse());
    }

    #[test]
    fn test_controlled_rejects_unsupported_kind() {
        let netlist = Netlist::parse("2\n1\n0\n0 1\n2\n\n2 xor 0 1\n").unwrap();
        let err = ReversibleCompiler::new(netlist)
            .compile_controlled(CellId(4))
            .unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnsupportedControlled { kind: "xor" }
        ));
    }

    #[test]
    fn test_controlled_rejects_control_inside_register() {
        // cell 3 is the copy slot of this netlist
        let err = bare(single_and()).forward_controlled(CellId(3)).unwrap_err();
        assert!(matches!(
            err,
            CompileError::ControlInsideRegister {
                control: CellId(3),
                total: 4,
            }
        ));
    }

    #[test]
    fn test_default_options_emit_barriers() {
        assert!(CompileOptions::default().barriers);
    }
}
