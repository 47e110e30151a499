//! Ordered sequences of elementary operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::CellId;
use crate::error::IrResult;
use crate::op::Op;

/// An ordered sequence of elementary operations.
///
/// This is the output unit of the compiler and the transform generators.
/// Sequences are built through fluent fallible methods:
///
/// ```rust
/// use alsvid_ir::{CellId, OpSequence};
///
/// let mut seq = OpSequence::new();
/// seq.flip(CellId(2)).unwrap();
/// seq.cflip(CellId(0), CellId(2)).unwrap();
/// assert_eq!(seq.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpSequence {
    ops: Vec<Op>,
}

impl OpSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { ops: vec![] }
    }

    /// Create an empty sequence with room for `capacity` operations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Validate and append a single operation.
    pub fn push(&mut self, op: Op) -> IrResult<()> {
        op.validate()?;
        self.ops.push(op);
        Ok(())
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Append an unconditional flip.
    pub fn flip(&mut self, target: CellId) -> IrResult<&mut Self> {
        self.push(Op::Flip { target })?;
        Ok(self)
    }

    /// Append a controlled flip.
    pub fn cflip(&mut self, control: CellId, target: CellId) -> IrResult<&mut Self> {
        self.push(Op::CFlip { control, target })?;
        Ok(self)
    }

    /// Append a doubly-controlled flip.
    pub fn ccflip(
        &mut self,
        control1: CellId,
        control2: CellId,
        target: CellId,
    ) -> IrResult<&mut Self> {
        self.push(Op::CCFlip {
            control1,
            control2,
            target,
        })?;
        Ok(self)
    }

    /// Append a multi-controlled flip.
    pub fn mcflip(&mut self, controls: Vec<CellId>, target: CellId) -> IrResult<&mut Self> {
        self.push(Op::McFlip { controls, target })?;
        Ok(self)
    }

    /// Append a Hadamard transform.
    pub fn hadamard(&mut self, target: CellId) -> IrResult<&mut Self> {
        self.push(Op::Hadamard { target })?;
        Ok(self)
    }

    /// Append a controlled phase rotation.
    pub fn cphase(&mut self, angle: f64, control: CellId, target: CellId) -> IrResult<&mut Self> {
        self.push(Op::CPhase {
            angle,
            control,
            target,
        })?;
        Ok(self)
    }

    /// Append a cell exchange.
    pub fn swap(&mut self, a: CellId, b: CellId) -> IrResult<&mut Self> {
        self.push(Op::Swap { a, b })?;
        Ok(self)
    }

    /// Append a barrier over the whole register.
    pub fn barrier(&mut self) -> IrResult<&mut Self> {
        self.push(Op::Barrier)?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The operations in order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of operations, barriers included.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the sequence holds no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Whether the last operation is a barrier.
    pub fn ends_with_barrier(&self) -> bool {
        self.ops.last().is_some_and(Op::is_barrier)
    }

    /// Number of cells addressed: one past the highest referenced index.
    pub fn width(&self) -> u32 {
        self.ops
            .iter()
            .flat_map(Op::cells)
            .map(|c| c.0 + 1)
            .max()
            .unwrap_or(0)
    }

    /// Count operations with the given short name.
    pub fn count_of(&self, name: &str) -> usize {
        self.ops.iter().filter(|op| op.name() == name).count()
    }

    /// Iterate over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Whole-sequence inverse: each operation inverted, order reversed.
    pub fn inverse(&self) -> OpSequence {
        OpSequence {
            ops: self.ops.iter().rev().map(Op::inverse).collect(),
        }
    }

    /// Append every operation of `other` in order.
    pub fn extend(&mut self, other: &OpSequence) {
        self.ops.extend(other.ops.iter().cloned());
    }

    /// Consume the sequence and return its operations.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }
}

/// Build a sequence from operations taken as-is.
///
/// The builder methods are the validated path; this trusts the caller.
impl From<Vec<Op>> for OpSequence {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}

impl<'a> IntoIterator for &'a OpSequence {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for OpSequence {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl fmt::Display for OpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{op}")?;
        }
        Ok(())
    }
}
