//! Elementary reversible operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::CellId;
use crate::error::{IrError, IrResult};

/// An elementary operation over register cells.
///
/// Every flip-style operation, [`Op::Hadamard`] and [`Op::Swap`] is its
/// own inverse; [`Op::CPhase`] inverts by negating its angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// Unconditional bit flip of one cell.
    Flip { target: CellId },

    /// Bit flip conditioned on one control cell.
    CFlip { control: CellId, target: CellId },

    /// Bit flip conditioned on two control cells.
    CCFlip {
        control1: CellId,
        control2: CellId,
        target: CellId,
    },

    /// Bit flip conditioned on an arbitrary set of control cells.
    McFlip {
        controls: Vec<CellId>,
        target: CellId,
    },

    /// Hadamard transform of one cell.
    Hadamard { target: CellId },

    /// Relative phase rotation of the target, conditioned on a control cell.
    CPhase {
        angle: f64,
        control: CellId,
        target: CellId,
    },

    /// Exchange of two cells.
    Swap { a: CellId, b: CellId },

    /// Synchronization marker across the whole register.
    Barrier,
}

impl Op {
    /// Short lowercase name of this operation.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Op::Flip { .. } => "flip",
            Op::CFlip { .. } => "cflip",
            Op::CCFlip { .. } => "ccflip",
            Op::McFlip { .. } => "mcflip",
            Op::Hadamard { .. } => "h",
            Op::CPhase { .. } => "cphase",
            Op::Swap { .. } => "swap",
            Op::Barrier => "barrier",
        }
    }

    /// Cells referenced by this operation, controls before the target.
    pub fn cells(&self) -> Vec<CellId> {
        match self {
            Op::Flip { target } | Op::Hadamard { target } => vec![*target],
            Op::CFlip { control, target } => vec![*control, *target],
            Op::CCFlip {
                control1,
                control2,
                target,
            } => vec![*control1, *control2, *target],
            Op::McFlip { controls, target } => {
                let mut cells = controls.clone();
                cells.push(*target);
                cells
            }
            Op::CPhase {
                control, target, ..
            } => vec![*control, *target],
            Op::Swap { a, b } => vec![*a, *b],
            Op::Barrier => vec![],
        }
    }

    /// The algebraic inverse of this operation.
    pub fn inverse(&self) -> Op {
        match self {
            Op::CPhase {
                angle,
                control,
                target,
            } => Op::CPhase {
                angle: -angle,
                control: *control,
                target: *target,
            },
            other => other.clone(),
        }
    }

    /// Whether this operation is a barrier.
    #[inline]
    pub fn is_barrier(&self) -> bool {
        matches!(self, Op::Barrier)
    }

    /// Check that the operation references no cell twice and that a
    /// multi-controlled flip has at least one control.
    pub fn validate(&self) -> IrResult<()> {
        if let Op::McFlip { controls, .. } = self {
            if controls.is_empty() {
                return Err(IrError::EmptyControls);
            }
        }
        let cells = self.cells();
        for (i, cell) in cells.iter().enumerate() {
            if cells[..i].contains(cell) {
                return Err(IrError::DuplicateCell {
                    cell: *cell,
                    op: self.name(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Flip { target } => write!(f, "flip {target}"),
            Op::CFlip { control, target } => write!(f, "cflip {control}, {target}"),
            Op::CCFlip {
                control1,
                control2,
                target,
            } => write!(f, "ccflip {control1}, {control2}, {target}"),
            Op::McFlip { controls, target } => {
                write!(f, "mcflip ")?;
                for c in controls {
                    write!(f, "{c}, ")?;
                }
                write!(f, "{target}")
            }
            Op::Hadamard { target } => write!(f, "h {target}"),
            Op::CPhase {
                angle,
                control,
                target,
            } => write!(f, "cphase({angle}) {control}, {target}"),
            Op::Swap { a, b } => write!(f, "swap {a}, {b}"),
            Op::Barrier => write!(f, "barrier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_names() {
        assert_eq!(Op::Flip { target: CellId(0) }.name(), "flip");
        assert_eq!(Op::Barrier.name(), "barrier");
        assert_eq!(
            Op::CPhase {
                angle: 1.0,
                control: CellId(0),
                target: CellId(1)
            }
            .name(),
            "cphase"
        );
    }

    #[test]
    fn test_flip_ops_are_involutions() {
        let ops = [
            Op::Flip { target: CellId(0) },
            Op::CFlip {
                control: CellId(0),
                target: CellId(1),
            },
            Op::CCFlip {
                control1: CellId(0),
                control2: CellId(1),
                target: CellId(2),
            },
            Op::Hadamard { target: CellId(0) },
            Op::Swap {
                a: CellId(0),
                b: CellId(1),
            },
        ];
        for op in &ops {
            assert_eq!(&op.inverse(), op);
        }
    }

    #[test]
    fn test_cphase_inverse_negates_angle() {
        let op = Op::CPhase {
            angle: 0.5,
            control: CellId(0),
            target: CellId(1),
        };
        assert_eq!(
            op.inverse(),
            Op::CPhase {
                angle: -0.5,
                control: CellId(0),
                target: CellId(1),
            }
        );
        assert_eq!(op.inverse().inverse(), op);
    }

    #[test]
    fn test_validate_rejects_duplicate_cells() {
        let op = Op::CFlip {
            control: CellId(3),
            target: CellId(3),
        };
        assert!(matches!(
            op.validate(),
            Err(IrError::DuplicateCell {
                cell: CellId(3),
                ..
            })
        ));

        let op = Op::McFlip {
            controls: vec![CellId(0), CellId(1), CellId(0)],
            target: CellId(2),
        };
        assert!(op.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_controls() {
        let op = Op::McFlip {
            controls: vec![],
            target: CellId(0),
        };
        assert!(matches!(op.validate(), Err(IrError::EmptyControls)));
    }

    #[test]
    fn test_op_display() {
        let op = Op::CCFlip {
            control1: CellId(0),
            control2: CellId(1),
            target: CellId(2),
        };
        assert_eq!(format!("{op}"), "ccflip 0, 1, 2");

        let op = Op::McFlip {
            controls: vec![CellId(9), CellId(0)],
            target: CellId(2),
        };
        assert_eq!(format!("{op}"), "mcflip 9, 0, 2");
    }
}
