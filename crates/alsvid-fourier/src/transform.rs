//! Fourier transform sequence generators.
//!
//! Both generators are pure functions over an ordered cell list. The
//! phase angle between two list positions depends on their positional
//! distance only, never on the register indices themselves, so the
//! transforms work over any register subset.

use std::f64::consts::PI;

use alsvid_ir::{CellId, OpSequence};

use crate::error::{FourierError, FourierResult};

/// Generate the Fourier transform over the given cells.
///
/// Walks the list from its top position downward: a Hadamard on the
/// position, one controlled phase from every lower position, a barrier
/// after each block and a leading barrier before the first, then the
/// swaps reversing the cell order. An empty list generates an empty
/// sequence.
///
/// ```rust
/// use alsvid_fourier::qft;
/// use alsvid_ir::CellId;
///
/// let cells = [CellId(0), CellId(1), CellId(2)];
/// let seq = qft(&cells).unwrap();
///
/// assert_eq!(seq.count_of("h"), 3);
/// assert_eq!(seq.count_of("cphase"), 3);
/// assert_eq!(seq.count_of("swap"), 1);
/// assert_eq!(seq.len(), 11);
/// ```
pub fn qft(cells: &[CellId]) -> FourierResult<OpSequence> {
    check_distinct(cells)?;
    let n = cells.len();
    if n == 0 {
        return Ok(OpSequence::new());
    }

    let mut seq = OpSequence::with_capacity(sequence_capacity(n));
    seq.barrier()?;
    for j in (0..n).rev() {
        seq.hadamard(cells[j])?;
        for k in (0..j).rev() {
            seq.cphase(phase_angle(j - k), cells[k], cells[j])?;
        }
        seq.barrier()?;
    }
    for i in 0..n / 2 {
        seq.swap(cells[i], cells[n - 1 - i])?;
    }
    Ok(seq)
}

/// Generate the inverse Fourier transform over the given cells.
///
/// Exactly mirrors [`qft`]: the swaps come first in reverse order,
/// then each position from the bottom upward receives its controlled
/// phases with negated angles followed by the Hadamard. The result
/// equals `qft(cells)` inverted operation by operation, so the two
/// concatenated cancel to the identity.
pub fn iqft(cells: &[CellId]) -> FourierResult<OpSequence> {
    check_distinct(cells)?;
    let n = cells.len();
    if n == 0 {
        return Ok(OpSequence::new());
    }

    let mut seq = OpSequence::with_capacity(sequence_capacity(n));
    for i in (0..n / 2).rev() {
        seq.swap(cells[i], cells[n - 1 - i])?;
    }
    seq.barrier()?;
    for j in 0..n {
        for k in 0..j {
            seq.cphase(-phase_angle(j - k), cells[k], cells[j])?;
        }
        seq.hadamard(cells[j])?;
        seq.barrier()?;
    }
    Ok(seq)
}

/// [`qft`] over the contiguous cells `0..width`.
pub fn qft_width(width: u32) -> FourierResult<OpSequence> {
    let cells: Vec<CellId> = (0..width).map(CellId).collect();
    qft(&cells)
}

/// [`iqft`] over the contiguous cells `0..width`.
pub fn iqft_width(width: u32) -> FourierResult<OpSequence> {
    let cells: Vec<CellId> = (0..width).map(CellId).collect();
    iqft(&cells)
}

/// Phase angle between two list positions `distance` apart.
fn phase_angle(distance: usize) -> f64 {
    PI / 2f64.powi(distance as i32)
}

/// Hadamards, phases, barriers and swaps for an n-cell transform.
fn sequence_capacity(n: usize) -> usize {
    n * (n - 1) / 2 + 2 * n + 1 + n / 2
}

fn check_distinct(cells: &[CellId]) -> FourierResult<()> {
    for (i, cell) in cells.iter().enumerate() {
        if cells[..i].contains(cell) {
            return Err(FourierError::DuplicateCell { cell: *cell });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::Op;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn ids(range: std::ops::Range<u32>) -> Vec<CellId> {
        range.map(CellId).collect()
    }

    #[test]
    fn test_qft_three_cells_exact_emission() {
        let seq = qft(&ids(0..3)).unwrap();
        assert_eq!(
            seq.ops(),
            &[
                Op::Barrier,
                Op::Hadamard { target: CellId(2) },
                Op::CPhase {
                    angle: FRAC_PI_2,
                    control: CellId(1),
                    target: CellId(2),
                },
                Op::CPhase {
                    angle: FRAC_PI_4,
                    control: CellId(0),
                    target: CellId(2),
                },
                Op::Barrier,
                Op::Hadamard { target: CellId(1) },
                Op::CPhase {
                    angle: FRAC_PI_2,
                    control: CellId(0),
                    target: CellId(1),
                },
                Op::Barrier,
                Op::Hadamard { target: CellId(0) },
                Op::Barrier,
                Op::Swap {
                    a: CellId(0),
                    b: CellId(2),
                },
            ]
        );
    }

    #[test]
    fn test_qft_operation_counts_grow_quadratically() {
        let seq = qft(&ids(0..4)).unwrap();
        assert_eq!(seq.count_of("h"), 4);
        assert_eq!(seq.count_of("cphase"), 6);
        assert_eq!(seq.count_of("barrier"), 5);
        assert_eq!(seq.count_of("swap"), 2);
    }

    #[test]
    fn test_angles_use_positional_distance() {
        // same spacing of angles on a strided subset as on 0..3
        let seq = qft(&[CellId(0), CellId(2), CellId(4)]).unwrap();
        assert_eq!(
            seq.ops()[2],
            Op::CPhase {
                angle: FRAC_PI_2,
                control: CellId(2),
                target: CellId(4),
            }
        );
        assert_eq!(
            seq.ops()[3],
            Op::CPhase {
                angle: FRAC_PI_4,
                control: CellId(0),
                target: CellId(4),
            }
        );
        assert_eq!(
            seq.ops().last(),
            Some(&Op::Swap {
                a: CellId(0),
                b: CellId(4),
            })
        );
    }

    #[test]
    fn test_iqft_is_the_exact_inverse_emission() {
        for n in [1, 2, 3, 5, 8] {
            let cells = ids(0..n);
            assert_eq!(iqft(&cells).unwrap(), qft(&cells).unwrap().inverse());
        }
    }

    #[test]
    fn test_empty_list_generates_empty_sequence() {
        assert!(qft(&[]).unwrap().is_empty());
        assert!(iqft(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_cell_transform() {
        let seq = qft(&[CellId(5)]).unwrap();
        assert_eq!(
            seq.ops(),
            &[
                Op::Barrier,
                Op::Hadamard { target: CellId(5) },
                Op::Barrier,
            ]
        );
    }

    #[test]
    fn test_duplicate_cell_is_rejected() {
        let err = qft(&[CellId(1), CellId(3), CellId(1)]).unwrap_err();
        assert!(matches!(err, FourierError::DuplicateCell { cell: CellId(1) }));
        assert!(iqft(&[CellId(2), CellId(2)]).is_err());
    }

    #[test]
    fn test_width_helpers_cover_the_low_range() {
        assert_eq!(qft_width(3).unwrap(), qft(&ids(0..3)).unwrap());
        assert_eq!(iqft_width(4).unwrap(), iqft(&ids(0..4)).unwrap());
    }
}
