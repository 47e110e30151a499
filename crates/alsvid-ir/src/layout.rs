//! Register layout: the named contiguous ranges of a reversible register.

use serde::{Deserialize, Serialize};

use crate::cell::CellId;
use crate::error::{IrError, IrResult};

/// A contiguous run of cells covering `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    start: u32,
    len: u32,
}

impl CellRange {
    /// Create a range covering `[start, start + len)`.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// First cell index of the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// One past the last cell index of the range.
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Number of cells in the range.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether the range holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `cell` lies within the range.
    pub fn contains(&self, cell: CellId) -> bool {
        cell.0 >= self.start && cell.0 < self.end()
    }

    /// Cell at position `index` within the range.
    pub fn cell(&self, index: u32) -> Option<CellId> {
        (index < self.len).then(|| CellId(self.start + index))
    }

    /// Iterate the cells of the range in ascending order.
    pub fn iter(self) -> impl Iterator<Item = CellId> {
        (self.start..self.end()).map(CellId)
    }
}

/// The partition of a reversible register into its named ranges.
///
/// The input, internal and output ranges come from the netlist
/// declaration and must tile `[0, declared_total)`. The copy range sits
/// directly after the declared cells and receives the output copies; it
/// is the only place copy-slot addresses are computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterLayout {
    input: CellRange,
    internal: CellRange,
    output: CellRange,
    copy: CellRange,
}

impl RegisterLayout {
    /// Build a layout from the three declared cell lists.
    ///
    /// Each list must be a contiguous ascending run, and the three runs
    /// together must tile `[0, total)` with no gap or overlap.
    pub fn from_cells(
        inputs: &[CellId],
        internals: &[CellId],
        outputs: &[CellId],
    ) -> IrResult<Self> {
        let input = contiguous_run("input", inputs)?;
        let internal = contiguous_run("internal", internals)?;
        let output = contiguous_run("output", outputs)?;

        let total = input.len() + internal.len() + output.len();
        let mut ranges = [input, internal, output];
        ranges.sort_by_key(CellRange::start);
        let mut expected = 0;
        for range in ranges.iter().filter(|r| !r.is_empty()) {
            if range.start() != expected {
                return Err(IrError::PartitionMismatch {
                    expected,
                    found: range.start(),
                });
            }
            expected = range.end();
        }

        Ok(Self {
            input,
            internal,
            output,
            copy: CellRange::new(total, output.len()),
        })
    }

    /// Range holding the primary inputs.
    pub fn input(&self) -> CellRange {
        self.input
    }

    /// Range holding the intermediate wires.
    pub fn internal(&self) -> CellRange {
        self.internal
    }

    /// Range holding the declared outputs.
    pub fn output(&self) -> CellRange {
        self.output
    }

    /// Range receiving the output copies, directly after the declared cells.
    pub fn copy(&self) -> CellRange {
        self.copy
    }

    /// Number of declared cells (inputs, internals and outputs).
    pub fn declared_total(&self) -> u32 {
        self.copy.start()
    }

    /// Number of cells including the copy range.
    pub fn total_cells(&self) -> u32 {
        self.copy.end()
    }

    /// Copy slot for the output at list position `index`.
    pub fn copy_slot(&self, index: u32) -> Option<CellId> {
        self.copy.cell(index)
    }

    /// Check a cell against the full register, copy range included.
    pub fn check(&self, cell: CellId) -> IrResult<()> {
        if cell.0 < self.total_cells() {
            Ok(())
        } else {
            Err(IrError::CellOutOfRange {
                cell,
                total: self.total_cells(),
            })
        }
    }
}

fn contiguous_run(register: &'static str, cells: &[CellId]) -> IrResult<CellRange> {
    match cells.first() {
        None => Ok(CellRange::new(0, 0)),
        Some(first) => {
            for (i, cell) in cells.iter().enumerate() {
                if cell.0 != first.0 + i as u32 {
                    return Err(IrError::NonContiguousRange { register });
                }
            }
            Ok(CellRange::new(first.0, cells.len() as u32))
        }
    }
}
