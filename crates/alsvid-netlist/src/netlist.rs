//! In-memory netlist model and structural validation.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use alsvid_ir::{CellId, RegisterLayout};

use crate::deps;
use crate::error::{NetlistError, NetlistResult};
use crate::parser;

/// A Boolean logic gate with its operand cells.
///
/// Arity is fixed by the variant shape: the two-operand kinds carry
/// exactly two cells, `not` carries an optional conditioning cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicGate {
    /// Logical conjunction of two cells.
    And(CellId, CellId),
    /// Logical disjunction of two cells.
    Or(CellId, CellId),
    /// Exclusive disjunction of two cells.
    Xor(CellId, CellId),
    /// Negated conjunction of two cells.
    Nand(CellId, CellId),
    /// Negation, optionally conditioned on one cell.
    Not(Option<CellId>),
}

impl LogicGate {
    /// Short lowercase name of this gate kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            LogicGate::And(_, _) => "and",
            LogicGate::Or(_, _) => "or",
            LogicGate::Xor(_, _) => "xor",
            LogicGate::Nand(_, _) => "nand",
            LogicGate::Not(_) => "not",
        }
    }

    /// The operand cells of this gate, in record order.
    pub fn operands(&self) -> Vec<CellId> {
        match self {
            LogicGate::And(a, b)
            | LogicGate::Or(a, b)
            | LogicGate::Xor(a, b)
            | LogicGate::Nand(a, b) => vec![*a, *b],
            LogicGate::Not(Some(a)) => vec![*a],
            LogicGate::Not(None) => vec![],
        }
    }
}

/// One netlist record: a gate writing its result into a target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRecord {
    /// Cell receiving the gate's result.
    pub target: CellId,
    /// The gate and its operands.
    pub gate: LogicGate,
}

impl GateRecord {
    /// Create a record from a target and a gate.
    pub fn new(target: CellId, gate: LogicGate) -> Self {
        Self { target, gate }
    }
}

impl fmt::Display for GateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.gate.name())?;
        for operand in self.gate.operands() {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

/// A validated Boolean netlist.
///
/// Holds the three declared register index lists, the ordered gate
/// records, and the [`RegisterLayout`] derived from the declaration.
/// Construction validates the whole structure; an invalid netlist is
/// never observable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Netlist {
    input_cells: Vec<CellId>,
    output_cells: Vec<CellId>,
    internal_cells: Vec<CellId>,
    gates: Vec<GateRecord>,
    layout: RegisterLayout,
}

impl Netlist {
    /// Build and validate a netlist from its parts.
    pub fn new(
        input_cells: Vec<CellId>,
        output_cells: Vec<CellId>,
        internal_cells: Vec<CellId>,
        gates: Vec<GateRecord>,
    ) -> NetlistResult<Self> {
        let layout = RegisterLayout::from_cells(&input_cells, &internal_cells, &output_cells)?;
        let netlist = Self {
            input_cells,
            output_cells,
            internal_cells,
            gates,
            layout,
        };
        netlist.validate()?;
        Ok(netlist)
    }

    /// Parse a netlist from its text format.
    pub fn parse(source: &str) -> NetlistResult<Self> {
        parser::parse(source)
    }

    /// Read and parse a netlist file.
    pub fn from_path(path: impl AsRef<Path>) -> NetlistResult<Self> {
        let source = std::fs::read_to_string(path)?;
        parser::parse(&source)
    }

    /// Check every gate record against the register declaration.
    ///
    /// Verifies cell bounds, operand distinctness, the single-writer
    /// discipline and the wire dependency order. `new` runs this; it is
    /// exposed for callers that want the check by name.
    pub fn validate(&self) -> NetlistResult<()> {
        let total = self.layout.declared_total();
        for record in &self.gates {
            check_declared(record.target, total)?;
            let operands = record.gate.operands();
            for (i, operand) in operands.iter().enumerate() {
                check_declared(*operand, total)?;
                if *operand == record.target {
                    return Err(NetlistError::SelfReference { cell: *operand });
                }
                if operands[..i].contains(operand) {
                    return Err(NetlistError::DuplicateOperand { cell: *operand });
                }
            }
        }
        deps::check_wires(self)
    }

    /// Number of declared input cells.
    pub fn n_inputs(&self) -> usize {
        self.input_cells.len()
    }

    /// Number of declared output cells.
    pub fn n_outputs(&self) -> usize {
        self.output_cells.len()
    }

    /// Number of declared internal cells.
    pub fn n_internal(&self) -> usize {
        self.internal_cells.len()
    }

    /// The declared input cell indices.
    pub fn input_cells(&self) -> &[CellId] {
        &self.input_cells
    }

    /// The declared output cell indices.
    pub fn output_cells(&self) -> &[CellId] {
        &self.output_cells
    }

    /// The declared internal cell indices.
    pub fn internal_cells(&self) -> &[CellId] {
        &self.internal_cells
    }

    /// The gate records in dependency order.
    pub fn gates(&self) -> &[GateRecord] {
        &self.gates
    }

    /// The register layout derived from the declaration.
    pub fn layout(&self) -> &RegisterLayout {
        &self.layout
    }

    /// Number of declared cells (inputs, internals and outputs).
    pub fn total_cells(&self) -> u32 {
        self.layout.declared_total()
    }

    /// Length of the longest wire dependency chain through the gates.
    pub fn logic_depth(&self) -> usize {
        deps::logic_depth(self)
    }
}

/// Emits the netlist text format, so `parse(netlist.to_string())`
/// reproduces the netlist.
impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.input_cells.len())?;
        writeln!(f, "{}", self.output_cells.len())?;
        writeln!(f, "{}", self.internal_cells.len())?;
        for cells in [&self.input_cells, &self.output_cells, &self.internal_cells] {
            let line = cells
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        for record in &self.gates {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

fn check_declared(cell: CellId, total: u32) -> NetlistResult<()> {
    if cell.0 < total {
        Ok(())
    } else {
        Err(NetlistError::CellOutOfRange { cell, total })
    }
}
