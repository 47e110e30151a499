//! Parser for the netlist text format.

use alsvid_ir::CellId;

use crate::error::{NetlistError, NetlistResult};
use crate::lexer::{LinedToken, Token, tokenize};
use crate::netlist::{GateRecord, LogicGate, Netlist};

/// Parse a netlist source string into a validated [`Netlist`].
pub fn parse(source: &str) -> NetlistResult<Netlist> {
    Parser::new(source)?.parse_netlist()
}

/// Gate kind as named on a gate line.
#[derive(Debug, Clone, Copy)]
enum Kind {
    And,
    Or,
    Xor,
    Nand,
    Not,
}

/// Parser state.
struct Parser {
    tokens: Vec<LinedToken>,
    pos: usize,
}

impl Parser {
    fn new(source: &str) -> NetlistResult<Self> {
        let mut tokens = Vec::new();
        for result in tokenize(source) {
            match result {
                Ok(t) => tokens.push(t),
                Err((line, text)) => {
                    return Err(NetlistError::InvalidToken { line, text });
                }
            }
        }
        Ok(Self { tokens, pos: 0 })
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    /// Line of the current token, or of the last one at end of input.
    fn line(&self) -> usize {
        match self.tokens.get(self.pos).or_else(|| self.tokens.last()) {
            Some(t) => t.line,
            None => 1,
        }
    }

    fn advance(&mut self) -> Option<Token> {
        if self.is_eof() {
            return None;
        }
        let token = self.tokens[self.pos].token.clone();
        self.pos += 1;
        Some(token)
    }

    fn skip_newlines(&mut self) {
        while matches!(self.peek(), Some(Token::Newline)) {
            self.advance();
        }
    }

    /// Consume a newline or the end of input.
    fn expect_eol(&mut self) -> NetlistResult<()> {
        let line = self.line();
        match self.advance() {
            None | Some(Token::Newline) => Ok(()),
            Some(found) => Err(NetlistError::UnexpectedToken {
                line,
                expected: "end of line",
                found: found.to_string(),
            }),
        }
    }

    fn expect_int(&mut self, expected: &'static str) -> NetlistResult<u32> {
        let line = self.line();
        match self.advance() {
            Some(Token::Int(v)) => Ok(v),
            Some(found) => Err(NetlistError::UnexpectedToken {
                line,
                expected,
                found: found.to_string(),
            }),
            None => Err(NetlistError::MissingLine { expected }),
        }
    }

    fn parse_netlist(&mut self) -> NetlistResult<Netlist> {
        let n_inputs = self.parse_count("input count")?;
        let n_outputs = self.parse_count("output count")?;
        let n_internal = self.parse_count("internal count")?;

        let input_cells = self.parse_index_line(n_inputs, "input")?;
        let output_cells = self.parse_index_line(n_outputs, "output")?;
        let internal_cells = self.parse_index_line(n_internal, "internal")?;

        let mut gates = Vec::new();
        self.skip_newlines();
        while !self.is_eof() {
            gates.push(self.parse_gate_record()?);
            self.skip_newlines();
        }

        Netlist::new(input_cells, output_cells, internal_cells, gates)
    }

    /// One header line holding a single count.
    fn parse_count(&mut self, expected: &'static str) -> NetlistResult<usize> {
        let count = self.expect_int(expected)?;
        self.expect_eol()?;
        Ok(count as usize)
    }

    /// One line of register indices, checked against its declared count.
    fn parse_index_line(
        &mut self,
        declared: usize,
        register: &'static str,
    ) -> NetlistResult<Vec<CellId>> {
        let line = self.line();
        let mut cells = Vec::with_capacity(declared);
        loop {
            match self.advance() {
                Some(Token::Int(v)) => cells.push(CellId(v)),
                Some(Token::Newline) | None => break,
                Some(found) => {
                    return Err(NetlistError::UnexpectedToken {
                        line,
                        expected: "register index",
                        found: found.to_string(),
                    });
                }
            }
        }
        if cells.len() != declared {
            return Err(NetlistError::CountMismatch {
                line,
                register,
                declared,
                found: cells.len(),
            });
        }
        Ok(cells)
    }

    /// One gate line: `<target> <kind> [<operands>...]`.
    fn parse_gate_record(&mut self) -> NetlistResult<GateRecord> {
        let line = self.line();
        let target = CellId(self.expect_int("gate target")?);
        let kind = self.parse_kind(line)?;

        let mut operands = Vec::new();
        loop {
            match self.advance() {
                Some(Token::Int(v)) => operands.push(CellId(v)),
                Some(Token::Newline) | None => break,
                Some(found) => {
                    return Err(NetlistError::UnexpectedToken {
                        line,
                        expected: "operand index",
                        found: found.to_string(),
                    });
                }
            }
        }

        let gate = build_gate(line, kind, &operands)?;
        Ok(GateRecord::new(target, gate))
    }

    fn parse_kind(&mut self, line: usize) -> NetlistResult<Kind> {
        match self.advance() {
            Some(Token::And) => Ok(Kind::And),
            Some(Token::Or) => Ok(Kind::Or),
            Some(Token::Xor) => Ok(Kind::Xor),
            Some(Token::Nand) => Ok(Kind::Nand),
            Some(Token::Not) => Ok(Kind::Not),
            Some(Token::Word(kind)) => Err(NetlistError::UnknownGateKind { line, kind }),
            Some(found) => Err(NetlistError::UnexpectedToken {
                line,
                expected: "gate kind",
                found: found.to_string(),
            }),
            None => Err(NetlistError::MissingLine {
                expected: "gate kind",
            }),
        }
    }
}

fn build_gate(line: usize, kind: Kind, operands: &[CellId]) -> NetlistResult<LogicGate> {
    match kind {
        Kind::And => two_operands(line, "and", operands).map(|(a, b)| LogicGate::And(a, b)),
        Kind::Or => two_operands(line, "or", operands).map(|(a, b)| LogicGate::Or(a, b)),
        Kind::Xor => two_operands(line, "xor", operands).map(|(a, b)| LogicGate::Xor(a, b)),
        Kind::Nand => two_operands(line, "nand", operands).map(|(a, b)| LogicGate::Nand(a, b)),
        Kind::Not => match operands {
            [] => Ok(LogicGate::Not(None)),
            [a] => Ok(LogicGate::Not(Some(*a))),
            _ => Err(NetlistError::ArityMismatch {
                line,
                kind: "not",
                got: operands.len(),
            }),
        },
    }
}

fn two_operands(
    line: usize,
    kind: &'static str,
    operands: &[CellId],
) -> NetlistResult<(CellId, CellId)> {
    match operands {
        [a, b] => Ok((*a, *b)),
        _ => Err(NetlistError::ArityMismatch {
            line,
            kind,
            got: operands.len(),
        }),
    }
}
