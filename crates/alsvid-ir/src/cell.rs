//! Cell addressing for reversible registers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a single binary cell within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(id: u32) -> Self {
        CellId(id)
    }
}
