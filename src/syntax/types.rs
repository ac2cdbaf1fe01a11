//! Syntax-level types for the flowchart edge-list format.
//!
//! A parsed document is a [`Flowchart`]: the header direction plus the
//! vertex/edge structure already loaded into a [`Graph`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::graph::Graph;

// ─── Direction ───────────────────────────────────────────────────────────────

/// Flow direction of the layers: which canvas axis ranks advance along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    LR,
    RL,
    #[default]
    TD,
    BT,
}

impl Direction {
    /// True when ranks advance horizontally.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR | Direction::RL)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LR" => Ok(Direction::LR),
            "RL" => Ok(Direction::RL),
            "TD" | "TB" => Ok(Direction::TD),
            "BT" => Ok(Direction::BT),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::LR => "LR",
            Direction::RL => "RL",
            Direction::TD => "TD",
            Direction::BT => "BT",
        };
        f.write_str(s)
    }
}

// ─── Flowchart ───────────────────────────────────────────────────────────────

/// A parsed flowchart document.
#[derive(Debug, Clone, Default)]
pub struct Flowchart {
    /// Direction from the `graph`/`flowchart` header, TD when absent.
    pub direction: Direction,
    pub graph: Graph,
}

impl Flowchart {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
