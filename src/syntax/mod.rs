//! Flowchart syntax: direction keywords and the edge-list parser.

pub mod parser;
pub mod types;

pub use parser::{FlowchartParser, Parser, parse};
pub use types::{Direction, Flowchart};
