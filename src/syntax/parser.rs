//! Line-oriented parser for the flowchart edge-list subset.
//!
//! Accepted input:
//!
//! ```text
//! graph TD            %% optional header: graph|flowchart [TD|TB|BT|LR|RL]
//! A[Start] --> B      %% edge, optional [label] on first mention
//! B --> C --> A       %% chains add one edge per connector
//! D                   %% standalone vertex
//! ```
//!
//! Connectors `-->`, `---`, `==>` and `-.->` all produce a directed edge from
//! the left operand to the right one. Line styles are a rendering concern.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{Direction, Flowchart};
use crate::error::{Error, Result};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for diagram parsers.
pub trait Parser {
    /// Parse the input source string into a flowchart.
    fn parse(&self, src: &str) -> Result<Flowchart>;
}

// ─── Patterns ────────────────────────────────────────────────────────────────

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:graph|flowchart)(?:\s+([A-Za-z]+))?$").expect("header pattern is valid")
});

/// Connector tokens, longest first so `-.->` wins over `---`.
static CONNECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:-\.->|-->|==>|---)\s*").expect("connector pattern is valid"));

static NODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)(?:\[([^\]]*)\])?$").expect("node pattern is valid")
});

// ─── FlowchartParser ─────────────────────────────────────────────────────────

/// Parser for `graph`/`flowchart` edge lists.
pub struct FlowchartParser;

impl Parser for FlowchartParser {
    fn parse(&self, src: &str) -> Result<Flowchart> {
        let mut chart = Flowchart::new();
        let mut seen_statement = false;

        for (idx, raw) in src.lines().enumerate() {
            let line_no = idx + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            if !seen_statement {
                seen_statement = true;
                if let Some(caps) = HEADER.captures(line) {
                    if let Some(dir) = caps.get(1) {
                        chart.direction = dir.as_str().parse::<Direction>().map_err(|_| {
                            parse_error(line_no, format!("unknown direction '{}'", dir.as_str()))
                        })?;
                    }
                    continue;
                }
            }

            parse_statement(&mut chart, line, line_no)?;
        }

        debug!(
            vertices = chart.graph.len(),
            edges = chart.graph.edge_count(),
            direction = %chart.direction,
            "parsed flowchart"
        );
        Ok(chart)
    }
}

/// Parse a flowchart string with the default parser.
pub fn parse(src: &str) -> Result<Flowchart> {
    FlowchartParser.parse(src)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn strip_comment(line: &str) -> &str {
    match line.find("%%") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

/// One statement: a standalone vertex or a chain of connected vertices.
fn parse_statement(chart: &mut Flowchart, line: &str, line_no: usize) -> Result<()> {
    let mut prev = None;
    for operand in CONNECTOR.split(line) {
        let caps = NODE
            .captures(operand)
            .ok_or_else(|| parse_error(line_no, format!("expected a node, found '{operand}'")))?;
        let name = &caps[1];
        let id = match caps.get(2) {
            Some(label) => chart.graph.add_labeled_vertex(name, label.as_str().trim()),
            None => chart.graph.add_vertex(name),
        };
        if let Some(from) = prev {
            chart.graph.add_edge(from, id)?;
        }
        prev = Some(id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_parser.rs"]
mod tests;
