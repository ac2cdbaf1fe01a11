use crate::syntax::Direction;

/// Configuration for the layout pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Override the diagram direction. None = use the diagram's own header.
    pub direction: Option<Direction>,
    /// Distance between consecutive layers along the rank axis.
    pub layer_spacing: f64,
    /// Distance between one unit of in-layer position along the other axis.
    pub column_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: None,
            layer_spacing: 80.0,
            column_spacing: 60.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// The override if set, else the diagram's own direction.
    pub fn resolve_direction(&self, diagram: Direction) -> Direction {
        self.direction.unwrap_or(diagram)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
