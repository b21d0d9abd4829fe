//! Row-major grid placement for automatically positioned nodes.

use super::node::{NodeSize, Position};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Node footprint and gaps used by the grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 300.0,
            node_height: 300.0,
            horizontal_spacing: 20.0,
            vertical_spacing: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn column_stride(&self) -> f64 {
        self.node_width + self.horizontal_spacing
    }

    pub fn row_stride(&self) -> f64 {
        self.node_height + self.vertical_spacing
    }

    /// Checks that nodes have a positive footprint and that gaps are not negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Replaces unusable sizes with the defaults and negative gaps with zero.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let size = |value: f64, fallback: f64| {
            if value.is_finite() && value > 0.0 { value } else { fallback }
        };
        let gap = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self {
            node_width: size(self.node_width, defaults.node_width),
            node_height: size(self.node_height, defaults.node_height),
            horizontal_spacing: gap(self.horizontal_spacing),
            vertical_spacing: gap(self.vertical_spacing),
        }
    }

    pub fn node_size(&self) -> NodeSize {
        NodeSize {
            width: self.node_width,
            height: self.node_height,
        }
    }
}

/// Places the n-th node of a pipeline into a fixed-width grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    config: LayoutConfig,
    columns: usize,
}

impl GridLayout {
    /// A single-column layout, used until the viewport width is known.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
            columns: 1,
        }
    }

    pub fn for_width(config: LayoutConfig, available_width: f64) -> Self {
        let config = config.sanitized();
        Self {
            config,
            columns: columns_for_width(&config, available_width),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(row, column)` for the node at `index`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    pub fn position(&self, index: usize) -> Position {
        let (row, column) = self.cell(index);
        Position {
            x: column as f64 * self.config.column_stride(),
            y: row as f64 * self.config.row_stride(),
        }
    }
}

/// How many nodes fit side by side in `available_width`. Never less than one.
pub fn columns_for_width(config: &LayoutConfig, available_width: f64) -> usize {
    let stride = config.column_stride();
    if !(available_width.is_finite() && stride > 0.0) {
        return 1;
    }
    let fit = (available_width / stride).floor();
    if fit < 1.0 { 1 } else { fit as usize }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn columns_clamp_to_one() {
        let config = LayoutConfig::default();
        assert_eq!(columns_for_width(&config, 0.0), 1);
        assert_eq!(columns_for_width(&config, 319.0), 1);
        assert_eq!(columns_for_width(&config, -500.0), 1);
        assert_eq!(columns_for_width(&config, f64::NAN), 1);
        assert_eq!(columns_for_width(&config, 640.0), 2);
        assert_eq!(columns_for_width(&config, 1000.0), 3);
    }

    #[test]
    fn positions_follow_row_major_order() {
        let layout = GridLayout::for_width(LayoutConfig::default(), 1000.0);
        assert_eq!(layout.position(0), Position::new(0.0, 0.0));
        assert_eq!(layout.position(2), Position::new(640.0, 0.0));
        assert_eq!(layout.position(3), Position::new(0.0, 320.0));
        assert_eq!(layout.position(7), Position::new(320.0, 640.0));
    }

    #[test]
    fn unusable_config_is_sanitized() {
        let config = LayoutConfig {
            node_width: f64::NAN,
            node_height: -100.0,
            horizontal_spacing: 10.0,
            vertical_spacing: -300.0,
        };
        assert!(config.validate().is_err());

        let layout = GridLayout::new(config);
        assert_eq!(layout.config().node_width, 300.0);
        assert_eq!(layout.config().node_height, 300.0);
        assert_eq!(layout.config().horizontal_spacing, 10.0);
        assert_eq!(layout.config().vertical_spacing, 0.0);
        assert_eq!(layout.position(2), Position::new(0.0, 600.0));
    }

    #[test]
    fn cells_are_never_shared() {
        for columns_width in [0.0, 320.0, 700.0, 1300.0, 5000.0] {
            let layout = GridLayout::for_width(LayoutConfig::default(), columns_width);
            let cells: HashSet<_> = (0..200).map(|i| layout.cell(i)).collect();
            assert_eq!(cells.len(), 200);
        }
    }
}
