//! Graph layout for the visual editor.
//!
//! Two independent algorithms over the same node/edge shapes, never composed
//! automatically: [`layout_layered`] is the full position-overwriting
//! auto-arrange pass, [`layout_tidy`] the incremental position-preserving
//! overlap-resolution pass. Callers choose one.

pub mod layered;
pub mod tidy;

pub use layered::layout_layered;
pub use tidy::layout_tidy;

use serde::{Deserialize, Serialize};

/// Primary direction of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl LayoutDirection {
    pub fn is_vertical(&self) -> bool {
        matches!(self, LayoutDirection::TopToBottom)
    }
}

/// Fixed node bounding-box dimensions used by both algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl Default for NodeSize {
    fn default() -> Self {
        Self {
            width: 256.0,
            height: 120.0,
        }
    }
}

/// Spacing parameters for the full layered layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayeredOptions {
    pub direction: LayoutDirection,
    pub node_size: NodeSize,
    /// Gap between consecutive ranks, along the primary axis.
    pub rank_gap: f64,
    /// Gap between neighboring nodes within a rank.
    pub node_gap: f64,
}

impl Default for LayeredOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::default(),
            node_size: NodeSize::default(),
            rank_gap: 120.0,
            node_gap: 60.0,
        }
    }
}

/// Parameters for the incremental tidy pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidyOptions {
    pub direction: LayoutDirection,
    pub node_size: NodeSize,
    /// Minimum clear distance between two bounding boxes.
    pub min_gap: f64,
    /// Every output coordinate is a multiple of this.
    pub grid_size: f64,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::default(),
            node_size: NodeSize::default(),
            min_gap: 48.0,
            grid_size: 16.0,
        }
    }
}
