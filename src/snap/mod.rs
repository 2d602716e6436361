//! # Snap Resolver
//!
//! Pulls a moving coordinate onto the nearest grid line when it is within
//! tolerance. The candidate lines for a page grid are the margin edges plus
//! both edges of every column; container grids contribute both edges of
//! every track on the requested axis.
//!
//! Ties between two equally close lines go to the lower one. "Not snapped"
//! is the normal result away from any line, not a failure.
//!
//! Smart alignment against sibling rectangles lives in [`align`].

pub mod align;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::layout::{ComputedGrid, ComputedGrid2D, GridLine};

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// A vertical line at some x, produced by horizontal movement.
    Vertical,
    /// A horizontal line at some y, produced by vertical movement.
    Horizontal,
}

/// A line segment drawn as a visual alignment aid for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub axis: Axis,
    /// x for vertical guides, y for horizontal ones.
    pub position: f64,
    pub span_start: f64,
    pub span_end: f64,
}

/// Outcome of snapping a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapResult {
    pub snapped: bool,
    /// The snapped line, or the input position when nothing was in range.
    pub value: f64,
    pub guide_line: Option<f64>,
}

impl SnapResult {
    fn unsnapped(position: f64) -> Self {
        Self {
            snapped: false,
            value: position,
            guide_line: None,
        }
    }
}

/// Outcome of snapping a rectangle's horizontal extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectSnap {
    pub x: f64,
    pub snapped_lines: Vec<f64>,
}

fn sorted_unique(mut lines: Vec<f64>) -> Vec<f64> {
    lines.sort_by(f64::total_cmp);
    lines.dedup();
    lines
}

fn track_edges(tracks: &[GridLine], lines: &mut Vec<f64>) {
    for track in tracks {
        lines.push(track.position);
        lines.push(track.end());
    }
}

/// Every snappable x on a page grid, ascending and deduplicated.
pub fn grid_line_positions(grid: &ComputedGrid) -> Vec<f64> {
    let mut lines = Vec::with_capacity(grid.columns.len() * 2 + 2);
    lines.push(grid.margin_width);
    track_edges(&grid.columns, &mut lines);
    lines.push(grid.container_width - grid.margin_width);
    sorted_unique(lines)
}

/// Every snappable coordinate of a container grid along one axis:
/// x positions for [`Axis::Vertical`], y positions for [`Axis::Horizontal`].
pub fn container_line_positions(grid: &ComputedGrid2D, axis: Axis) -> Vec<f64> {
    let tracks = match axis {
        Axis::Vertical => &grid.columns,
        Axis::Horizontal => &grid.rows,
    };
    let mut lines = Vec::with_capacity(tracks.len() * 2);
    track_edges(tracks, &mut lines);
    sorted_unique(lines)
}

/// Snap `position` to the closest of `lines` if it is within `tolerance`.
///
/// `lines` must be ascending. The scan keeps the first strictly closer line,
/// so the lower of two equidistant lines wins.
pub fn snap_to_lines(position: f64, lines: &[f64], tolerance: f64) -> SnapResult {
    let mut closest: Option<(f64, f64)> = None;
    for &line in lines {
        let dist = (position - line).abs();
        if closest.map_or(true, |(_, best)| dist < best) {
            closest = Some((line, dist));
        }
    }

    match closest {
        Some((line, dist)) if dist <= tolerance => {
            trace!("snap {} -> {} (distance {})", position, line, dist);
            SnapResult {
                snapped: true,
                value: line,
                guide_line: Some(line),
            }
        }
        _ => SnapResult::unsnapped(position),
    }
}

/// Snap a position to the nearest page grid line.
pub fn snap_to_grid(position: f64, grid: &ComputedGrid, tolerance: f64) -> SnapResult {
    snap_to_lines(position, &grid_line_positions(grid), tolerance)
}

/// Snap a rectangle's left edge, or failing that its right edge.
///
/// At most one edge snaps per call; when the right edge snaps, `x` is
/// moved so that edge lands on its line.
pub fn snap_rect_to_grid(x: f64, width: f64, grid: &ComputedGrid, tolerance: f64) -> RectSnap {
    let lines = grid_line_positions(grid);

    let left = snap_to_lines(x, &lines, tolerance);
    if let Some(line) = left.guide_line {
        return RectSnap {
            x: left.value,
            snapped_lines: vec![line],
        };
    }

    let right = snap_to_lines(x + width, &lines, tolerance);
    if let Some(line) = right.guide_line {
        return RectSnap {
            x: right.value - width,
            snapped_lines: vec![line],
        };
    }

    RectSnap {
        x,
        snapped_lines: Vec::new(),
    }
}
