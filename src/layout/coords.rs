//! # Grid ↔ Pixel Conversion
//!
//! Maps 1-indexed track placements (start + span + margins) to pixel boxes
//! and back. The forward direction is exact. The inverse is a best fit:
//! it finds the nearest reasonable grid description of an arbitrary
//! rectangle and pushes the residue into margins, so a round trip is only
//! accurate to within a column.
//!
//! Out-of-range starts and spans are clamped to the available tracks.

use serde::Serialize;

use super::tracks::{ComputedGrid, ComputedGrid2D, GridLine};
use crate::model::NodeGridDatum;

/// Elements never render narrower (or shorter) than this, so a fully
/// collapsed element is still visible and selectable.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Pixel placement of a node on the page grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPixel {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// Pixel placement of a node inside a container grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerPixel {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

// ── Axis helpers ───────────────────────────────────────────────

/// 0-based index of a 1-indexed start, clamped to `lines`.
fn clamp_index(lines: &[GridLine], start: u32) -> usize {
    (start.saturating_sub(1) as usize).min(lines.len().saturating_sub(1))
}

/// Leading edge of the zone starting at track `start`.
fn zone_start(lines: &[GridLine], start: u32, origin: f64) -> f64 {
    if lines.is_empty() {
        return origin;
    }
    lines[clamp_index(lines, start)].position
}

/// Extent of `span` tracks from `start`, including the gaps between them.
fn zone_extent(lines: &[GridLine], gap: f64, start: u32, span: u32) -> f64 {
    if lines.is_empty() || span == 0 {
        return 0.0;
    }
    let first = clamp_index(lines, start);
    let last = first.saturating_add(span as usize - 1).min(lines.len() - 1);
    let tracks: f64 = lines[first..=last].iter().map(|l| l.size).sum();
    tracks + (last - first) as f64 * gap
}

/// First track whose far edge plus half a gap lies beyond `coord`. A
/// coordinate inside a gap goes to the earlier track.
fn start_track(lines: &[GridLine], gap: f64, coord: f64) -> usize {
    lines
        .iter()
        .position(|l| coord < l.end() + gap / 2.0)
        .unwrap_or(lines.len().saturating_sub(1))
}

/// Track containing the far edge `coord`, scanning from `from`.
fn end_track(lines: &[GridLine], gap: f64, coord: f64, from: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, l)| coord <= l.end() + gap / 2.0)
        .map(|(i, _)| i)
        .unwrap_or(lines.len().saturating_sub(1))
}

/// Residual offset rounded to a whole pixel, never negative.
fn residual(v: f64) -> f64 {
    let rounded = v.round();
    if rounded > 0.0 {
        rounded
    } else {
        0.0
    }
}

/// Best-fit `(start, span, leading margin, trailing margin)` on one axis.
fn fit_axis(lines: &[GridLine], gap: f64, coord: f64, extent: f64) -> (u32, u32, f64, f64) {
    if lines.is_empty() {
        return (1, 1, 0.0, 0.0);
    }
    let first = start_track(lines, gap, coord);
    let last = end_track(lines, gap, coord + extent, first);
    let start = first as u32 + 1;
    let span = (last + 1).saturating_sub(first).max(1) as u32;

    let zone_left = lines[first].position;
    let zone_width = zone_extent(lines, gap, start, span);
    let leading = residual(coord - zone_left);
    let trailing = residual(zone_left + zone_width - (coord + extent));
    (start, span, leading, trailing)
}

// ── Page grid ──────────────────────────────────────────────────

/// Left edge of the column zone starting at `col_start` (1-indexed).
pub fn col_zone_left(col_start: u32, grid: &ComputedGrid) -> f64 {
    zone_start(&grid.columns, col_start, grid.margin_width)
}

/// Width of `col_span` columns from `col_start`, gutters included.
pub fn col_zone_width(col_start: u32, col_span: u32, grid: &ComputedGrid) -> f64 {
    zone_extent(&grid.columns, grid.gutter_width, col_start, col_span)
}

/// Pixel placement of a node on the page grid.
///
/// Vertical placement on the page is margin-only: `top = marginTop`.
pub fn grid_to_pixel(datum: &NodeGridDatum, grid: &ComputedGrid) -> GridPixel {
    let zone_left = col_zone_left(datum.col_start, grid);
    let zone_width = col_zone_width(datum.col_start, datum.col_span, grid);
    let ml = datum.margin_left.unwrap_or(0.0);
    let mr = datum.margin_right.unwrap_or(0.0);

    GridPixel {
        left: zone_left + ml,
        top: datum.margin_top.unwrap_or(0.0),
        width: (zone_width - ml - mr).max(MIN_ELEMENT_SIZE),
    }
}

/// Best-fit grid description of a rectangle at `(x, y)` with `width`.
pub fn pixel_to_grid(x: f64, y: f64, width: f64, grid: &ComputedGrid) -> NodeGridDatum {
    let (col_start, col_span, margin_left, margin_right) =
        fit_axis(&grid.columns, grid.gutter_width, x, width);

    NodeGridDatum {
        col_start,
        col_span,
        row_start: None,
        row_span: None,
        margin_left: Some(margin_left),
        margin_right: Some(margin_right),
        margin_top: Some(residual(y)),
        margin_bottom: None,
    }
}

// ── Container grid ─────────────────────────────────────────────

/// Pixel box of a node placed in a container grid. A missing row start or
/// span means row 1, span 1.
pub fn container_grid_to_pixel(datum: &NodeGridDatum, grid: &ComputedGrid2D) -> ContainerPixel {
    let row_start = datum.row_start.unwrap_or(1);
    let row_span = datum.row_span.unwrap_or(1);

    let zone_left = zone_start(&grid.columns, datum.col_start, grid.padding.left);
    let zone_width = zone_extent(&grid.columns, grid.column_gap, datum.col_start, datum.col_span);
    let zone_top = zone_start(&grid.rows, row_start, grid.padding.top);
    let zone_height = zone_extent(&grid.rows, grid.row_gap, row_start, row_span);

    let ml = datum.margin_left.unwrap_or(0.0);
    let mr = datum.margin_right.unwrap_or(0.0);
    let mt = datum.margin_top.unwrap_or(0.0);
    let mb = datum.margin_bottom.unwrap_or(0.0);

    ContainerPixel {
        left: zone_left + ml,
        top: zone_top + mt,
        width: (zone_width - ml - mr).max(MIN_ELEMENT_SIZE),
        height: (zone_height - mt - mb).max(MIN_ELEMENT_SIZE),
    }
}

/// Best-fit container placement of a rectangle. Rows are fitted exactly
/// like columns, with `rowGap` as the vertical tie-break threshold.
pub fn pixel_to_container_grid(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    grid: &ComputedGrid2D,
) -> NodeGridDatum {
    let (col_start, col_span, margin_left, margin_right) =
        fit_axis(&grid.columns, grid.column_gap, x, width);
    let (row_start, row_span, margin_top, margin_bottom) =
        fit_axis(&grid.rows, grid.row_gap, y, height);

    NodeGridDatum {
        col_start,
        col_span,
        row_start: Some(row_start),
        row_span: Some(row_span),
        margin_left: Some(margin_left),
        margin_right: Some(margin_right),
        margin_top: Some(margin_top),
        margin_bottom: Some(margin_bottom),
    }
}
