//! # Snapgrid
//!
//! The layout grid and snapping engine behind a responsive page builder.
//!
//! Nodes in the editor are placed on a breakpoint-aware column grid and
//! moved around with drag/resize handles. Everything geometric about that
//! lives here: solving the grid into pixel columns, converting node
//! placements to pixel boxes and back, snapping dragged edges onto grid
//! lines, and lining dragged nodes up with their siblings.
//!
//! Every function is a pure computation over caller-owned values. Nothing
//! is cached between calls, so the engine is safe to call from any thread
//! on every pointer move.
//!
//! ## Architecture
//!
//! ```text
//! Responsive<GridConfig>, Responsive<NodeGridDatum>
//!       ↓
//!   [responsive] — resolve for the active breakpoint
//!       ↓
//!   [layout]     — solve tracks, grid ↔ pixel conversion
//!       ↓
//!   [snap]       — grid snapping, sibling alignment guides
//!       ↓
//!   [style]      — placement directives for the renderer
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod responsive;
pub mod snap;
pub mod style;

#[cfg(feature = "wasm")]
pub mod wasm;

use log::debug;
use serde::Serialize;

pub use error::SnapgridError;

use layout::{grid_to_pixel, solve_columns, ComputedGrid, GridPixel};
use model::{Breakpoint, GridConfig, LayoutRequest, NodeGridDatum};
use style::GridPlacement;

/// Layout of one node at the request's breakpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLayout {
    pub id: String,
    /// The node's placement after breakpoint overrides.
    pub grid: NodeGridDatum,
    pub pixel: GridPixel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<GridPlacement>,
}

/// Solved page grid plus every node's position on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub breakpoint: Breakpoint,
    pub config: GridConfig,
    pub grid: ComputedGrid,
    /// Snap candidates for this grid, ascending.
    pub snap_lines: Vec<f64>,
    pub nodes: Vec<NodeLayout>,
}

/// Lay out a page at one breakpoint.
pub fn layout(request: &LayoutRequest) -> LayoutReport {
    let config = request.grid.resolve(request.breakpoint);
    let grid = solve_columns(&config, request.container_width);
    debug!(
        "{} grid: {} columns of {:.2}px at width {}",
        request.breakpoint,
        grid.columns.len(),
        grid.columns.first().map_or(0.0, |c| c.size),
        grid.container_width
    );

    let nodes = request
        .nodes
        .iter()
        .map(|node| {
            let datum = node.grid.resolve(request.breakpoint);
            NodeLayout {
                id: node.id.clone(),
                pixel: grid_to_pixel(&datum, &grid),
                placement: GridPlacement::from_datum(&datum),
                grid: datum,
            }
        })
        .collect();

    LayoutReport {
        breakpoint: request.breakpoint,
        snap_lines: snap::grid_line_positions(&grid),
        config,
        grid,
        nodes,
    }
}

/// Lay out a page described as JSON and return the report as JSON.
pub fn layout_json(json: &str) -> Result<String, SnapgridError> {
    let request: LayoutRequest = serde_json::from_str(json)?;
    let report = layout(&request);
    Ok(serde_json::to_string_pretty(&report)?)
}
