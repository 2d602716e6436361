//! # Track Layout Solver
//!
//! Turns a declarative track configuration plus container dimensions into
//! concrete pixel lines.
//!
//! - Page grids ([`solve_columns`]) are a run of equal columns separated by
//!   gutters and framed by a margin on each side.
//! - Container grids ([`solve_tracks`]) size columns and rows independently
//!   from fixed (`Px`), percentage and flexible (`Fr`/`Auto`) tracks.
//!
//! Fixed and percentage tracks never depend on flexible ones, so a single
//! pass resolves everything. Degenerate inputs produce zero-width tracks,
//! never an error.

use log::debug;
use serde::Serialize;

use crate::model::{ContainerLayoutSpec, Edges, GridConfig, TrackSize};

/// Upper bound on page columns. Larger counts are clamped.
pub const MAX_COLUMNS: u32 = 1024;

/// One resolved column or row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    /// Offset of the track's leading edge from the container origin.
    pub position: f64,
    /// Track extent along its axis.
    pub size: f64,
}

impl GridLine {
    pub fn end(&self) -> f64 {
        self.position + self.size
    }
}

/// A solved page grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedGrid {
    /// `min(containerWidth, maxWidth)`.
    pub container_width: f64,
    pub columns: Vec<GridLine>,
    pub gutter_width: f64,
    pub margin_width: f64,
}

impl ComputedGrid {
    /// Width left for columns and gutters once both margins are removed.
    pub fn available_width(&self) -> f64 {
        self.container_width - 2.0 * self.margin_width
    }
}

/// A solved container grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedGrid2D {
    pub width: f64,
    pub height: f64,
    pub columns: Vec<GridLine>,
    pub rows: Vec<GridLine>,
    pub column_gap: f64,
    pub row_gap: f64,
    pub padding: Edges,
}

/// Solve the page column system at a given viewport width.
///
/// Column `i` starts at `margin + i * (columnWidth + gutter)`. A zero column
/// count is clamped to one and anything above [`MAX_COLUMNS`] down to it;
/// negative available width collapses every column to zero width.
pub fn solve_columns(config: &GridConfig, container_width: f64) -> ComputedGrid {
    let effective_width = container_width.min(config.max_width);
    let count = match config.column_count {
        0 => {
            debug!("grid config has zero columns, clamping to 1");
            1
        }
        n if n > MAX_COLUMNS => {
            debug!("grid config has {} columns, clamping to {}", n, MAX_COLUMNS);
            MAX_COLUMNS
        }
        n => n,
    };

    let total_margin = config.margin * 2.0;
    let total_gutters = config.gutter * (count - 1) as f64;
    let available = effective_width - total_margin - total_gutters;
    if available <= 0.0 {
        debug!(
            "no room for columns: width={} margin={} gutter={} columns={}",
            effective_width, config.margin, config.gutter, count
        );
    }
    let column_width = available.max(0.0) / count as f64;

    let columns = (0..count)
        .map(|i| GridLine {
            position: config.margin + i as f64 * (column_width + config.gutter),
            size: column_width,
        })
        .collect();

    ComputedGrid {
        container_width: effective_width,
        columns,
        gutter_width: config.gutter,
        margin_width: config.margin,
    }
}

/// Solve both axes of a container grid.
///
/// Each axis is laid out independently inside the padding box.
pub fn solve_tracks(spec: &ContainerLayoutSpec, width: f64, height: f64) -> ComputedGrid2D {
    let padding = spec.padding;
    let columns = resolve_axis(
        &spec.column_tracks,
        width - padding.horizontal(),
        spec.column_gap,
        padding.left,
    );
    let rows = resolve_axis(
        &spec.row_tracks,
        height - padding.vertical(),
        spec.row_gap,
        padding.top,
    );

    ComputedGrid2D {
        width,
        height,
        columns,
        rows,
        column_gap: spec.column_gap,
        row_gap: spec.row_gap,
        padding,
    }
}

/// Resolve one axis of tracks to positioned lines.
///
/// Algorithm:
/// 1. `Px` tracks take their size, `Percent` tracks resolve against the
///    available space
/// 2. Whatever is left after fixed tracks and gaps (never below zero) is
///    split among `Fr`/`Auto` tracks by weight
/// 3. Tracks are placed in order from `offset`, advancing by size + gap
pub fn resolve_axis(tracks: &[TrackSize], available: f64, gap: f64, offset: f64) -> Vec<GridLine> {
    static DEFAULT_TRACK: [TrackSize; 1] = [TrackSize::Fr(1.0)];
    let tracks: &[TrackSize] = if tracks.is_empty() {
        &DEFAULT_TRACK
    } else {
        tracks
    };

    let available = available.max(0.0);
    let mut sizes = vec![0.0_f64; tracks.len()];
    let mut used_fixed = 0.0;
    let mut total_weight = 0.0;

    // First pass: fixed and percentage tracks
    for (i, track) in tracks.iter().enumerate() {
        match track.fixed_size(available) {
            Some(size) => {
                let size = size.max(0.0);
                sizes[i] = size;
                used_fixed += size;
            }
            None => total_weight += track.flex_weight(),
        }
    }

    // Second pass: distribute the remainder to flexible tracks
    let total_gap = gap * (tracks.len() - 1) as f64;
    let remaining = (available - used_fixed - total_gap).max(0.0);
    let unit = if total_weight > 0.0 {
        remaining / total_weight
    } else {
        0.0
    };
    for (i, track) in tracks.iter().enumerate() {
        if track.fixed_size(available).is_none() {
            sizes[i] = track.flex_weight() * unit;
        }
    }

    let mut position = offset;
    sizes
        .into_iter()
        .map(|size| {
            let line = GridLine { position, size };
            position += size + gap;
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_config() -> GridConfig {
        GridConfig {
            max_width: 1200.0,
            column_count: 12,
            gutter: 20.0,
            margin: 40.0,
            snap_tolerance: 5.0,
        }
    }

    #[test]
    fn test_solve_columns_reference_page() {
        let grid = solve_columns(&page_config(), 1200.0);
        assert_eq!(grid.columns.len(), 12);
        // (1200 - 80 - 220) / 12 = 75
        for col in &grid.columns {
            assert!((col.size - 75.0).abs() < 0.001);
        }
        assert!((grid.columns[0].position - 40.0).abs() < 0.001);
        assert!((grid.columns[1].position - 135.0).abs() < 0.001);
        assert!((grid.columns[11].end() - 1160.0).abs() < 0.001);
    }

    #[test]
    fn test_solve_columns_caps_at_max_width() {
        let grid = solve_columns(&page_config(), 1920.0);
        assert!((grid.container_width - 1200.0).abs() < 0.001);
        assert!((grid.columns[0].size - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_columns_partition_available_width() {
        for width in [320.0, 768.0, 1000.0, 1199.5] {
            let grid = solve_columns(&page_config(), width);
            let total: f64 = grid.columns.iter().map(|c| c.size).sum::<f64>()
                + grid.gutter_width * (grid.columns.len() - 1) as f64;
            assert!((total - grid.available_width()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_columns_clamped() {
        let config = GridConfig {
            column_count: 0,
            ..page_config()
        };
        let grid = solve_columns(&config, 1200.0);
        assert_eq!(grid.columns.len(), 1);
        assert!((grid.columns[0].size - 1120.0).abs() < 0.001);
    }

    #[test]
    fn test_huge_column_count_clamped() {
        let config = GridConfig {
            column_count: 4_000_000_000,
            ..page_config()
        };
        let grid = solve_columns(&config, 1200.0);
        assert_eq!(grid.columns.len(), MAX_COLUMNS as usize);
    }

    #[test]
    fn test_no_room_gives_zero_width_columns() {
        let grid = solve_columns(&page_config(), 100.0);
        assert_eq!(grid.columns.len(), 12);
        assert!(grid.columns.iter().all(|c| c.size == 0.0));
        assert!((grid.columns[1].position - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_axis_mixed_units() {
        let tracks = vec![TrackSize::Px(100.0), TrackSize::Fr(1.0), TrackSize::Fr(2.0)];
        let lines = resolve_axis(&tracks, 400.0, 0.0, 0.0);
        assert!((lines[0].size - 100.0).abs() < 0.001);
        assert!((lines[1].size - 100.0).abs() < 0.001); // 1fr = 300/3
        assert!((lines[2].size - 200.0).abs() < 0.001);
        assert!((lines[2].position - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_axis_percent_and_gap() {
        let tracks = vec![TrackSize::Percent(25.0), TrackSize::Auto];
        let lines = resolve_axis(&tracks, 400.0, 10.0, 16.0);
        assert!((lines[0].size - 100.0).abs() < 0.001);
        assert!((lines[0].position - 16.0).abs() < 0.001);
        // 400 - 100 - 10 = 290
        assert!((lines[1].size - 290.0).abs() < 0.001);
        assert!((lines[1].position - 126.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_axis_empty_defaults_to_one_fraction() {
        let lines = resolve_axis(&[], 300.0, 8.0, 0.0);
        assert_eq!(lines.len(), 1);
        assert!((lines[0].size - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_resolve_axis_overfull_fixed_starves_flex() {
        let tracks = vec![TrackSize::Px(300.0), TrackSize::Fr(1.0)];
        let lines = resolve_axis(&tracks, 200.0, 0.0, 0.0);
        assert!((lines[0].size - 300.0).abs() < 0.001);
        assert_eq!(lines[1].size, 0.0);
    }

    #[test]
    fn test_resolve_axis_negative_space() {
        let tracks = vec![TrackSize::Fr(1.0), TrackSize::Fr(1.0)];
        let lines = resolve_axis(&tracks, -50.0, 4.0, 0.0);
        assert!(lines.iter().all(|l| l.size == 0.0));
    }

    #[test]
    fn test_solve_tracks_uses_padding_box() {
        let spec = ContainerLayoutSpec {
            column_tracks: vec![TrackSize::Fr(1.0), TrackSize::Fr(1.0)],
            row_tracks: vec![TrackSize::Px(50.0), TrackSize::Fr(1.0)],
            column_gap: 10.0,
            row_gap: 5.0,
            padding: Edges::uniform(20.0),
        };
        let grid = solve_tracks(&spec, 250.0, 200.0);
        // 250 - 40 padding - 10 gap = 200 → 100 each
        assert!((grid.columns[0].position - 20.0).abs() < 0.001);
        assert!((grid.columns[0].size - 100.0).abs() < 0.001);
        assert!((grid.columns[1].position - 130.0).abs() < 0.001);
        // 200 - 40 padding - 50 - 5 gap = 105
        assert!((grid.rows[1].position - 75.0).abs() < 0.001);
        assert!((grid.rows[1].size - 105.0).abs() < 0.001);
    }
}
