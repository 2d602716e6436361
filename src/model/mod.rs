//! # Grid Model
//!
//! The input representation for the engine. Everything here is plain data
//! owned by the caller: the page-level column system, the track definitions
//! used inside free-form containers, per-node grid placement, and the
//! bounding boxes handed to the alignment resolver during a drag.
//!
//! These records are designed to be produced straight from the editor's
//! document JSON, so every struct uses camelCase field names and falls back
//! to defaults for missing fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SnapgridError;
use crate::responsive::Responsive;

/// A named responsive viewport class.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = SnapgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Breakpoint::Desktop),
            "tablet" => Ok(Breakpoint::Tablet),
            "mobile" => Ok(Breakpoint::Mobile),
            _ => Err(SnapgridError::UnknownBreakpoint(s.to_string())),
        }
    }
}

// ── Lenient counts ─────────────────────────────────────────────

/// Clamp a JSON number into `u32`. Negative and NaN become 0, fractions
/// truncate, anything past `u32::MAX` saturates.
fn clamp_count(v: f64) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        v.min(u32::MAX as f64) as u32
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    f64::deserialize(deserializer).map(clamp_count)
}

fn lenient_opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.map(clamp_count))
}

// ── Page column system ─────────────────────────────────────────

/// The one-dimensional column system used for whole-page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Upper bound on the usable page width in pixels.
    pub max_width: f64,
    /// Number of columns. Expected to be at least 1.
    #[serde(alias = "columns", deserialize_with = "lenient_u32")]
    pub column_count: u32,
    /// Space between adjacent columns.
    pub gutter: f64,
    /// Space on each side of the column run.
    pub margin: f64,
    /// Pixel distance within which a dragged edge is pulled onto a line.
    pub snap_tolerance: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_width: 1200.0,
            column_count: 12,
            gutter: 20.0,
            margin: 40.0,
            snap_tolerance: 5.0,
        }
    }
}

impl Responsive<GridConfig> {
    /// The stock page grid: 12 columns on desktop, 8 on tablet, 4 on mobile.
    pub fn standard() -> Self {
        let mut grid = Responsive::new(GridConfig::default());
        grid.overrides.insert(
            Breakpoint::Tablet,
            GridConfigPatch {
                max_width: Some(768.0),
                column_count: Some(8),
                margin: Some(24.0),
                ..Default::default()
            },
        );
        grid.overrides.insert(
            Breakpoint::Mobile,
            GridConfigPatch {
                max_width: Some(375.0),
                column_count: Some(4),
                gutter: Some(16.0),
                margin: Some(16.0),
                ..Default::default()
            },
        );
        grid
    }
}

/// Partial [`GridConfig`] recorded for a single breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(
        default,
        alias = "columns",
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub column_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_tolerance: Option<f64>,
}

// ── Container tracks ───────────────────────────────────────────

/// Sizing of one column or row track inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackSize {
    /// Fixed size in pixels.
    Px(f64),
    /// Percentage of the available space (after padding).
    Percent(f64),
    /// Weighted share of the space left over by fixed tracks and gaps.
    Fr(f64),
    /// Flexible track with weight 1.
    Auto,
}

impl TrackSize {
    /// Size of a non-flexible track, or `None` for `Fr`/`Auto`.
    pub fn fixed_size(&self, available: f64) -> Option<f64> {
        match self {
            TrackSize::Px(px) => Some(*px),
            TrackSize::Percent(p) => Some(available * p / 100.0),
            TrackSize::Fr(_) | TrackSize::Auto => None,
        }
    }

    /// Flex weight of the track. Zero for fixed and percentage tracks.
    pub fn flex_weight(&self) -> f64 {
        match self {
            TrackSize::Fr(fr) => fr.max(0.0),
            TrackSize::Auto => 1.0,
            TrackSize::Px(_) | TrackSize::Percent(_) => 0.0,
        }
    }
}

/// Padding around a container's track area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// The two-dimensional track system used inside free-form containers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerLayoutSpec {
    /// Column tracks, left to right. Empty means a single `Fr(1)` track.
    pub column_tracks: Vec<TrackSize>,
    /// Row tracks, top to bottom. Empty means a single `Fr(1)` track.
    pub row_tracks: Vec<TrackSize>,
    pub column_gap: f64,
    pub row_gap: f64,
    pub padding: Edges,
}

// ── Per-node placement ─────────────────────────────────────────

/// Grid placement attached to a layout node. Starts are 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGridDatum {
    #[serde(deserialize_with = "lenient_u32")]
    pub col_start: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub col_span: u32,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_start: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
}

impl Default for NodeGridDatum {
    fn default() -> Self {
        Self::span(1, 1)
    }
}

impl NodeGridDatum {
    /// A column run with no row placement and no margins.
    pub fn span(col_start: u32, col_span: u32) -> Self {
        Self {
            col_start,
            col_span,
            row_start: None,
            row_span: None,
            margin_left: None,
            margin_right: None,
            margin_top: None,
            margin_bottom: None,
        }
    }
}

/// Partial [`NodeGridDatum`] recorded for a single breakpoint, or written
/// back after a drag/resize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGridPatch {
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub col_start: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub col_span: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_start: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
}

impl From<NodeGridDatum> for NodeGridPatch {
    fn from(d: NodeGridDatum) -> Self {
        Self {
            col_start: Some(d.col_start),
            col_span: Some(d.col_span),
            row_start: d.row_start,
            row_span: d.row_span,
            margin_left: d.margin_left,
            margin_right: d.margin_right,
            margin_top: d.margin_top,
            margin_bottom: d.margin_bottom,
        }
    }
}

// ── Interaction geometry ───────────────────────────────────────

/// A node's bounding box, as seen by the alignment resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ── Layout request ─────────────────────────────────────────────

/// A node entry in a layout request: identity plus responsive placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridNode {
    pub id: String,
    pub grid: Responsive<NodeGridDatum>,
}

/// Everything needed to lay out one page at one breakpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    #[serde(default)]
    pub breakpoint: Breakpoint,
    /// Width of the page viewport in pixels.
    pub container_width: f64,
    /// Page grid configuration. Defaults to the stock responsive grid.
    #[serde(default = "Responsive::<GridConfig>::standard")]
    pub grid: Responsive<GridConfig>,
    #[serde(default)]
    pub nodes: Vec<GridNode>,
}
