//! # Placement Styles
//!
//! Turns a resolved grid placement into the CSS-equivalent directives the
//! rendering layer applies: a `grid-column`/`grid-row` placement, pixel
//! margins, and self-alignment fixed to start/stretch so the declared
//! margins take effect exactly.
//!
//! Node styles themselves are an opaque property table here. They are
//! merged per breakpoint like any other responsive value, and placement
//! directives win over them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Breakpoint, NodeGridDatum};
use crate::responsive::Responsive;

/// A flat property table (`"fontSize" -> "16px"`).
pub type StyleMap = BTreeMap<String, String>;

/// Cross-axis self alignment of a placed node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignSelf {
    #[default]
    Start,
    Stretch,
}

impl AlignSelf {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignSelf::Start => "start",
            AlignSelf::Stretch => "stretch",
        }
    }
}

/// Placement directives for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlacement {
    /// `"start / span n"`.
    pub grid_column: String,
    /// `"start / span n"`, or `"1"` without a row start.
    pub grid_row: String,
    pub margin_top: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub align_self: AlignSelf,
    pub justify_self: AlignSelf,
}

impl GridPlacement {
    /// Directives for a resolved datum. A zero start or span means the node
    /// is not placed on the grid.
    pub fn from_datum(datum: &NodeGridDatum) -> Option<Self> {
        if datum.col_start == 0 || datum.col_span == 0 {
            return None;
        }

        let grid_row = match datum.row_start {
            Some(row) if row > 0 => format!("{} / span {}", row, datum.row_span.unwrap_or(1).max(1)),
            _ => "1".to_string(),
        };

        Some(Self {
            grid_column: format!("{} / span {}", datum.col_start, datum.col_span),
            grid_row,
            margin_top: datum.margin_top.unwrap_or(0.0),
            margin_left: datum.margin_left.unwrap_or(0.0),
            margin_right: datum.margin_right.unwrap_or(0.0),
            align_self: AlignSelf::Start,
            justify_self: AlignSelf::Stretch,
        })
    }

    /// Render as a CSS property table.
    pub fn to_properties(&self) -> StyleMap {
        let mut props = StyleMap::new();
        props.insert("gridColumn".into(), self.grid_column.clone());
        props.insert("gridRow".into(), self.grid_row.clone());
        props.insert("marginTop".into(), px(self.margin_top));
        props.insert("marginLeft".into(), px(self.margin_left));
        props.insert("marginRight".into(), px(self.margin_right));
        props.insert("alignSelf".into(), self.align_self.as_css().into());
        props.insert("justifySelf".into(), self.justify_self.as_css().into());
        // Width comes from the column span, not from the node
        props.insert("width".into(), "auto".into());
        props.insert("position".into(), "relative".into());
        props
    }
}

fn px(v: f64) -> String {
    format!("{}px", v)
}

/// Effective properties of a node at `breakpoint`: its merged styles with
/// grid placement layered on top.
pub fn node_properties(
    styles: &Responsive<StyleMap>,
    grid: Option<&Responsive<NodeGridDatum>>,
    breakpoint: Breakpoint,
) -> StyleMap {
    let mut props = styles.resolve(breakpoint);
    let placement = grid.and_then(|g| GridPlacement::from_datum(&g.resolve(breakpoint)));
    if let Some(placement) = placement {
        props.extend(placement.to_properties());
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeGridPatch;

    #[test]
    fn test_placement_directives() {
        let datum = NodeGridDatum {
            margin_top: Some(40.0),
            margin_left: Some(12.5),
            ..NodeGridDatum::span(1, 6)
        };
        let placement = GridPlacement::from_datum(&datum).unwrap();
        assert_eq!(placement.grid_column, "1 / span 6");
        assert_eq!(placement.grid_row, "1");

        let props = placement.to_properties();
        assert_eq!(props["marginTop"], "40px");
        assert_eq!(props["marginLeft"], "12.5px");
        assert_eq!(props["marginRight"], "0px");
        assert_eq!(props["alignSelf"], "start");
        assert_eq!(props["justifySelf"], "stretch");
        assert_eq!(props["width"], "auto");
    }

    #[test]
    fn test_row_placement() {
        let datum = NodeGridDatum {
            row_start: Some(3),
            ..NodeGridDatum::span(2, 1)
        };
        let placement = GridPlacement::from_datum(&datum).unwrap();
        assert_eq!(placement.grid_row, "3 / span 1");
    }

    #[test]
    fn test_unplaced_datum() {
        assert!(GridPlacement::from_datum(&NodeGridDatum::span(0, 4)).is_none());
        assert!(GridPlacement::from_datum(&NodeGridDatum::span(2, 0)).is_none());
    }

    #[test]
    fn test_node_properties_placement_wins() {
        let mut styles = Responsive::new(StyleMap::from([
            ("color".to_string(), "#1a1a2e".to_string()),
            ("width".to_string(), "300px".to_string()),
        ]));
        styles.apply(
            Some(Breakpoint::Mobile),
            &StyleMap::from([("color".to_string(), "#000".to_string())]),
        );

        let mut grid = Responsive::new(NodeGridDatum::span(1, 6));
        grid.apply(
            Some(Breakpoint::Mobile),
            &NodeGridPatch {
                col_span: Some(4),
                ..Default::default()
            },
        );

        let props = node_properties(&styles, Some(&grid), Breakpoint::Mobile);
        assert_eq!(props["color"], "#000");
        assert_eq!(props["width"], "auto");
        assert_eq!(props["gridColumn"], "1 / span 4");

        let unplaced = node_properties(&styles, None, Breakpoint::Desktop);
        assert_eq!(unplaced["width"], "300px");
        assert!(!unplaced.contains_key("gridColumn"));
    }
}
