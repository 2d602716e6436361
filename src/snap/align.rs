//! Smart alignment guides between a dragged rectangle and its siblings.
//!
//! Each axis compares the three reference points of the active rectangle
//! (leading edge, center, trailing edge) against the same three points of
//! every sibling. The closest match within tolerance decides the offset;
//! matches that tie with it (within [`ALIGN_TIE_EPSILON`]) still produce
//! guides but do not move the rectangle further.
//!
//! The two axes search independently. The x offset is applied before the
//! horizontal guides are built, so their span follows the rectangle as it
//! will be drawn this frame.

use log::trace;
use serde::Serialize;

use super::{Axis, Guide};
use crate::model::Rect;

/// Two alignment distances closer than this count as a tie.
pub const ALIGN_TIE_EPSILON: f64 = 0.1;

/// Result of an alignment pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    pub snapped_rect: Rect,
    pub guides: Vec<Guide>,
}

/// A matched reference line and the orthogonal extent its guide covers.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    line: f64,
    span_start: f64,
    span_end: f64,
}

#[derive(Debug)]
struct AxisMatch {
    distance: f64,
    offset: f64,
    candidates: Vec<Candidate>,
}

fn reference_points(start: f64, size: f64) -> [f64; 3] {
    [start, start + size / 2.0, start + size]
}

/// Find the best alignment along one axis.
///
/// `along` extracts `(start, size)` on the searched axis and `across` the
/// `(start, end)` extent on the orthogonal one.
fn best_match(
    active: &Rect,
    others: &[Rect],
    tolerance: f64,
    along: impl Fn(&Rect) -> (f64, f64),
    across: impl Fn(&Rect) -> (f64, f64),
) -> Option<AxisMatch> {
    let (start, size) = along(active);
    let points = reference_points(start, size);
    let (active_lo, active_hi) = across(active);

    let mut best: Option<AxisMatch> = None;
    for other in others {
        let (other_start, other_size) = along(other);
        let targets = reference_points(other_start, other_size);
        let (other_lo, other_hi) = across(other);
        let candidate = |line| Candidate {
            line,
            span_start: active_lo.min(other_lo),
            span_end: active_hi.max(other_hi),
        };

        for &point in &points {
            for &target in &targets {
                let distance = (point - target).abs();
                if distance > tolerance {
                    continue;
                }
                let closer = best.as_ref().map_or(true, |b| distance < b.distance);
                if closer {
                    best = Some(AxisMatch {
                        distance,
                        offset: target - point,
                        candidates: vec![candidate(target)],
                    });
                } else if let Some(current) = best.as_mut() {
                    if (distance - current.distance).abs() < ALIGN_TIE_EPSILON {
                        current.candidates.push(candidate(target));
                    }
                }
            }
        }
    }
    best
}

fn guides_for(axis: Axis, found: &AxisMatch) -> impl Iterator<Item = Guide> + '_ {
    found.candidates.iter().map(move |c| Guide {
        axis,
        position: c.line,
        span_start: c.span_start,
        span_end: c.span_end,
    })
}

/// Align `active` against `others` and report the guides to draw.
///
/// With no siblings, or none within `tolerance`, the rectangle comes back
/// unchanged with no guides.
pub fn calc_alignment_guides(active: &Rect, others: &[Rect], tolerance: f64) -> Alignment {
    let mut snapped = active.clone();
    let mut guides = Vec::new();

    let vertical = best_match(
        active,
        others,
        tolerance,
        |r| (r.x, r.width),
        |r| (r.y, r.bottom()),
    );
    if let Some(found) = &vertical {
        trace!(
            "align {} x by {} ({} guides)",
            active.id,
            found.offset,
            found.candidates.len()
        );
        snapped.x += found.offset;
        guides.extend(guides_for(Axis::Vertical, found));
    }

    let moved = snapped.clone();
    let horizontal = best_match(
        &moved,
        others,
        tolerance,
        |r| (r.y, r.height),
        |r| (r.x, r.right()),
    );
    if let Some(found) = &horizontal {
        trace!(
            "align {} y by {} ({} guides)",
            active.id,
            found.offset,
            found.candidates.len()
        );
        snapped.y += found.offset;
        guides.extend(guides_for(Axis::Horizontal, found));
    }

    Alignment {
        snapped_rect: snapped,
        guides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_siblings() {
        let active = Rect::new("a", 10.0, 20.0, 100.0, 50.0);
        let result = calc_alignment_guides(&active, &[], 10.0);
        assert_eq!(result.snapped_rect, active);
        assert!(result.guides.is_empty());
    }

    #[test]
    fn test_left_edge_alignment() {
        let active = Rect::new("a", 104.0, 300.0, 80.0, 40.0);
        let other = Rect::new("b", 100.0, 100.0, 200.0, 60.0);
        let result = calc_alignment_guides(&active, &[other], 5.0);

        assert!((result.snapped_rect.x - 100.0).abs() < 0.001);
        assert!((result.snapped_rect.y - 300.0).abs() < 0.001);
        assert_eq!(result.guides.len(), 1);
        let guide = result.guides[0];
        assert_eq!(guide.axis, Axis::Vertical);
        assert!((guide.position - 100.0).abs() < 0.001);
        // spans from the sibling's top to the active rect's bottom
        assert!((guide.span_start - 100.0).abs() < 0.001);
        assert!((guide.span_end - 340.0).abs() < 0.001);
    }

    #[test]
    fn test_just_outside_tolerance() {
        let active = Rect::new("a", 105.5, 300.0, 80.0, 40.0);
        let other = Rect::new("b", 100.0, 100.0, 400.0, 60.0);
        let result = calc_alignment_guides(&active, &[other], 5.0);
        assert!((result.snapped_rect.x - 105.5).abs() < 0.001);
        assert!(result.guides.is_empty());
    }

    #[test]
    fn test_center_alignment_on_y() {
        // active center y = 125, other center y = 127
        let active = Rect::new("a", 500.0, 100.0, 50.0, 50.0);
        let other = Rect::new("b", 0.0, 107.0, 100.0, 40.0);
        let result = calc_alignment_guides(&active, &[other], 3.0);
        assert!((result.snapped_rect.y - 102.0).abs() < 0.001);
        assert!((result.snapped_rect.x - 500.0).abs() < 0.001);
        assert_eq!(result.guides.len(), 1);
        assert_eq!(result.guides[0].axis, Axis::Horizontal);
        assert!((result.guides[0].position - 127.0).abs() < 0.001);
        assert!((result.guides[0].span_start - 0.0).abs() < 0.001);
        assert!((result.guides[0].span_end - 550.0).abs() < 0.001);
    }

    #[test]
    fn test_closest_match_wins() {
        let active = Rect::new("a", 50.0, 0.0, 100.0, 20.0);
        let far = Rect::new("far", 46.0, 200.0, 30.0, 20.0);
        let near = Rect::new("near", 152.0, 400.0, 30.0, 20.0);
        let result = calc_alignment_guides(&active, &[far, near], 5.0);
        // right edge 150 → 152 beats left edge 50 → 46
        assert!((result.snapped_rect.x - 52.0).abs() < 0.001);
        let vertical: Vec<_> = result
            .guides
            .iter()
            .filter(|g| g.axis == Axis::Vertical)
            .collect();
        assert_eq!(vertical.len(), 1);
        assert!((vertical[0].position - 152.0).abs() < 0.001);
    }

    #[test]
    fn test_ties_all_produce_guides() {
        let active = Rect::new("a", 100.0, 0.0, 100.0, 20.0);
        let left_sibling = Rect::new("b", 102.0, 100.0, 20.0, 20.0);
        let right_sibling = Rect::new("c", 180.0, 200.0, 22.0, 20.0);
        let result = calc_alignment_guides(&active, &[left_sibling, right_sibling], 5.0);

        // both siblings are 2px off; one offset applies
        assert!((result.snapped_rect.x - 102.0).abs() < 0.001);
        let mut positions: Vec<f64> = result
            .guides
            .iter()
            .filter(|g| g.axis == Axis::Vertical)
            .map(|g| g.position)
            .collect();
        positions.sort_by(f64::total_cmp);
        assert_eq!(positions, vec![102.0, 202.0]);
    }

    #[test]
    fn test_axes_resolve_together() {
        let active = Rect::new("a", 98.0, 203.0, 50.0, 50.0);
        let other = Rect::new("b", 100.0, 200.0, 50.0, 50.0);
        let result = calc_alignment_guides(&active, &[other], 5.0);
        assert!((result.snapped_rect.x - 100.0).abs() < 0.001);
        assert!((result.snapped_rect.y - 200.0).abs() < 0.001);
        assert!(result.guides.iter().any(|g| g.axis == Axis::Vertical));
        assert!(result.guides.iter().any(|g| g.axis == Axis::Horizontal));
    }
}
