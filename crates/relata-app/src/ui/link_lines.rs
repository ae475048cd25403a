use eframe::egui::{Painter, Pos2, Rect, Stroke};
use relata_core::Pair;

use crate::ui::theme::DiagramPalette;

const LINK_WIDTH: f32 = 2.0;
const HOVERED_LINK_WIDTH: f32 = 4.0;

/// Maximum pointer distance, in points, for a click to hit a line.
pub(crate) const HIT_TOLERANCE: f32 = 6.0;

/// A straight line from an element of A to an element of B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LinkSegment {
    pub(crate) pair: Pair,
    pub(crate) start: Pos2,
    pub(crate) end: Pos2,
}

/// Places one segment per pair, from the right edge of the A element to the left
/// edge of the B element.
///
/// Pairs whose elements were not laid out are skipped.
#[must_use]
pub(crate) fn layout(pairs: &[Pair], left: &[Rect], right: &[Rect]) -> Vec<LinkSegment> {
    pairs
        .iter()
        .filter_map(|&pair| {
            let start = left.get(pair.left)?.right_center();
            let end = right.get(pair.right)?.left_center();
            Some(LinkSegment { pair, start, end })
        })
        .collect()
}

#[must_use]
pub(crate) fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_sq();
    if length_sq <= f32::EPSILON {
        return point.distance(start);
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Returns the pair of the segment closest to `point`, if any lies within `tolerance`.
#[must_use]
pub(crate) fn hit_test(segments: &[LinkSegment], point: Pos2, tolerance: f32) -> Option<Pair> {
    segments
        .iter()
        .map(|segment| {
            let distance = distance_to_segment(point, segment.start, segment.end);
            (segment.pair, distance)
        })
        .filter(|(_, distance)| *distance <= tolerance)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(pair, _)| pair)
}

pub(crate) fn paint(
    painter: &Painter,
    segments: &[LinkSegment],
    hovered: Option<Pair>,
    palette: &DiagramPalette,
) {
    for segment in segments {
        let stroke = if hovered == Some(segment.pair) {
            Stroke::new(HOVERED_LINK_WIDTH, palette.link_hovered)
        } else {
            Stroke::new(LINK_WIDTH, palette.link)
        };
        painter.line_segment([segment.start, segment.end], stroke);
    }
}
