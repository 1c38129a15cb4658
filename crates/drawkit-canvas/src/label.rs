//! Label layout for measurement lines.
//!
//! A double-arrow line renders as two shortened segments with its label
//! sitting upright in the gap between them.

use drawkit_core::{
    Point, LABEL_CHAR_WIDTH, LABEL_ESTIMATE_MIN_CHARS, MIN_LABEL_CLEARANCE, MIN_SEGMENT_LENGTH,
};

use crate::model::LineData;

/// Pixel clearance to reserve for a label of `text_len` characters.
pub fn label_clearance(text_len: usize) -> f64 {
    if text_len > LABEL_ESTIMATE_MIN_CHARS {
        MIN_LABEL_CLEARANCE.max(text_len as f64 * LABEL_CHAR_WIDTH)
    } else {
        MIN_LABEL_CLEARANCE
    }
}

/// Midpoint anchor and upright rotation angle (degrees, 0..360) for the
/// label of `line`.
///
/// The angle keeps text readable for any line direction. A zero-length
/// line anchors at its single point with no rotation.
pub fn label_anchor(line: &LineData) -> (Point, f64) {
    let dist = line.length();
    let mid = Point::new((line.x1 + line.x2) / 2.0, (line.y1 + line.y2) / 2.0);
    if dist == 0.0 {
        return (mid, 0.0);
    }

    let base = ((line.x1 - line.x2).abs() / dist).acos().to_degrees();
    let angle = if line.x1 > line.x2 {
        if line.y1 > line.y2 {
            base
        } else {
            360.0 - base
        }
    } else if line.y1 > line.y2 {
        360.0 - base
    } else {
        base
    };

    (mid, angle)
}

/// Splits `line` into the two visible segments on either side of the
/// label gap.
///
/// Lines too short to leave a usable segment on each side are returned
/// whole for both halves, so short measurements still draw.
pub fn split_for_label(line: &LineData, text_len: usize) -> (LineData, LineData) {
    let dist = line.length();
    let half = (dist - label_clearance(text_len)) / 2.0;
    if half <= MIN_SEGMENT_LENGTH {
        return (*line, *line);
    }

    let ratio = half / dist;
    let first = LineData {
        x1: line.x1,
        y1: line.y1,
        x2: line.x1 + (line.x2 - line.x1) * ratio,
        y2: line.y1 + (line.y2 - line.y1) * ratio,
    };
    let second = LineData {
        x1: line.x2 - (line.x2 - line.x1) * ratio,
        y1: line.y2 - (line.y2 - line.y1) * ratio,
        x2: line.x2,
        y2: line.y2,
    };
    (first, second)
}
