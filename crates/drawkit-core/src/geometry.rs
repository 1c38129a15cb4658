//! Basic 2D geometry used by the canvas: points, sizes, segment distance
//! and image fitting.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Whether `self` lies within an axis-aligned box of half-width
    /// `threshold` around `target`.
    pub fn within_box(&self, target: Point, threshold: f64) -> bool {
        (self.x - target.x).abs() <= threshold && (self.y - target.y).abs() <= threshold
    }
}

/// A width/height pair in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Shortest distance from `p` to the segment `a`..`b`.
///
/// The projection parameter is clamped to the segment, so points beyond
/// either endpoint measure against that endpoint. A zero-length segment
/// degenerates to point distance.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;

    let t = if len_sq > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let proj = Point::new(a.x + t * abx, a.y + t * aby);
    p.distance_to(proj)
}

/// Scale `image` to fit inside `region` while preserving aspect ratio.
///
/// One output dimension always equals the corresponding region dimension,
/// the other is rounded to two decimal places. Non-positive image
/// dimensions yield the region unchanged.
pub fn fit_image(region: Size, image: Size) -> Size {
    if image.width <= 0.0 || image.height <= 0.0 {
        return region;
    }

    let round2 = |v: f64| (v * 100.0).round() / 100.0;

    let fitted_height = round2(image.height * region.width / image.width);
    if fitted_height < region.height {
        Size::new(region.width, fitted_height)
    } else {
        Size::new(round2(image.width * region.height / image.height), region.height)
    }
}
