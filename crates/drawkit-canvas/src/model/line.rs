use serde::{Deserialize, Serialize};

use drawkit_core::{point_to_segment_distance, Point};

use super::{between, HitZone, ItemGeometry};

/// A straight segment, used for plain lines and both arrow styles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineData {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineData {
    /// A zero-length segment with both endpoints at `origin`.
    pub fn at(origin: Point) -> Self {
        Self {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x,
            y2: origin.y,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        self.start().distance_to(self.end())
    }
}

impl ItemGeometry for LineData {
    /// `Top` grabs the first endpoint, `Bottom` the second, `Center` the
    /// body of the segment. Points past either endpoint fall out even
    /// when close to the infinite line.
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        if touch.within_box(self.start(), threshold) {
            HitZone::Top
        } else if touch.within_box(self.end(), threshold) {
            HitZone::Bottom
        } else if point_to_segment_distance(touch, self.start(), self.end()) <= threshold
            && between(touch.x, self.x1, self.x2)
            && between(touch.y, self.y1, self.y2)
        {
            HitZone::Center
        } else {
            HitZone::Out
        }
    }

    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        match zone {
            HitZone::Top => Self {
                x1: self.x1 + tx,
                y1: self.y1 + ty,
                ..*self
            },
            HitZone::Bottom => Self {
                x2: self.x2 + tx,
                y2: self.y2 + ty,
                ..*self
            },
            HitZone::Center => Self {
                x1: self.x1 + tx,
                y1: self.y1 + ty,
                x2: self.x2 + tx,
                y2: self.y2 + ty,
            },
            _ => *self,
        }
    }
}

/// A measurement line with a text label at its midpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabeledLine {
    #[serde(flatten)]
    pub line: LineData,
    pub text: String,
}

impl LabeledLine {
    pub fn at(origin: Point) -> Self {
        Self {
            line: LineData::at(origin),
            text: String::new(),
        }
    }
}

impl ItemGeometry for LabeledLine {
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        self.line.classify(touch, threshold)
    }

    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        Self {
            line: self.line.transformed(zone, tx, ty),
            text: self.text.clone(),
        }
    }
}
