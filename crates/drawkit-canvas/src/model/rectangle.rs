use serde::{Deserialize, Serialize};

use drawkit_core::Point;

use super::{between, HitZone, ItemGeometry};

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// Width and height stay signed mid-gesture, so a drag that crosses the
/// anchor simply inverts the rectangle rather than clamping at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectData {
    /// A zero-size rectangle anchored at `origin`.
    pub fn at(origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl ItemGeometry for RectData {
    /// Corners are tested before the interior, so a touch near a corner
    /// resizes rather than moves even when it also lies inside.
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        let right = self.x + self.width;
        let bottom = self.y + self.height;

        if touch.within_box(Point::new(self.x, self.y), threshold) {
            HitZone::TopLeft
        } else if touch.within_box(Point::new(right, self.y), threshold) {
            HitZone::TopRight
        } else if touch.within_box(Point::new(self.x, bottom), threshold) {
            HitZone::BottomLeft
        } else if touch.within_box(Point::new(right, bottom), threshold) {
            HitZone::BottomRight
        } else if between(touch.x, self.x, right) && between(touch.y, self.y, bottom) {
            HitZone::Center
        } else {
            HitZone::Out
        }
    }

    /// Corner drags keep the opposite corner fixed; a center drag keeps
    /// the size fixed.
    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        match zone {
            HitZone::TopLeft => Self {
                x: self.x + tx,
                y: self.y + ty,
                width: self.width - tx,
                height: self.height - ty,
            },
            HitZone::TopRight => Self {
                y: self.y + ty,
                width: self.width + tx,
                height: self.height - ty,
                ..*self
            },
            HitZone::BottomLeft => Self {
                x: self.x + tx,
                width: self.width - tx,
                height: self.height + ty,
                ..*self
            },
            HitZone::BottomRight => Self {
                width: self.width + tx,
                height: self.height + ty,
                ..*self
            },
            HitZone::Center => Self {
                x: self.x + tx,
                y: self.y + ty,
                ..*self
            },
            _ => *self,
        }
    }
}
