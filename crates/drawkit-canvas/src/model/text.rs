use serde::{Deserialize, Serialize};

use drawkit_core::{Point, DEFAULT_TEXT_WIDTH};

use super::{between, HitZone, ItemGeometry};

/// A resizable text box. Height tracks the laid-out text and is written
/// back by the view layer, never dragged directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
}

impl TextBox {
    /// An empty box at `origin` with the default width and the measured
    /// single-line height of the current font.
    pub fn at(origin: Point, base_height: f64) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: DEFAULT_TEXT_WIDTH,
            height: base_height,
            text: String::new(),
        }
    }
}

impl ItemGeometry for TextBox {
    /// Handles sit at the vertical midpoint of the left and right edges
    /// and adjust width; the interior moves the box.
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        let mid_y = self.y + self.height / 2.0;
        if touch.within_box(Point::new(self.x, mid_y), threshold) {
            HitZone::Left
        } else if touch.within_box(Point::new(self.x + self.width, mid_y), threshold) {
            HitZone::Right
        } else if between(touch.x, self.x, self.x + self.width)
            && between(touch.y, self.y, self.y + self.height)
        {
            HitZone::Center
        } else {
            HitZone::Out
        }
    }

    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        match zone {
            HitZone::Left => Self {
                x: self.x + tx,
                width: self.width - tx,
                ..self.clone()
            },
            HitZone::Right => Self {
                width: self.width + tx,
                ..self.clone()
            },
            HitZone::Center => Self {
                x: self.x + tx,
                y: self.y + ty,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}
