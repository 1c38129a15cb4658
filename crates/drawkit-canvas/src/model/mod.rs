//! Shape model for the annotation canvas.
//!
//! Each shape family lives in its own module and implements
//! [`ItemGeometry`]: touch classification into a [`HitZone`] and
//! zone-driven transforms expressed as cumulative offsets from the
//! geometry saved when the gesture started.

use serde::{Deserialize, Serialize};

use drawkit_core::{HslColor, Point};

mod ellipse;
mod line;
mod pen;
mod rectangle;
mod text;

pub use ellipse::EllipseData;
pub use line::{LabeledLine, LineData};
pub use pen::PenPath;
pub use rectangle::RectData;
pub use text::TextBox;

/// The drawing tool a shape was made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawItemKind {
    Pen,
    Ellipse,
    Rectangle,
    SingleHead,
    DoubleHead,
    DoubleArrows,
    Text,
}

/// Where on a shape a touch landed.
///
/// `Out` means the touch grabbed nothing; every other zone maps to a
/// move or resize transform for the shape family that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
    Out,
}

/// Zone classification and zone-driven transforms for one shape family.
///
/// `transformed` takes the geometry captured at gesture start and the
/// cumulative translation since then, never an incremental delta, so
/// repeated calls for a growing translation do not compound.
pub trait ItemGeometry: Sized {
    /// Classifies a touch against this geometry.
    fn classify(&self, touch: Point, threshold: f64) -> HitZone;

    /// Applies the transform for `zone` to a copy of this geometry.
    /// Zones the family does not expose return the geometry unchanged.
    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self;
}

/// Strictly between `a` and `b` in either order. False when `a == b`,
/// so zero-extent shapes have no interior.
pub(crate) fn between(v: f64, a: f64, b: f64) -> bool {
    v > a.min(b) && v < a.max(b)
}

/// Geometry payload of a drawn item, tagged by tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ItemData {
    Pen(PenPath),
    Ellipse(EllipseData),
    Rectangle(RectData),
    SingleHead(LineData),
    DoubleHead(LineData),
    DoubleArrows(LabeledLine),
    Text(TextBox),
}

impl ItemData {
    pub fn kind(&self) -> DrawItemKind {
        match self {
            ItemData::Pen(_) => DrawItemKind::Pen,
            ItemData::Ellipse(_) => DrawItemKind::Ellipse,
            ItemData::Rectangle(_) => DrawItemKind::Rectangle,
            ItemData::SingleHead(_) => DrawItemKind::SingleHead,
            ItemData::DoubleHead(_) => DrawItemKind::DoubleHead,
            ItemData::DoubleArrows(_) => DrawItemKind::DoubleArrows,
            ItemData::Text(_) => DrawItemKind::Text,
        }
    }
}

impl ItemGeometry for ItemData {
    fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        match self {
            ItemData::Pen(p) => p.classify(touch, threshold),
            ItemData::Ellipse(e) => e.classify(touch, threshold),
            ItemData::Rectangle(r) => r.classify(touch, threshold),
            ItemData::SingleHead(l) | ItemData::DoubleHead(l) => l.classify(touch, threshold),
            ItemData::DoubleArrows(a) => a.classify(touch, threshold),
            ItemData::Text(t) => t.classify(touch, threshold),
        }
    }

    fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        match self {
            ItemData::Pen(p) => ItemData::Pen(p.transformed(zone, tx, ty)),
            ItemData::Ellipse(e) => ItemData::Ellipse(e.transformed(zone, tx, ty)),
            ItemData::Rectangle(r) => ItemData::Rectangle(r.transformed(zone, tx, ty)),
            ItemData::SingleHead(l) => ItemData::SingleHead(l.transformed(zone, tx, ty)),
            ItemData::DoubleHead(l) => ItemData::DoubleHead(l.transformed(zone, tx, ty)),
            ItemData::DoubleArrows(a) => ItemData::DoubleArrows(a.transformed(zone, tx, ty)),
            ItemData::Text(t) => ItemData::Text(t.transformed(zone, tx, ty)),
        }
    }
}

/// A drawn item: geometry plus the stroke style it is rendered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    #[serde(flatten)]
    pub data: ItemData,
    pub stroke_width: f64,
    pub color: HslColor,
}

impl DrawItem {
    /// Builds the default geometry for `kind` anchored at `origin`.
    ///
    /// Text boxes take the measured single-line height of the current
    /// font as `text_base_height`; other kinds ignore it.
    pub fn create(
        kind: DrawItemKind,
        origin: Point,
        stroke_width: f64,
        color: HslColor,
        text_base_height: f64,
    ) -> Self {
        let data = match kind {
            DrawItemKind::Pen => ItemData::Pen(PenPath::new()),
            DrawItemKind::Ellipse => ItemData::Ellipse(EllipseData::at(origin)),
            DrawItemKind::Rectangle => ItemData::Rectangle(RectData::at(origin)),
            DrawItemKind::SingleHead => ItemData::SingleHead(LineData::at(origin)),
            DrawItemKind::DoubleHead => ItemData::DoubleHead(LineData::at(origin)),
            DrawItemKind::DoubleArrows => ItemData::DoubleArrows(LabeledLine::at(origin)),
            DrawItemKind::Text => ItemData::Text(TextBox::at(origin, text_base_height)),
        };
        Self {
            data,
            stroke_width,
            color,
        }
    }

    pub fn kind(&self) -> DrawItemKind {
        self.data.kind()
    }

    /// Classifies a touch against this item.
    pub fn classify(&self, touch: Point, threshold: f64) -> HitZone {
        self.data.classify(touch, threshold)
    }

    /// Applies the transform for `zone` using this item as the saved
    /// gesture-start geometry.
    pub fn transformed(&self, zone: HitZone, tx: f64, ty: f64) -> Self {
        Self {
            data: self.data.transformed(zone, tx, ty),
            ..self.clone()
        }
    }

    /// A rectangle that never left its start point in either axis.
    /// Such rectangles are invisible and are not worth an undo step.
    pub fn is_degenerate_rectangle(&self) -> bool {
        match &self.data {
            ItemData::Rectangle(r) => r.width == 0.0 || r.height == 0.0,
            _ => false,
        }
    }
}
