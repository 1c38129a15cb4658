//! Annotation canvas state for DrawKit
//!
//! Implements the gesture-driven editing model: a shape catalog with
//! per-family hit testing and transforms, a pointer gesture state
//! machine, an action-reduced document with snapshot undo, and an
//! editor facade for toolbars and persistence.

pub mod editor;
pub mod gesture;
pub mod history;
pub mod label;
pub mod model;
pub mod serialization;

pub use editor::{DrawEditor, ViewCapture};
pub use gesture::{FocusTarget, GestureContext, GestureEnd};
pub use history::{Action, DrawState};
pub use label::{label_anchor, label_clearance, split_for_label};
pub use model::{
    DrawItem, DrawItemKind, EllipseData, HitZone, ItemData, ItemGeometry, LabeledLine, LineData,
    PenPath, RectData, TextBox,
};
pub use serialization::{from_json, to_json, CanvasDocument, DOCUMENT_VERSION};
