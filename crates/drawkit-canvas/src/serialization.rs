//! Serialization and deserialization of canvas documents.
//!
//! Documents are JSON with a format version, the active tool and the
//! committed item list. Undo history is a session concern and is not
//! persisted; a loaded document starts with a single undo step back to
//! an empty canvas.

use serde::{Deserialize, Serialize};

use drawkit_core::{CanvasError, Result};

use crate::history::DrawState;
use crate::model::{DrawItem, DrawItemKind};

/// Document format version written by this build.
pub const DOCUMENT_VERSION: u32 = 1;

/// Serialized canvas document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDocument {
    pub version: u32,
    pub drawing_mode: DrawItemKind,
    pub items: Vec<DrawItem>,
}

/// Serializes the committed items of `state` to a JSON document.
pub fn to_json(state: &DrawState) -> Result<String> {
    let doc = CanvasDocument {
        version: DOCUMENT_VERSION,
        drawing_mode: state.drawing_mode(),
        items: state.done_items().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Rebuilds a [`DrawState`] from a JSON document.
pub fn from_json(json: &str) -> Result<DrawState> {
    let doc: CanvasDocument = serde_json::from_str(json)?;
    if doc.version > DOCUMENT_VERSION {
        return Err(CanvasError::UnsupportedVersion {
            version: doc.version,
        });
    }
    Ok(DrawState::from_items(doc.items, doc.drawing_mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Action;
    use drawkit_core::{HslColor, Point, DEFAULT_STROKE_WIDTH};

    #[test]
    fn save_and_load_preserves_items_and_mode() {
        let mut state = DrawState::new();
        state.apply(Action::SetDrawingMode(DrawItemKind::Rectangle));
        let item = DrawItem::create(
            DrawItemKind::Ellipse,
            Point::new(10.0, 20.0),
            DEFAULT_STROKE_WIDTH,
            HslColor::new(120.0, 50.0, 50.0),
            0.0,
        );
        state.apply(Action::AddDoneItem(item.clone()));

        let json = to_json(&state).unwrap();
        let loaded = from_json(&json).unwrap();

        assert_eq!(loaded.drawing_mode(), DrawItemKind::Rectangle);
        assert_eq!(loaded.done_items(), &[item]);
    }

    #[test]
    fn rejects_future_version() {
        let json = r#"{"version": 99, "drawing_mode": "pen", "items": []}"#;
        assert!(matches!(
            from_json(json),
            Err(CanvasError::UnsupportedVersion { version: 99 })
        ));
    }

    #[test]
    fn item_json_uses_tool_tags() {
        let item = DrawItem::create(
            DrawItemKind::SingleHead,
            Point::new(0.0, 0.0),
            DEFAULT_STROKE_WIDTH,
            HslColor::default(),
            0.0,
        );
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"singleHead\""));
        assert!(json.contains("\"color\":\"hsl(0, 100%, 0%)\""));
    }
}
