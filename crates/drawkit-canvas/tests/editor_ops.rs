//! Editor facade tests: selection, live style application, text
//! editing and snapshot capture.

use drawkit_canvas::{DrawEditor, DrawItemKind, ItemData, ViewCapture};
use drawkit_core::{CanvasError, HslColor, Point, Result};

fn draw(editor: &mut DrawEditor, kind: DrawItemKind, from: Point, to: Point) {
    editor.set_drawing_mode(kind);
    editor.gesture_start(from);
    editor.gesture_move(to);
    editor.gesture_end();
}

#[test]
fn test_select_adopts_item_style() {
    let mut editor = DrawEditor::new();
    draw(
        &mut editor,
        DrawItemKind::Ellipse,
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
    );
    editor.select_item(0);
    editor.set_stroke_width(9.0);
    editor.set_color(HslColor::new(30.0, 70.0, 50.0));

    // Deselect, then picking the item up again restores its style into
    // the live controls.
    editor.set_drawing_mode(DrawItemKind::Pen);
    editor.set_stroke_width(3.0);
    editor.set_color(HslColor::default());

    assert!(editor.select_item(0));
    assert_eq!(editor.stroke_width(), 9.0);
    assert_eq!(editor.color(), HslColor::new(30.0, 70.0, 50.0));
}

#[test]
fn test_select_out_of_range_is_refused() {
    let mut editor = DrawEditor::new();
    assert!(!editor.select_item(0));
    assert!(!editor.has_selection());
}

#[test]
fn test_stroke_width_clamps_to_slider_range() {
    let mut editor = DrawEditor::new();
    editor.set_stroke_width(99.0);
    assert_eq!(editor.stroke_width(), 10.0);
    editor.set_stroke_width(0.5);
    assert_eq!(editor.stroke_width(), 2.0);
}

#[test]
fn test_live_style_applies_to_selected_item() {
    let mut editor = DrawEditor::new();
    draw(
        &mut editor,
        DrawItemKind::Ellipse,
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
    );
    editor.select_item(0);
    editor.set_stroke_width(6.0);
    assert_eq!(editor.done_items()[0].stroke_width, 6.0);
}

#[test]
fn test_set_item_text_edits_text_box() {
    let mut editor = DrawEditor::new();
    editor.set_text_base_height(18.0);
    draw(
        &mut editor,
        DrawItemKind::Text,
        Point::new(50.0, 50.0),
        Point::new(60.0, 60.0),
    );

    editor.set_item_text("hello");
    match &editor.done_items()[0].data {
        ItemData::Text(t) => {
            assert_eq!(t.text, "hello");
            assert_eq!(t.height, 18.0);
            assert_eq!(t.width, 200.0);
        }
        other => panic!("expected text box, got {other:?}"),
    }
}

#[test]
fn test_set_item_text_edits_measurement_label() {
    let mut editor = DrawEditor::new();
    draw(
        &mut editor,
        DrawItemKind::DoubleArrows,
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    );
    editor.set_item_text("42 cm");
    match &editor.done_items()[0].data {
        ItemData::DoubleArrows(a) => assert_eq!(a.text, "42 cm"),
        other => panic!("expected measurement line, got {other:?}"),
    }
}

#[test]
fn test_text_edit_without_text_selection_is_ignored() {
    let mut editor = DrawEditor::new();
    draw(
        &mut editor,
        DrawItemKind::Ellipse,
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
    );
    editor.set_item_text("ignored");
    assert!(matches!(
        editor.done_items()[0].data,
        ItemData::Ellipse(_)
    ));
}

#[test]
fn test_first_base_height_measurement_sticks() {
    let mut editor = DrawEditor::new();
    editor.set_text_base_height(18.0);
    // Later measurements do not change the default for new boxes.
    editor.set_text_base_height(36.0);

    draw(
        &mut editor,
        DrawItemKind::Text,
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
    );
    match &editor.done_items()[0].data {
        ItemData::Text(t) => assert_eq!(t.height, 18.0),
        other => panic!("expected text box, got {other:?}"),
    }
}

#[test]
fn test_base_height_tracks_selected_text_box() {
    let mut editor = DrawEditor::new();
    editor.set_text_base_height(18.0);
    draw(
        &mut editor,
        DrawItemKind::Text,
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
    );
    editor.set_item_text("two\nlines");
    // The view re-measures after the edit and reports the grown height.
    editor.set_text_base_height(36.0);
    match &editor.done_items()[0].data {
        ItemData::Text(t) => assert_eq!(t.height, 36.0),
        other => panic!("expected text box, got {other:?}"),
    }
}

#[test]
fn test_mode_change_dismisses_focus() {
    let mut editor = DrawEditor::new();
    draw(
        &mut editor,
        DrawItemKind::Text,
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
    );
    editor.set_drawing_mode(DrawItemKind::Pen);
    assert_eq!(editor.take_focus_request(), None);
    assert!(!editor.has_selection());
}

struct StubCapture {
    calls: usize,
    fail: bool,
}

impl ViewCapture for StubCapture {
    fn capture(&mut self) -> Result<String> {
        self.calls += 1;
        if self.fail {
            Err(CanvasError::SnapshotFailed {
                reason: "no surface".to_string(),
            })
        } else {
            Ok("file:///tmp/snapshot.png".to_string())
        }
    }
}

#[test]
fn test_take_snapshot_clears_selection_and_delegates() {
    let mut editor = DrawEditor::new();
    draw(
        &mut editor,
        DrawItemKind::Ellipse,
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
    );
    assert!(editor.has_selection());

    let mut capture = StubCapture {
        calls: 0,
        fail: false,
    };
    let uri = editor.take_snapshot(&mut capture).unwrap();
    assert_eq!(uri, "file:///tmp/snapshot.png");
    assert_eq!(capture.calls, 1);
    assert!(!editor.has_selection());
    assert_eq!(editor.done_items().len(), 1);
}

#[test]
fn test_take_snapshot_surfaces_capture_failure() {
    let mut editor = DrawEditor::new();
    let mut capture = StubCapture {
        calls: 0,
        fail: true,
    };
    assert!(matches!(
        editor.take_snapshot(&mut capture),
        Err(CanvasError::SnapshotFailed { .. })
    ));
}
