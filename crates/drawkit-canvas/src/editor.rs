//! The editing facade over the canvas document.
//!
//! [`DrawEditor`] owns the reduced [`DrawState`], the live stroke style
//! and the selection. Finished items rest in the committed list with a
//! selection index marking the active one; a grab gesture pulls the
//! selected item into a transient editing slot and the gesture end
//! freezes it back. Pointer handling lives in the `gesture` module;
//! everything here is the discrete surface a toolbar drives.

use tracing::debug;

use drawkit_core::{
    HslColor, Result, DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH,
};

use crate::gesture::{FocusTarget, GestureContext};
use crate::history::{Action, DrawState};
use crate::model::{DrawItem, DrawItemKind, ItemData};

/// Rasterizes the canvas on behalf of the editor.
///
/// The editor never renders; the view layer implements this and returns
/// a handle to the captured image.
pub trait ViewCapture {
    fn capture(&mut self) -> Result<String>;
}

/// Canvas editing session.
pub struct DrawEditor {
    pub(crate) state: DrawState,
    /// Item held out of the committed list while a gesture edits it.
    pub(crate) current: Option<DrawItem>,
    /// Resting selection into the committed list.
    pub(crate) selected: Option<usize>,
    pub(crate) gesture: Option<GestureContext>,
    pub(crate) stroke_width: f64,
    pub(crate) color: HslColor,
    pub(crate) text_base_height: Option<f64>,
    pub(crate) focus: Option<FocusTarget>,
}

impl Default for DrawEditor {
    fn default() -> Self {
        Self::from_state(DrawState::new())
    }
}

impl DrawEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes editing over an existing document.
    pub fn from_state(state: DrawState) -> Self {
        Self {
            state,
            current: None,
            selected: None,
            gesture: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: HslColor::default(),
            text_base_height: None,
            focus: None,
        }
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn done_items(&self) -> &[DrawItem] {
        self.state.done_items()
    }

    /// The item a gesture is shaping right now, absent between gestures.
    pub fn current_item(&self) -> Option<&DrawItem> {
        self.current.as_ref()
    }

    /// The active item, whether mid-gesture or resting committed.
    pub fn selected_item(&self) -> Option<&DrawItem> {
        if self.current.is_some() {
            self.current.as_ref()
        } else {
            self.selected
                .and_then(|i| self.state.done_items().get(i))
        }
    }

    pub(crate) fn selected_item_mut(&mut self) -> Option<&mut DrawItem> {
        if self.current.is_some() {
            self.current.as_mut()
        } else {
            self.selected.and_then(|i| self.state.done_item_mut(i))
        }
    }

    pub fn has_selection(&self) -> bool {
        self.current.is_some() || self.selected.is_some()
    }

    pub fn drawing_mode(&self) -> DrawItemKind {
        self.state.drawing_mode()
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn color(&self) -> HslColor {
        self.color
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Switches the drawing tool, drops the selection and dismisses any
    /// pending text focus.
    pub fn set_drawing_mode(&mut self, kind: DrawItemKind) {
        if let Some(item) = self.current.take() {
            // Interrupted gesture; freeze its item before switching.
            self.state.apply(Action::AddDoneItem(item));
        }
        self.selected = None;
        self.focus = None;
        self.state.apply(Action::SetDrawingMode(kind));
    }

    /// Sets the live stroke width, clamped to the slider range, and
    /// applies it to the selected item immediately.
    pub fn set_stroke_width(&mut self, width: f64) {
        let width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        self.stroke_width = width;
        if let Some(item) = self.selected_item_mut() {
            item.stroke_width = width;
        }
    }

    /// Sets the live stroke color and applies it to the selected item
    /// immediately.
    pub fn set_color(&mut self, color: HslColor) {
        self.color = color;
        if let Some(item) = self.selected_item_mut() {
            item.color = color;
        }
    }

    /// Records an undo snapshot after a slider or palette interaction
    /// finishes. Without a selection there is nothing to record.
    pub fn commit_style_change(&mut self) {
        if self.has_selection() {
            self.state.apply(Action::AddScreenState(self.current.clone()));
        }
    }

    /// Replaces the text of the selected text box or measurement label.
    /// Any other selection ignores the edit.
    pub fn set_item_text(&mut self, text: impl Into<String>) {
        match self.selected_item_mut().map(|item| &mut item.data) {
            Some(ItemData::Text(t)) => t.text = text.into(),
            Some(ItemData::DoubleArrows(a)) => a.text = text.into(),
            _ => debug!("text edit ignored without a text-bearing selection"),
        }
    }

    /// Records the measured single-line text height from the view layer.
    /// The first measurement becomes the default height for new text
    /// boxes; a selected text box tracks every measurement.
    pub fn set_text_base_height(&mut self, height: f64) {
        if self.text_base_height.is_none() {
            self.text_base_height = Some(height);
        }
        if let Some(DrawItem {
            data: ItemData::Text(t),
            ..
        }) = self.selected_item_mut()
        {
            t.height = height;
        }
    }

    /// Selects a committed item. The style controls adopt its stroke
    /// width and color. Out of range leaves the selection unchanged.
    pub fn select_item(&mut self, index: usize) -> bool {
        let Some(item) = self.state.done_items().get(index) else {
            return false;
        };
        let (stroke_width, color) = (item.stroke_width, item.color);
        self.stroke_width = stroke_width;
        self.color = color;
        self.selected = Some(index);
        true
    }

    /// Deletes the selected item and records the deletion as an undo
    /// step. Returns false when nothing was selected.
    pub fn delete_selected_item(&mut self) -> bool {
        if let Some(index) = self.selected.take() {
            self.state.apply(Action::DeleteDoneItem(index));
        } else if self.current.take().is_none() {
            return false;
        }
        self.state.apply(Action::AddScreenState(None));
        true
    }

    /// Undo: drops the newest snapshot and clears the selection.
    pub fn undo_last_action(&mut self) {
        self.current = None;
        self.selected = None;
        self.state.apply(Action::Cancel);
    }

    /// Takes the pending text focus request, if a finished gesture
    /// produced one.
    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        self.focus.take()
    }

    /// Rasterizes the canvas through `target`. The selection is cleared
    /// first so its markers do not end up in the capture; an item still
    /// held by an interrupted gesture is frozen back beforehand.
    pub fn take_snapshot<C: ViewCapture>(&mut self, target: &mut C) -> Result<String> {
        if let Some(item) = self.current.take() {
            self.state.apply(Action::AddDoneItem(item));
            self.state.apply(Action::AddScreenState(None));
        }
        self.selected = None;
        target.capture()
    }
}
