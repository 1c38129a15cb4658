//! Pointer gesture handling.
//!
//! A gesture is classified once at touch-down against the selected item
//! and then replayed as cumulative translations from the start point.
//! Transforms always derive from the geometry saved at touch-down, so a
//! long drag never compounds its own intermediate updates. When the
//! gesture ends its item is frozen into the committed list and stays
//! selected there.

use tracing::debug;

use drawkit_core::{Point, HIT_THRESHOLD};

use crate::editor::DrawEditor;
use crate::history::Action;
use crate::model::{DrawItem, HitZone, ItemData, ItemGeometry};

/// What the view should focus once a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The inline editor of a text box.
    ItemText,
    /// The label field of a measurement line.
    LabelText,
}

/// Bookkeeping captured at touch-down and carried through the gesture.
#[derive(Debug, Clone)]
pub struct GestureContext {
    /// Touch-down position; translations are measured from here.
    pub start: Point,
    /// Zone the touch landed in, `Out` when nothing was grabbed.
    pub zone: HitZone,
    /// Whether this gesture created the current item.
    pub newly_created: bool,
    /// Geometry of the grabbed item at touch-down. `None` when the
    /// touch landed outside every zone.
    pub initial: Option<ItemData>,
}

/// Outcome of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEnd {
    /// Whether an undo snapshot was recorded.
    pub committed: bool,
    /// Text focus the view should apply, if any.
    pub focus: Option<FocusTarget>,
}

impl DrawEditor {
    /// Touch-down: classifies the touch against the selected item. A
    /// grab pulls that item out of the committed list for the duration
    /// of the gesture and saves its geometry; a miss leaves it in place
    /// and the move handler will start a fresh item instead.
    pub fn gesture_start(&mut self, p: Point) {
        let zone = match self.selected_item() {
            Some(item) => item.classify(p, HIT_THRESHOLD),
            None => HitZone::Out,
        };

        let initial = if zone == HitZone::Out {
            None
        } else {
            if self.current.is_none() {
                if let Some(index) = self.selected.take() {
                    self.current = self.state.take_done_item(index);
                }
            }
            self.current.as_ref().map(|item| item.data.clone())
        };

        debug!(?zone, "gesture start");
        self.gesture = Some(GestureContext {
            start: p,
            zone,
            newly_created: false,
            initial,
        });
    }

    /// Pointer move: grows a freshly created item or replays the zone
    /// transform from the saved geometry. Moves without a preceding
    /// touch-down are ignored.
    pub fn gesture_move(&mut self, p: Point) {
        let Some(mut ctx) = self.gesture.take() else {
            return;
        };
        let tx = p.x - ctx.start.x;
        let ty = p.y - ctx.start.y;

        if ctx.zone == HitZone::Out {
            if !ctx.newly_created {
                ctx.newly_created = true;
                self.selected = None;
                // An item left over from an interrupted gesture is
                // frozen before the new one starts.
                if let Some(prev) = self.current.take() {
                    self.state.apply(Action::AddDoneItem(prev));
                }
                let item = DrawItem::create(
                    self.state.drawing_mode(),
                    ctx.start,
                    self.stroke_width,
                    self.color,
                    self.text_base_height.unwrap_or(0.0),
                );
                debug!(kind = ?item.kind(), "created new item");
                self.current = Some(item);
            }
            if let Some(item) = &mut self.current {
                grow_current(item, ctx.start, p, tx, ty);
            }
        } else if let (Some(item), Some(initial)) = (&mut self.current, &ctx.initial) {
            item.data = initial.transformed(ctx.zone, tx, ty);
        }

        self.gesture = Some(ctx);
    }

    /// Touch-up: freezes the gesture's item back into the committed
    /// list, snapshots the result and reports whether the view should
    /// open a text editor. A freshly drawn degenerate rectangle is
    /// discarded without a snapshot, so accidental taps leave no trace;
    /// an existing rectangle dragged to zero extent springs back to its
    /// touch-down geometry instead, treated as a no-op gesture.
    pub fn gesture_end(&mut self) -> GestureEnd {
        let ctx = self.gesture.take();

        let Some(mut item) = self.current.take() else {
            self.focus = None;
            self.state.apply(Action::AddScreenState(None));
            return GestureEnd {
                committed: true,
                focus: None,
            };
        };

        if item.is_degenerate_rectangle() {
            self.focus = None;
            let newly_created = ctx.as_ref().map(|c| c.newly_created).unwrap_or(true);
            if newly_created {
                debug!("discarding degenerate rectangle");
                return GestureEnd {
                    committed: false,
                    focus: None,
                };
            }
            debug!("restoring rectangle collapsed to zero extent");
            if let Some(initial) = ctx.and_then(|c| c.initial) {
                item.data = initial;
            }
            self.state.apply(Action::AddDoneItem(item));
            self.selected = Some(self.state.done_items().len() - 1);
            return GestureEnd {
                committed: false,
                focus: None,
            };
        }

        self.focus = match &item.data {
            ItemData::Text(_) => Some(FocusTarget::ItemText),
            ItemData::DoubleArrows(_) => Some(FocusTarget::LabelText),
            _ => None,
        };

        self.state.apply(Action::AddScreenState(Some(item.clone())));
        self.state.apply(Action::AddDoneItem(item));
        self.selected = Some(self.state.done_items().len() - 1);

        GestureEnd {
            committed: true,
            focus: self.focus,
        }
    }
}

/// Creation-phase free drag: the pointer shapes the new item directly
/// rather than through a hit zone.
fn grow_current(item: &mut DrawItem, start: Point, p: Point, tx: f64, ty: f64) {
    match &mut item.data {
        ItemData::Pen(path) => path.push(p),
        ItemData::Ellipse(e) => {
            // The ellipse spans the start point and the pointer.
            e.cx = start.x + tx / 2.0;
            e.cy = start.y + ty / 2.0;
            e.rx = tx / 2.0;
            e.ry = ty / 2.0;
        }
        ItemData::Rectangle(r) => {
            r.width = tx;
            r.height = ty;
        }
        ItemData::SingleHead(l) | ItemData::DoubleHead(l) => {
            l.x2 = p.x;
            l.y2 = p.y;
        }
        ItemData::DoubleArrows(a) => {
            a.line.x2 = p.x;
            a.line.y2 = p.y;
        }
        ItemData::Text(t) => {
            t.x = start.x + tx;
            t.y = start.y + ty;
        }
    }
}
