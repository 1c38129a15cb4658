//! # DrawKit
//!
//! A gesture-driven annotation canvas core for image markup surfaces:
//! - Freehand pen, ellipse, rectangle, arrow, measurement and text tools
//! - Per-shape hit zones with move and resize transforms
//! - Snapshot-based undo history reduced from discrete actions
//! - JSON document persistence
//!
//! ## Architecture
//!
//! DrawKit is organized as a workspace with multiple crates:
//!
//! 1. **drawkit-core** - Geometry primitives, HSL colors, constants, errors
//! 2. **drawkit-canvas** - Shape model, gesture state machine, undo history,
//!    editor facade
//! 3. **drawkit** - Umbrella crate with logging setup and re-exports
//!
//! The crates hold no rendering code; a view layer draws the items and
//! feeds pointer events, text measurements and capture callbacks in.

pub use drawkit_canvas as canvas;

pub use drawkit_core::{
    fit_image, point_to_segment_distance, CanvasError, HslColor, Point, Result, Size,
    DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_WIDTH, HIT_THRESHOLD, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH,
};

pub use drawkit_canvas::{
    from_json, label_anchor, label_clearance, split_for_label, to_json, Action, CanvasDocument,
    DrawEditor, DrawItem, DrawItemKind, DrawState, EllipseData, FocusTarget, GestureContext,
    GestureEnd, HitZone, ItemData, ItemGeometry, LabeledLine, LineData, PenPath, RectData,
    TextBox, ViewCapture, DOCUMENT_VERSION,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
