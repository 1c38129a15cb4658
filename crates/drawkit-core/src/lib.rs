//! Core types and utilities for DrawKit
//!
//! Provides the geometry primitives, HSL color type, shared constants and
//! error types that the canvas state machine builds on.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;

pub use color::HslColor;
pub use constants::{
    DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_WIDTH, HIT_THRESHOLD, LABEL_CHAR_WIDTH,
    LABEL_ESTIMATE_MIN_CHARS, MAX_STROKE_WIDTH, MIN_LABEL_CLEARANCE, MIN_SEGMENT_LENGTH,
    MIN_STROKE_WIDTH,
};
pub use error::{CanvasError, Result};
pub use geometry::{fit_image, point_to_segment_distance, Point, Size};
