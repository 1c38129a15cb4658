//! Tuning constants shared across the canvas crates.

/// Distance in canvas units within which a touch counts as grabbing a
/// control point or edge.
pub const HIT_THRESHOLD: f64 = 20.0;

/// Stroke width given to new items until the user changes it.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Lower bound of the stroke width slider.
pub const MIN_STROKE_WIDTH: f64 = 2.0;

/// Upper bound of the stroke width slider.
pub const MAX_STROKE_WIDTH: f64 = 10.0;

/// Width of a freshly placed text box before any editing.
pub const DEFAULT_TEXT_WIDTH: f64 = 200.0;

/// Smallest gap reserved in the middle of a measurement line for its label.
pub const MIN_LABEL_CLEARANCE: f64 = 50.0;

/// Estimated label width per character, used once a label exceeds
/// [`LABEL_ESTIMATE_MIN_CHARS`] characters.
pub const LABEL_CHAR_WIDTH: f64 = 10.0;

/// Labels at or below this length keep the minimum clearance.
pub const LABEL_ESTIMATE_MIN_CHARS: usize = 5;

/// A measurement line is not shortened when either remaining half segment
/// would be this long or less.
pub const MIN_SEGMENT_LENGTH: f64 = 10.0;
