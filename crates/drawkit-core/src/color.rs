//! HSL stroke colors.
//!
//! Colors travel as `hsl(<hue>, <saturation>%, <lightness>%)` strings in
//! documents and to the rendering layer, and as a numeric triple inside
//! the state machine.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CanvasError;

/// A stroke color in HSL space.
///
/// Hue is in degrees (0-360), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColor {
    /// Builds a color, clamping each component to its valid range.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.clamp(0.0, 360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }
}

impl Default for HslColor {
    /// Fully saturated black, the initial pen color.
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 100.0,
            lightness: 0.0,
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl FromStr for HslColor {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CanvasError::InvalidColor {
            input: s.to_string(),
        };

        let body = s
            .trim()
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let mut fields = body.split(',');
        let mut next = |percent: bool| -> Result<f64, CanvasError> {
            let raw = fields.next().ok_or_else(invalid)?.trim();
            let raw = if percent {
                raw.strip_suffix('%').ok_or_else(invalid)?
            } else {
                raw
            };
            raw.parse::<f64>().map_err(|_| invalid())
        };

        let hue = next(false)?;
        let saturation = next(true)?;
        let lightness = next(true)?;
        if fields.next().is_some() {
            return Err(invalid());
        }

        if !(0.0..=360.0).contains(&hue)
            || !(0.0..=100.0).contains(&saturation)
            || !(0.0..=100.0).contains(&lightness)
        {
            return Err(invalid());
        }

        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }
}

impl Serialize for HslColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HslColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
