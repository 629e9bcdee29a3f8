use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` css hex notation.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "invalid hex color literal `{input}`"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ChartError::InvalidData(format!("invalid hex color literal `{input}`"))
            })
        };
        match digits.len() {
            6 => Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                f64::from(channel(6..8)?) / 255.0,
            )),
            _ => Err(ChartError::InvalidData(format!(
                "invalid hex color literal `{input}`"
            ))),
        }
    }

    /// Formats as css: `#RRGGBB` when opaque, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let as_byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02X}{:02X}{:02X}",
                as_byte(self.red),
                as_byte(self.green),
                as_byte(self.blue)
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                as_byte(self.red),
                as_byte(self.green),
                as_byte(self.blue),
                self.alpha
            )
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}
