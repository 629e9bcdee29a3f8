use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SeriesPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Kind tag selecting the engine-side series factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Candlestick,
    Line,
    Area,
    Bar,
    Histogram,
}

impl SeriesKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candlestick => "candlestick",
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Histogram => "histogram",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "candlestick" => Ok(Self::Candlestick),
            "line" => Ok(Self::Line),
            "area" => Ok(Self::Area),
            "bar" => Ok(Self::Bar),
            "histogram" => Ok(Self::Histogram),
            other => Err(ChartError::UnsupportedSeriesType {
                kind: other.to_owned(),
            }),
        }
    }
}

/// Per-series styling passed through to the engine factory.
///
/// `color` left unset is resolved from the chart palette by addition order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesOptions {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub line_width: Option<f64>,
    #[serde(default)]
    pub up_color: Option<Color>,
    #[serde(default)]
    pub down_color: Option<Color>,
    #[serde(default)]
    pub top_color: Option<Color>,
    #[serde(default)]
    pub bottom_color: Option<Color>,
    #[serde(default)]
    pub base: Option<f64>,
    #[serde(default)]
    pub price_line_visible: Option<bool>,
}

impl SeriesOptions {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
    InBar,
}

/// Declarative marker attached to one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMarker {
    pub time: f64,
    pub position: MarkerPosition,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub text: Option<String>,
}

impl SeriesMarker {
    #[must_use]
    pub fn new(time: f64, position: MarkerPosition) -> Self {
        Self {
            time,
            position,
            color: None,
            text: None,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Horizontal price line attached to one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLine {
    pub price: f64,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub line_width: Option<f64>,
    #[serde(default)]
    pub title: Option<String>,
}

impl PriceLine {
    #[must_use]
    pub fn new(price: f64) -> Self {
        Self {
            price,
            color: None,
            line_width: None,
            title: None,
        }
    }
}

/// Declarative description of one series to realize on the chart.
///
/// This type is serializable so host applications can persist/load series
/// setups without inventing their own ad-hoc format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub data: Vec<SeriesPoint>,
    #[serde(default)]
    pub options: SeriesOptions,
    #[serde(default)]
    pub markers: Vec<SeriesMarker>,
    #[serde(default)]
    pub price_lines: Vec<PriceLine>,
    /// Legend row title; series without one contribute no legend entry.
    #[serde(default)]
    pub legend: Option<String>,
    /// Densification interval for sparse scalar data, in time units.
    #[serde(default)]
    pub linear_interpolation: Option<f64>,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(data: Vec<SeriesPoint>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SeriesOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Vec<SeriesMarker>) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_price_lines(mut self, price_lines: Vec<PriceLine>) -> Self {
        self.price_lines = price_lines;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, title: impl Into<String>) -> Self {
        self.legend = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_linear_interpolation(mut self, interval: f64) -> Self {
        self.linear_interpolation = Some(interval);
        self
    }

    /// Serializes the spec to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize series spec: {e}")))
    }

    /// Deserializes a spec from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse series spec: {e}")))
    }
}
