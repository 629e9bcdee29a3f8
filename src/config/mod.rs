pub mod series;
pub mod theme;

pub use series::{MarkerPosition, PriceLine, SeriesKind, SeriesMarker, SeriesOptions, SeriesSpec};
pub use theme::{
    ChartOptions, DEFAULT_SERIES_PALETTE, GridLineOptions, GridOptions, LayoutOptions,
    dark_theme_options, light_theme_options, theme_options, theme_text_color,
};

use crate::core::TimeRange;
use crate::render::{Color, Handler, PointerEvent, same_handler};

/// The declarative description of one chart: series lists, theme, sizing,
/// viewport range and event handlers.
///
/// This is the unit of reconciliation. Data-bearing fields compare
/// structurally; handlers compare by identity, so cloning a configuration
/// and changing one field produces exactly one difference group.
#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    pub auto_width: bool,
    pub auto_height: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Static label rendered at the top of the legend overlay.
    pub legend: Option<String>,
    pub candlestick_series: Vec<SeriesSpec>,
    pub line_series: Vec<SeriesSpec>,
    pub area_series: Vec<SeriesSpec>,
    pub bar_series: Vec<SeriesSpec>,
    pub histogram_series: Vec<SeriesSpec>,
    pub on_click: Option<Handler<PointerEvent>>,
    pub on_crosshair_move: Option<Handler<PointerEvent>>,
    pub on_time_range_move: Option<Handler<TimeRange>>,
    pub dark_theme: bool,
    /// Palette override; cycled by series addition order when non-empty.
    pub colors: Option<Vec<Color>>,
    /// Caller overlay merged on top of the selected theme preset.
    pub options: ChartOptions,
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_auto_size(mut self, auto_width: bool, auto_height: bool) -> Self {
        self.auto_width = auto_width;
        self.auto_height = auto_height;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, label: impl Into<String>) -> Self {
        self.legend = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_candlestick_series(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.candlestick_series = specs;
        self
    }

    #[must_use]
    pub fn with_line_series(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.line_series = specs;
        self
    }

    #[must_use]
    pub fn with_area_series(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.area_series = specs;
        self
    }

    #[must_use]
    pub fn with_bar_series(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.bar_series = specs;
        self
    }

    #[must_use]
    pub fn with_histogram_series(mut self, specs: Vec<SeriesSpec>) -> Self {
        self.histogram_series = specs;
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, handler: Handler<PointerEvent>) -> Self {
        self.on_click = Some(handler);
        self
    }

    #[must_use]
    pub fn with_on_crosshair_move(mut self, handler: Handler<PointerEvent>) -> Self {
        self.on_crosshair_move = Some(handler);
        self
    }

    #[must_use]
    pub fn with_on_time_range_move(mut self, handler: Handler<TimeRange>) -> Self {
        self.on_time_range_move = Some(handler);
        self
    }

    #[must_use]
    pub fn with_dark_theme(mut self, dark: bool) -> Self {
        self.dark_theme = dark;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_visible_range(mut self, from: f64, to: f64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// All series specs in realization order: candlestick, line, area, bar,
    /// histogram. Palette cycling and legend row order follow this order.
    pub fn series_specs(&self) -> impl Iterator<Item = (SeriesKind, &SeriesSpec)> {
        fn tag(kind: SeriesKind) -> impl Fn(&SeriesSpec) -> (SeriesKind, &SeriesSpec) {
            move |spec| (kind, spec)
        }
        self.candlestick_series
            .iter()
            .map(tag(SeriesKind::Candlestick))
            .chain(self.line_series.iter().map(tag(SeriesKind::Line)))
            .chain(self.area_series.iter().map(tag(SeriesKind::Area)))
            .chain(self.bar_series.iter().map(tag(SeriesKind::Bar)))
            .chain(self.histogram_series.iter().map(tag(SeriesKind::Histogram)))
    }

    /// Viewport window, present only when both bounds are set.
    #[must_use]
    pub fn visible_range(&self) -> Option<TimeRange> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(TimeRange::new(from, to)),
            _ => None,
        }
    }

    /// Active series palette: the caller override when non-empty, else the
    /// built-in seven colors.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        match self.colors.as_deref() {
            Some(colors) if !colors.is_empty() => colors,
            _ => &DEFAULT_SERIES_PALETTE,
        }
    }

    /// Handler difference group: any of the three handlers changed identity.
    #[must_use]
    pub fn handlers_differ(&self, other: &ChartConfig) -> bool {
        !same_handler(&self.on_click, &other.on_click)
            || !same_handler(&self.on_crosshair_move, &other.on_crosshair_move)
            || !same_handler(&self.on_time_range_move, &other.on_time_range_move)
    }

    /// Presentation difference group: theme flag, options overlay, or any
    /// of the five series lists changed structurally.
    #[must_use]
    pub fn presentation_differs(&self, other: &ChartConfig) -> bool {
        self.dark_theme != other.dark_theme
            || self.options != other.options
            || self.candlestick_series != other.candlestick_series
            || self.line_series != other.line_series
            || self.area_series != other.area_series
            || self.bar_series != other.bar_series
            || self.histogram_series != other.histogram_series
    }

    /// Viewport difference group: either bound changed.
    #[must_use]
    pub fn viewport_differs(&self, other: &ChartConfig) -> bool {
        self.from != other.from || self.to != other.to
    }
}
