use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Chart-level engine options: the theme overlay tree plus dimensions.
///
/// Unset fields leave the engine default (or the underlying preset value)
/// in place; [`ChartOptions::merged_with`] lets a caller overlay refine a
/// theme preset field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(default)]
    pub grid: GridOptions,
}

impl ChartOptions {
    /// Deep merge: fields set on `overlay` win, everything else keeps the
    /// value from `self`.
    #[must_use]
    pub fn merged_with(&self, overlay: &ChartOptions) -> ChartOptions {
        ChartOptions {
            width: overlay.width.or(self.width),
            height: overlay.height.or(self.height),
            layout: LayoutOptions {
                background_color: overlay
                    .layout
                    .background_color
                    .or(self.layout.background_color),
                line_color: overlay.layout.line_color.or(self.layout.line_color),
                text_color: overlay.layout.text_color.or(self.layout.text_color),
            },
            grid: GridOptions {
                vert_lines: GridLineOptions {
                    color: overlay.grid.vert_lines.color.or(self.grid.vert_lines.color),
                },
                horz_lines: GridLineOptions {
                    color: overlay.grid.horz_lines.color.or(self.grid.horz_lines.color),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub line_color: Option<Color>,
    #[serde(default)]
    pub text_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default)]
    pub vert_lines: GridLineOptions,
    #[serde(default)]
    pub horz_lines: GridLineOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLineOptions {
    #[serde(default)]
    pub color: Option<Color>,
}

/// Series colors assigned by addition order when a spec sets none.
pub const DEFAULT_SERIES_PALETTE: [Color; 7] = [
    Color::rgb8(0x00, 0x8F, 0xFB),
    Color::rgb8(0x00, 0xE3, 0x96),
    Color::rgb8(0xFE, 0xB0, 0x19),
    Color::rgb8(0xFF, 0x45, 0x60),
    Color::rgb8(0x77, 0x5D, 0xD0),
    Color::rgb8(0xF8, 0x66, 0x24),
    Color::rgb8(0xA5, 0x97, 0x8B),
];

const DARK_BACKGROUND: Color = Color::rgb8(0x13, 0x17, 0x22);
const DARK_LINE: Color = Color::rgb8(0x2B, 0x2B, 0x43);
const DARK_TEXT: Color = Color::rgb8(0xD9, 0xD9, 0xD9);
const DARK_GRID: Color = Color::rgb8(0x36, 0x3C, 0x4E);

const LIGHT_BACKGROUND: Color = Color::rgb8(0xFF, 0xFF, 0xFF);
const LIGHT_LINE: Color = Color::rgb8(0x2B, 0x2B, 0x43);
const LIGHT_TEXT: Color = Color::rgb8(0x19, 0x19, 0x19);
const LIGHT_GRID: Color = Color::rgb8(0xE1, 0xEC, 0xF2);

#[must_use]
pub fn dark_theme_options() -> ChartOptions {
    preset(DARK_BACKGROUND, DARK_LINE, DARK_TEXT, DARK_GRID)
}

#[must_use]
pub fn light_theme_options() -> ChartOptions {
    preset(LIGHT_BACKGROUND, LIGHT_LINE, LIGHT_TEXT, LIGHT_GRID)
}

/// Preset selected by the configuration's dark-theme flag.
#[must_use]
pub fn theme_options(dark: bool) -> ChartOptions {
    if dark {
        dark_theme_options()
    } else {
        light_theme_options()
    }
}

/// Text color of the active preset; the static legend label uses it.
#[must_use]
pub fn theme_text_color(dark: bool) -> Color {
    if dark { DARK_TEXT } else { LIGHT_TEXT }
}

fn preset(background: Color, line: Color, text: Color, grid: Color) -> ChartOptions {
    ChartOptions {
        width: None,
        height: None,
        layout: LayoutOptions {
            background_color: Some(background),
            line_color: Some(line),
            text_color: Some(text),
        },
        grid: GridOptions {
            vert_lines: GridLineOptions { color: Some(grid) },
            horz_lines: GridLineOptions { color: Some(grid) },
        },
    }
}
