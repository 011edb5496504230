//! Cell formats built from the style configuration

use config::{CellStyleConfig, HorizontalAlign, StyleConfig};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// One format per row kind
#[derive(Debug, Clone)]
pub struct SheetFormats {
    pub title: Format,
    pub header: Format,
    pub data: Format,
}

impl SheetFormats {
    pub fn from_config(styles: &StyleConfig) -> Self {
        Self {
            title: convert_style_to_format(&styles.title),
            header: convert_style_to_format(&styles.header),
            data: convert_style_to_format(&styles.data),
        }
    }
}

impl Default for SheetFormats {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

pub fn convert_style_to_format(style: &CellStyleConfig) -> Format {
    let mut format = Format::new()
        .set_font_name(&style.font_name)
        .set_font_size(style.font_size)
        .set_font_color(Color::RGB(style.font_color));

    if style.bold {
        format = format.set_bold();
    }
    if style.italic {
        format = format.set_italic();
    }
    if style.border {
        format = format.set_border(FormatBorder::Thin);
    }

    format = format.set_align(match style.align {
        HorizontalAlign::Left => FormatAlign::Left,
        HorizontalAlign::Center => FormatAlign::Center,
        HorizontalAlign::Right => FormatAlign::Right,
    });

    format.set_align(FormatAlign::VerticalCenter)
}
