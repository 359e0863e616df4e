pub mod fonts;
pub mod png;

pub use png::PngSurface;

use plotters::style::RGBColor;

use crate::theme::Rgb;

pub(crate) fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}
