use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

use crate::error::RenderError;

static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Register the bundled sans-serif face with plotters, once per process.
///
/// The static renderer never touches system fonts, so exports work on
/// headless machines.
pub fn ensure_registered() -> Result<(), RenderError> {
    REGISTERED
        .get_or_init(|| {
            register_font("sans-serif", FontStyle::Normal, epaint_default_fonts::UBUNTU_LIGHT)
                .map_err(|_| "embedded Ubuntu Light face rejected".to_string())
        })
        .clone()
        .map_err(RenderError::Font)
}
