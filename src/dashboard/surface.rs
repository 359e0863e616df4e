use super::layout::Layout;
use super::tab::NavControl;
use crate::error::RenderError;

/// Something a [`DashboardController`](super::DashboardController) can draw into.
///
/// A transition calls, in order: `clear`, `draw`, `attach_controls`,
/// `present`. `clear` must drop any previously attached controls.
pub trait DrawingSurface {
    fn clear(&mut self);

    fn draw(&mut self, layout: Layout);

    fn attach_controls(&mut self, controls: &[NavControl]);

    /// Make the finished frame visible (or persist it).
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Surface that keeps the last frame in memory.
///
/// The live dashboard repaints from it every frame; tests inspect it.
#[derive(Debug, Default)]
pub struct RetainedSurface {
    layout: Option<Layout>,
    controls: Vec<NavControl>,
    presented: u64,
}

impl RetainedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    /// Number of completed redraws.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl DrawingSurface for RetainedSurface {
    fn clear(&mut self) {
        self.layout = None;
        self.controls.clear();
    }

    fn draw(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    fn attach_controls(&mut self, controls: &[NavControl]) {
        self.controls.extend_from_slice(controls);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.presented += 1;
        Ok(())
    }
}
