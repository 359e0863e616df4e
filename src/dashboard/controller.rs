use std::sync::Arc;

use super::layout::LayoutOptions;
use super::panels;
use super::surface::DrawingSurface;
use super::tab::{ControlId, NavControl, Tab};
use crate::error::RenderError;
use crate::telemetry::TelemetryTable;

/// Tab state machine over a drawing surface.
///
/// Owns the active tab and the navigation controls currently attached. Every
/// control dispatches through [`DashboardController::on_select`]; there is no
/// terminal state.
#[derive(Debug)]
pub struct DashboardController<S: DrawingSurface> {
    table: Arc<TelemetryTable>,
    surface: S,
    options: LayoutOptions,
    active: Tab,
    controls: Vec<NavControl>,
    next_id: u64,
}

impl<S: DrawingSurface> DashboardController<S> {
    /// Take ownership of `surface` and draw the initial `Orbit` tab.
    pub fn open(
        table: Arc<TelemetryTable>,
        surface: S,
        options: LayoutOptions,
    ) -> Result<Self, RenderError> {
        let mut controller = Self {
            table,
            surface,
            options,
            active: Tab::Orbit,
            controls: Vec::with_capacity(Tab::ALL.len()),
            next_id: 0,
        };
        controller.on_select(Tab::Orbit)?;
        Ok(controller)
    }

    /// Transition to `tab` and redraw. Selecting the active tab redraws it.
    pub fn on_select(&mut self, tab: Tab) -> Result<(), RenderError> {
        log::debug!("Tab transition {} -> {}", self.active, tab);

        // Stale controls go before anything is drawn.
        self.controls.clear();
        self.surface.clear();

        self.active = tab;
        self.surface.draw(panels::layout_for(tab, &self.table, &self.options));

        for target in Tab::ALL {
            let id = ControlId(self.next_id);
            self.next_id += 1;
            self.controls.push(NavControl { id, label: target.label(), target });
        }
        self.surface.attach_controls(&self.controls);

        self.surface.present()
    }

    /// Dispatch an activated control. Unknown ids are ignored.
    pub fn activate(&mut self, id: ControlId) -> Result<(), RenderError> {
        match self.controls.iter().find(|c| c.id == id) {
            Some(control) => {
                let target = control.target;
                self.on_select(target)
            }
            None => {
                log::debug!("Ignoring stale control {:?}", id);
                Ok(())
            }
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    pub fn table(&self) -> &Arc<TelemetryTable> {
        &self.table
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
