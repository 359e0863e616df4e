pub mod controller;
pub mod ground_track;
pub mod layout;
pub mod panels;
pub mod projection;
pub mod surface;
pub mod tab;

pub use controller::DashboardController;
pub use layout::{Layout, LayoutOptions};
pub use projection::ViewAngles;
pub use surface::{DrawingSurface, RetainedSurface};
pub use tab::{ControlId, NavControl, Tab};
