pub mod drag;
pub mod engine;
pub mod pinch;
pub mod transform;

pub use engine::PanZoomEngine;
pub use transform::{PanZoomOptions, PanZoomState, PanZoomUpdate};
