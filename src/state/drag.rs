// Single-pointer pan session, alive between pointer-down and pointer-up/cancel.
use super::transform::PanZoomState;

#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub pointer_id: i32,
    start_x: f64,
    start_y: f64,
    origin_x: f64,
    origin_y: f64,
}

impl DragSession {
    pub fn begin(pointer_id: i32, px: f64, py: f64, state: &PanZoomState) -> Self {
        Self {
            pointer_id,
            start_x: px,
            start_y: py,
            origin_x: state.x,
            origin_y: state.y,
        }
    }

    /// Pan tracks the pointer delta 1:1, unaffected by scale.
    pub fn pan(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.origin_x + (px - self.start_x),
            self.origin_y + (py - self.start_y),
        )
    }
}
