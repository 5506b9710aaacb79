// DOM-free pan/zoom state machine. The `panzoom` controller forwards raw
// event data here and re-applies the CSS transform whenever a call reports
// a change, which keeps every interaction testable off the browser.
use super::drag::DragSession;
use super::pinch::PinchSession;
use super::transform::{PanZoomOptions, PanZoomState, PanZoomUpdate};

/// Multiplicative step per wheel notch (1.1 in, 1/1.1 out).
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

#[derive(Debug)]
pub struct PanZoomEngine {
    opts: PanZoomOptions,
    state: PanZoomState,
    drag: Option<DragSession>,
    pinch: Option<PinchSession>,
    active: bool,
}

impl PanZoomEngine {
    pub fn new(opts: PanZoomOptions) -> Self {
        let state = PanZoomState::new(&opts);
        Self {
            opts,
            state,
            drag: None,
            pinch: None,
            active: true,
        }
    }

    /// Permanently stop reacting to input and programmatic updates; the
    /// last transform stays readable. There is no re-enable.
    pub fn disable(&mut self) {
        self.active = false;
        self.drag = None;
        self.pinch = None;
    }

    /// Snapshot copy of the current transform.
    pub fn state(&self) -> PanZoomState {
        self.state
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Primary-button pointer-down. Returns true when a drag session began
    /// (always, unless the engine has been disabled).
    pub fn pointer_down(&mut self, pointer_id: i32, px: f64, py: f64) -> bool {
        if !self.active {
            return false;
        }
        self.drag = Some(DragSession::begin(pointer_id, px, py, &self.state));
        true
    }

    /// Pointer-move. Returns true when the transform changed.
    pub fn pointer_move(&mut self, pointer_id: i32, px: f64, py: f64) -> bool {
        if !self.active {
            return false;
        }
        match self.drag {
            Some(d) if d.pointer_id == pointer_id => {
                (self.state.x, self.state.y) = d.pan(px, py);
                true
            }
            _ => false,
        }
    }

    /// Pointer-up or pointer-cancel. Returns true when it ended the drag.
    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        match self.drag {
            Some(d) if d.pointer_id == pointer_id => {
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    /// One wheel notch at viewport-relative `(cx, cy)`. Zero delta is a no-op.
    pub fn wheel(&mut self, delta_y: f64, cx: f64, cy: f64) -> bool {
        if !self.active {
            return false;
        }
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        self.state.zoom_about(factor, cx, cy, &self.opts);
        true
    }

    /// Two touches became active at inter-touch distance `dist`.
    pub fn pinch_start(&mut self, dist: f64) {
        if !self.active {
            return;
        }
        self.pinch = Some(PinchSession::begin(dist));
    }

    /// Touch-move with two active touches: distance `dist`, midpoint
    /// `(mx, my)` relative to the viewport. Returns true when the transform
    /// changed. A move without a prior start seeds the session instead.
    pub fn pinch_move(&mut self, dist: f64, mx: f64, my: f64) -> bool {
        if !self.active {
            return false;
        }
        let Some(pinch) = &mut self.pinch else {
            self.pinch = Some(PinchSession::begin(dist));
            return false;
        };
        let factor = pinch.step(dist);
        if factor == 1.0 {
            return false;
        }
        self.state.zoom_about(factor, mx, my, &self.opts);
        true
    }

    /// Fewer than two touches remain; the session is recomputed fresh on
    /// the next two-touch start.
    pub fn pinch_end(&mut self) {
        self.pinch = None;
    }

    /// Partial programmatic update. Returns true when any field was set.
    pub fn set_state(&mut self, update: PanZoomUpdate) -> bool {
        if !self.active || update.is_empty() {
            return false;
        }
        if let Some(x) = update.x {
            self.state.x = x;
        }
        if let Some(y) = update.y {
            self.state.y = y;
        }
        if let Some(s) = update.scale {
            self.state.scale = self.opts.clamp_scale(s);
        }
        true
    }

    /// Back to `(0, 0, initial_scale)`. Returns false once disabled.
    pub fn reset(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.state = PanZoomState::new(&self.opts);
        true
    }
}
