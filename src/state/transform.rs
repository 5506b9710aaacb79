// Pan/zoom transform state: translate by (x, y), then scale uniformly
// about the world's top-left origin.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanZoomState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Construction-time configuration, fully resolved: callers override fields
/// with struct-update syntax (`PanZoomOptions { scale: 2.0, ..Default::default() }`)
/// so downstream code never re-derives defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanZoomOptions {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Initial scale.
    pub scale: f64,
    /// Show the first-use hint overlay.
    pub hint: bool,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            min_scale: 0.3,
            max_scale: 3.0,
            scale: 1.0,
            hint: true,
        }
    }
}

impl PanZoomOptions {
    pub fn clamp_scale(&self, s: f64) -> f64 {
        s.clamp(self.min_scale, self.max_scale)
    }
}

/// Partial update for `set_state`: absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanZoomUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
}

impl PanZoomUpdate {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.scale.is_none()
    }
}

impl From<PanZoomState> for PanZoomUpdate {
    fn from(s: PanZoomState) -> Self {
        Self {
            x: Some(s.x),
            y: Some(s.y),
            scale: Some(s.scale),
        }
    }
}

impl PanZoomState {
    pub fn new(opts: &PanZoomOptions) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: opts.clamp_scale(opts.scale),
        }
    }

    /// Multiply scale by `factor`, keeping the point under the
    /// viewport-relative anchor `(cx, cy)` visually fixed.
    ///
    /// The re-translation `x' = cx - ratio * (cx - x)` uses the post-clamp
    /// ratio, so hitting a scale bound leaves the anchor invariant too.
    /// A non-finite or non-positive factor is a no-op step.
    pub fn zoom_about(&mut self, factor: f64, cx: f64, cy: f64, opts: &PanZoomOptions) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_scale = opts.clamp_scale(self.scale * factor);
        let ratio = new_scale / self.scale;
        self.x = cx - ratio * (cx - self.x);
        self.y = cy - ratio * (cy - self.y);
        self.scale = new_scale;
    }

    /// Screen position of the world-space point `(wx, wy)`.
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        (self.x + wx * self.scale, self.y + wy * self.scale)
    }

    /// World-space point under the viewport-relative position `(sx, sy)`.
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        ((sx - self.x) / self.scale, (sy - self.y) / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> PanZoomOptions {
        PanZoomOptions::default()
    }

    #[test]
    fn initial_scale_is_clamped() {
        let o = PanZoomOptions {
            scale: 10.0,
            ..Default::default()
        };
        assert_eq!(PanZoomState::new(&o).scale, 3.0);
        let o = PanZoomOptions {
            scale: 0.01,
            ..Default::default()
        };
        assert_eq!(PanZoomState::new(&o).scale, 0.3);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let o = opts();
        let mut st = PanZoomState {
            x: 40.0,
            y: -25.0,
            scale: 1.0,
        };
        let (cx, cy) = (100.0, 50.0);
        let before = st.screen_to_world(cx, cy);
        st.zoom_about(1.1, cx, cy, &o);
        let after = st.screen_to_world(cx, cy);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
        assert!((st.scale - 1.1).abs() < 1e-12);

        // and zooming back out
        st.zoom_about(1.0 / 1.1, cx, cy, &o);
        let back = st.screen_to_world(cx, cy);
        assert!((before.0 - back.0).abs() < 1e-9);
        assert!((before.1 - back.1).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_anchor_holds_across_clamp() {
        let o = opts();
        let mut st = PanZoomState {
            x: 0.0,
            y: 0.0,
            scale: 2.9,
        };
        let before = st.screen_to_world(80.0, 80.0);
        st.zoom_about(1.5, 80.0, 80.0, &o);
        assert_eq!(st.scale, 3.0);
        let after = st.screen_to_world(80.0, 80.0);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    #[test]
    fn degenerate_factor_is_a_no_op() {
        let o = opts();
        let mut st = PanZoomState {
            x: 5.0,
            y: 6.0,
            scale: 1.5,
        };
        let orig = st;
        st.zoom_about(f64::NAN, 10.0, 10.0, &o);
        st.zoom_about(f64::INFINITY, 10.0, 10.0, &o);
        st.zoom_about(0.0, 10.0, 10.0, &o);
        st.zoom_about(-2.0, 10.0, 10.0, &o);
        assert_eq!(st, orig);
    }

    #[test]
    fn repeated_zoom_stays_within_bounds() {
        let o = opts();
        let mut st = PanZoomState::new(&o);
        for _ in 0..50 {
            st.zoom_about(1.1, 30.0, 30.0, &o);
            assert!(st.scale <= o.max_scale && st.scale >= o.min_scale);
        }
        assert_eq!(st.scale, 3.0);
        for _ in 0..100 {
            st.zoom_about(1.0 / 1.1, 30.0, 30.0, &o);
            assert!(st.scale <= o.max_scale && st.scale >= o.min_scale);
        }
        assert_eq!(st.scale, 0.3);
    }

    #[test]
    fn screen_world_round_trip() {
        let st = PanZoomState {
            x: -120.0,
            y: 35.0,
            scale: 1.6,
        };
        let (sx, sy) = st.world_to_screen(50.0, -20.0);
        let (wx, wy) = st.screen_to_world(sx, sy);
        assert!((wx - 50.0).abs() < 1e-9);
        assert!((wy + 20.0).abs() < 1e-9);
    }

    #[test]
    fn update_from_state_is_full() {
        let st = PanZoomState {
            x: 1.0,
            y: 2.0,
            scale: 1.5,
        };
        let up = PanZoomUpdate::from(st);
        assert_eq!(up.x, Some(1.0));
        assert_eq!(up.y, Some(2.0));
        assert_eq!(up.scale, Some(1.5));
        assert!(!up.is_empty());
        assert!(PanZoomUpdate::default().is_empty());
    }
}
