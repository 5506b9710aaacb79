// Two-touch pinch session: tracks the last measured inter-touch distance.
#[derive(Debug, Clone, Copy)]
pub struct PinchSession {
    last_dist: f64,
}

impl PinchSession {
    pub fn begin(dist: f64) -> Self {
        Self { last_dist: dist }
    }

    /// Zoom factor for one move step: the ratio of the new distance to the
    /// last one (incremental, so oscillating distances don't drift).
    /// A zero or non-finite prior distance yields a no-op factor of 1.
    pub fn step(&mut self, dist: f64) -> f64 {
        let factor = if self.last_dist.is_finite() && self.last_dist > 0.0 && dist.is_finite() {
            dist / self.last_dist
        } else {
            1.0
        };
        self.last_dist = dist;
        factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_distance_doubles_factor() {
        let mut p = PinchSession::begin(100.0);
        assert_eq!(p.step(200.0), 2.0);
    }

    #[test]
    fn factor_is_incremental_not_cumulative() {
        let mut p = PinchSession::begin(100.0);
        assert_eq!(p.step(150.0), 1.5);
        // next step is relative to 150, not 100
        assert_eq!(p.step(150.0), 1.0);
        assert!((p.step(75.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_prior_distance_is_no_op() {
        let mut p = PinchSession::begin(0.0);
        assert_eq!(p.step(120.0), 1.0);
        // recovers once a real distance is recorded
        assert_eq!(p.step(240.0), 2.0);
    }

    #[test]
    fn non_finite_distance_is_no_op() {
        let mut p = PinchSession::begin(f64::NAN);
        assert_eq!(p.step(100.0), 1.0);
        assert_eq!(p.step(f64::INFINITY), 1.0);
        assert_eq!(p.step(100.0), 1.0);
        assert_eq!(p.step(50.0), 0.5);
    }
}
