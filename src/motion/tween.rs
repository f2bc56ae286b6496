use super::easing::Easing;

/// Interpolation between two numbers over a fixed wall-clock duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`. A zero-length tween is complete at once.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_hits_both_ends() {
        let tween = Tween::new(0.0, 30.0, 2000.0);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(2000.0), 30.0);
        assert_eq!(tween.value_at(5000.0), 30.0);
        assert!(tween.is_complete(2000.0));
        assert!(!tween.is_complete(1999.0));
    }

    #[test]
    fn test_linear_midpoint() {
        let tween = Tween::new(10.0, 20.0, 1000.0).with_easing(Easing::Linear);
        assert!((tween.value_at(500.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tween = Tween::new(0.0, 7.0, 0.0);
        assert!(tween.is_complete(0.0));
        assert_eq!(tween.value_at(0.0), 7.0);
    }
}
