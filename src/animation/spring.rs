use crate::foundation::error::{InvitationError, InvitationResult};

/// Residual displacement (as a fraction of the travelled distance) below which a spring rests.
pub const REST_EPSILON: f64 = 1e-3;

/// Interpolation timing for one element.
///
/// `tension` and `friction` parameterize a unit-mass damped spring; `delay_ms` is measured from the
/// moment the active panel changed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingConfig {
    /// Spring stiffness, must be > 0.
    pub tension: f64,
    /// Damping coefficient, must be >= 0.
    pub friction: f64,
    /// Start offset after the panel change.
    #[serde(default)]
    pub delay_ms: u64,
    /// Restart from the inactive pose whenever the owning panel is entered.
    #[serde(default = "default_reset_on_entry")]
    pub reset_on_entry: bool,
}

fn default_reset_on_entry() -> bool {
    true
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tension: 170.0,
            friction: 26.0,
            delay_ms: 0,
            reset_on_entry: true,
        }
    }
}

impl TimingConfig {
    /// Spring with the given constants, no delay, resetting on entry.
    pub fn spring(tension: f64, friction: f64) -> Self {
        Self {
            tension,
            friction,
            delay_ms: 0,
            reset_on_entry: true,
        }
    }

    /// Builder-style delay override.
    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Builder-style reset override.
    pub fn with_reset(mut self, reset_on_entry: bool) -> Self {
        self.reset_on_entry = reset_on_entry;
        self
    }

    pub fn validate(&self) -> InvitationResult<()> {
        if !(self.tension.is_finite() && self.tension > 0.0) {
            return Err(InvitationError::validation("spring tension must be > 0"));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(InvitationError::validation("spring friction must be >= 0"));
        }
        Ok(())
    }

    /// Fraction of the way from `from` to `to` after `elapsed_secs` of motion.
    ///
    /// 0 at rest-at-start, approaches 1. Underdamped springs overshoot past 1.
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        1.0 - self.residual(elapsed_secs)
    }

    /// True once the remaining displacement has decayed below [`REST_EPSILON`].
    pub fn is_settled(&self, elapsed_secs: f64) -> bool {
        self.residual(elapsed_secs).abs() < REST_EPSILON
            && self.residual_envelope(elapsed_secs) < REST_EPSILON
    }

    // Normalized displacement r(t) of x'' = -k x - c x' with x(0) = 1, x'(0) = 0.
    fn residual(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let w0 = self.tension.sqrt();
        let zeta = self.friction / (2.0 * w0);

        if (zeta - 1.0).abs() < 1e-9 {
            return (-w0 * t).exp() * (1.0 + w0 * t);
        }
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            return decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin());
        }

        let root = (zeta * zeta - 1.0).sqrt();
        let s1 = -w0 * (zeta - root);
        let s2 = -w0 * (zeta + root);
        (s2 * (s1 * t).exp() - s1 * (s2 * t).exp()) / (s2 - s1)
    }

    // Upper bound on |r(t)| from here on; the oscillating term can cross zero before it rests.
    fn residual_envelope(&self, t: f64) -> f64 {
        let w0 = self.tension.sqrt();
        let zeta = self.friction / (2.0 * w0);
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let amp = (1.0 + (zeta * w0 / wd).powi(2)).sqrt();
            amp * (-zeta * w0 * t.max(0.0)).exp()
        } else {
            self.residual(t).abs()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
