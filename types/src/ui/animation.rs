use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Eased transition of the quiz progress bar between two fill ratios.
#[derive(Debug, Clone)]
pub struct ProgressEffect {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

impl ProgressEffect {
    /// Start at `from` and ease toward `to` over `duration`. Ratios are clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            timer: EffectTimer::new(duration),
        }
    }

    /// Already at `ratio`; used when motion is reduced.
    #[must_use]
    pub fn settled(ratio: f32) -> Self {
        Self::new(ratio, ratio, Duration::ZERO)
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Current fill ratio (ease-out cubic).
    #[must_use]
    pub fn ratio(&self) -> f32 {
        let t = self.timer.progress();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
