//! One-shot entrance animation for page sections.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    /// Never been on screen.
    Hidden,
    Entering { progress: f32 },
    Shown,
}

/// Latches the first time a section comes into view and never resets.
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    timer: Option<EffectTimer>,
}

impl RevealLatch {
    /// Starts the entrance effect. Returns `true` only on the first call.
    pub fn trigger(&mut self, duration: Duration) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(EffectTimer::new(duration));
        true
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(timer) = self.timer.as_mut() {
            timer.advance(delta);
        }
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        match self.timer.as_ref().map(EffectTimer::phase) {
            None => RevealPhase::Hidden,
            Some(AnimPhase::Running { progress }) => RevealPhase::Entering { progress },
            Some(AnimPhase::Completed) => RevealPhase::Shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{RevealLatch, RevealPhase};

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::default();
        assert_eq!(latch.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn triggers_once() {
        let mut latch = RevealLatch::default();
        assert!(latch.trigger(Duration::from_millis(200)));
        latch.advance(Duration::from_millis(150));
        assert!(!latch.trigger(Duration::from_millis(200)), "second trigger must not restart");
        assert!(matches!(latch.phase(), RevealPhase::Entering { progress } if progress > 0.7));
        latch.advance(Duration::from_millis(100));
        assert_eq!(latch.phase(), RevealPhase::Shown);
    }

    #[test]
    fn zero_duration_reveals_immediately() {
        let mut latch = RevealLatch::default();
        latch.trigger(Duration::ZERO);
        assert_eq!(latch.phase(), RevealPhase::Shown);
    }

    #[test]
    fn advance_before_trigger_is_ignored() {
        let mut latch = RevealLatch::default();
        latch.advance(Duration::from_secs(1));
        latch.trigger(Duration::from_millis(100));
        assert!(matches!(latch.phase(), RevealPhase::Entering { .. }));
    }
}
