//! Pausable session clock

use std::time::{Duration, Instant};

/// Wall-clock time since the session started, minus any paused spans.
///
/// The `*_at` variants take the current instant explicitly; the plain ones
/// read `Instant::now()`.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::started_at(Instant::now())
    }
}

impl SessionClock {
    pub fn started_at(now: Instant) -> Self {
        Self {
            started: now,
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Freeze the clock. No-op if already paused.
    pub fn pause_at(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resume from the frozen value. No-op if running.
    pub fn resume_at(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(paused_at);
        }
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let end = self.paused_at.unwrap_or(now);
        end.saturating_duration_since(self.started)
            .saturating_sub(self.paused_total)
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// Whole seconds elapsed
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}
