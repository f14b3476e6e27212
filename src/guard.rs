//! Interrupt penalty guard.
//!
//! Two-state machine (Armed / Penalizing) shared between the signal
//! handler thread and the foreground session. The handler only calls
//! [`PenaltyGuard::notify_interrupt`]; the foreground loop checks
//! [`PenaltyGuard::is_penalizing`] at its checkpoints, serves the
//! cooldown, and re-arms. Interrupts landing while already penalizing
//! or while suppressed are dropped outright, so cooldowns never stack.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

const STATE_ARMED: u8 = 0;
const STATE_PENALIZING: u8 = 1;

/// Guard state as seen by the foreground loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Next interrupt trips a penalty.
    Armed,
    /// A penalty is pending or being served; interrupts are ignored.
    Penalizing,
}

/// Thread-safe penalty state.
///
/// Lives in a `static` so the process-wide signal handler can reach it.
pub struct PenaltyGuard {
    /// Current state (STATE_ARMED / STATE_PENALIZING).
    state: AtomicU8,

    /// True while playback is in progress; interrupts are discarded.
    suppressed: AtomicBool,

    /// Total penalties tripped since start (never cleared).
    trips: AtomicU32,
}

impl PenaltyGuard {
    /// Create a new guard in the Armed state.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(STATE_ARMED),
            suppressed: AtomicBool::new(false),
            trips: AtomicU32::new(0),
        }
    }

    /// Entry point for the signal handler.
    ///
    /// Armed → Penalizing on the first interrupt. Interrupts received
    /// while suppressed or while already penalizing are dropped.
    pub fn notify_interrupt(&self) {
        if self.suppressed.load(Ordering::Acquire) {
            tracing::debug!("interrupt discarded during playback");
            return;
        }

        if self
            .state
            .compare_exchange(
                STATE_ARMED,
                STATE_PENALIZING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
        {
            self.trips.fetch_add(1, Ordering::Relaxed);
            tracing::info!(trips = self.trips(), "interrupt tripped penalty");
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> GuardState {
        match self.state.load(Ordering::Acquire) {
            STATE_PENALIZING => GuardState::Penalizing,
            _ => GuardState::Armed,
        }
    }

    /// True if a penalty is pending or being served.
    #[inline]
    pub fn is_penalizing(&self) -> bool {
        self.state() == GuardState::Penalizing
    }

    /// Return to Armed after the cooldown has been served.
    #[inline]
    pub fn rearm(&self) {
        self.state.store(STATE_ARMED, Ordering::Release);
    }

    /// Total penalties tripped since start.
    #[inline]
    pub fn trips(&self) -> u32 {
        self.trips.load(Ordering::Relaxed)
    }

    /// Suppress interrupt handling for the lifetime of the returned
    /// guard. Used around playback; restored on drop even if playback
    /// errors.
    pub fn suspend(&self) -> SuspendGuard<'_> {
        self.suppressed.store(true, Ordering::Release);
        SuspendGuard { guard: self }
    }

    #[cfg(test)]
    fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::Acquire)
    }
}

impl Default for PenaltyGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle restoring interrupt handling when dropped.
pub struct SuspendGuard<'a> {
    guard: &'a PenaltyGuard,
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.guard.suppressed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_interrupt_trips_once() {
        let guard = PenaltyGuard::new();

        assert_eq!(guard.state(), GuardState::Armed);
        assert_eq!(guard.trips(), 0);

        guard.notify_interrupt();

        assert_eq!(guard.state(), GuardState::Penalizing);
        assert_eq!(guard.trips(), 1);

        guard.rearm();
        assert_eq!(guard.state(), GuardState::Armed);
        assert_eq!(guard.trips(), 1); // Count preserved
    }

    #[test]
    fn test_interrupt_during_penalty_ignored() {
        let guard = PenaltyGuard::new();

        guard.notify_interrupt();
        guard.notify_interrupt();
        guard.notify_interrupt();

        // No stacking: one trip, one cooldown.
        assert_eq!(guard.trips(), 1);
        assert_eq!(guard.state(), GuardState::Penalizing);

        guard.rearm();
        guard.notify_interrupt();
        assert_eq!(guard.trips(), 2);
    }

    #[test]
    fn test_suspend_discards_interrupts() {
        let guard = PenaltyGuard::new();

        {
            let _suspend = guard.suspend();
            assert!(guard.is_suppressed());

            guard.notify_interrupt();
            assert_eq!(guard.state(), GuardState::Armed);
            assert_eq!(guard.trips(), 0);
        }

        // Restored on drop: next interrupt trips normally.
        assert!(!guard.is_suppressed());
        guard.notify_interrupt();
        assert_eq!(guard.state(), GuardState::Penalizing);
    }
}
