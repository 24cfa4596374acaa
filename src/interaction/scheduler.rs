use serde::{Deserialize, Serialize};
use tracing::trace;

/// Delay between an overlay change and its repaint.
pub const OVERLAY_REDRAW_DELAY_MS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawState {
    Idle,
    Scheduled { due_ms: u64 },
}

/// Single-slot debounce for overlay repaints on an explicit clock.
///
/// Requests while one is pending keep the existing deadline, so bursts of
/// highlight or selection changes coalesce into one repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedrawScheduler {
    state: RedrawState,
    now_ms: u64,
    delay_ms: u64,
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new(OVERLAY_REDRAW_DELAY_MS)
    }
}

impl RedrawScheduler {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            state: RedrawState::Idle,
            now_ms: 0,
            delay_ms,
        }
    }

    #[must_use]
    pub fn state(&self) -> RedrawState {
        self.state
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, RedrawState::Scheduled { .. })
    }

    /// Schedules a repaint; returns `false` when one was already pending.
    pub fn request(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        let due_ms = self.now_ms.saturating_add(self.delay_ms);
        trace!(due_ms, "overlay redraw scheduled");
        self.state = RedrawState::Scheduled { due_ms };
        true
    }

    pub fn cancel(&mut self) {
        self.state = RedrawState::Idle;
    }

    /// Moves the clock forward; returns `true` when the pending repaint is due.
    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        match self.state {
            RedrawState::Scheduled { due_ms } if self.now_ms >= due_ms => {
                self.state = RedrawState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Fires a pending repaint immediately.
    pub fn flush(&mut self) -> bool {
        let pending = self.is_pending();
        self.state = RedrawState::Idle;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::{RedrawScheduler, RedrawState};

    #[test]
    fn requests_coalesce_and_keep_the_first_deadline() {
        let mut scheduler = RedrawScheduler::default();
        assert!(scheduler.request());
        assert!(!scheduler.advance(20));
        assert!(!scheduler.request());
        assert_eq!(scheduler.state(), RedrawState::Scheduled { due_ms: 30 });
        assert!(scheduler.advance(10));
        assert_eq!(scheduler.state(), RedrawState::Idle);
    }
}
