//! Simulated loading and upload progress.
//!
//! Latency effects (a flat delay before content, a 10%-per-step upload bar)
//! are modeled as host-driven tickers rather than wall-clock timers: the
//! client advances them explicitly, cancellation is first-class, and a
//! dropped ticker simply ceases to exist.

/// Gates content behind a fixed number of ticks (a flat "loading" delay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    remaining: u32,
}

impl LoadingGate {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Advance one tick. Returns true once the gate is open.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_open()
    }

    pub fn is_open(&self) -> bool {
        self.remaining == 0
    }
}

/// Stepped upload progress: 10% per tick toward 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicker {
    percent: u8,
    cancelled: bool,
}

pub const UPLOAD_STEP: u8 = 10;

impl Default for UploadTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadTicker {
    pub fn new() -> Self {
        Self {
            percent: 0,
            cancelled: false,
        }
    }

    /// Advance one step. Cancelled or completed tickers do not move.
    pub fn tick(&mut self) -> u8 {
        if !self.cancelled {
            self.percent = self.percent.saturating_add(UPLOAD_STEP).min(100);
        }
        self.percent
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100 && !self.cancelled
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
