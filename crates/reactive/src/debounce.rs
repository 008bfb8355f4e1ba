//! Trailing-edge input debouncer.
//!
//! Raw per-keystroke text arrives through `on_input`; a settled value is
//! released only after the quiet period elapses with no further input.
//! Time is an explicit tick counter advanced by the host, so the timer is
//! deterministic and cancellation leaks nothing: after `teardown` the
//! debouncer is permanently inert.

use alloc::string::{String, ToString};

/// Default quiet period, in ticks.
pub const DEFAULT_QUIET_PERIOD: u64 = 2000;

struct Pending {
    text: String,
    deadline: u64,
}

/// A trailing-edge debouncer with duplicate suppression.
///
/// Every `on_input` call discards any pending timer and starts a new one.
/// When the timer fires (the clock reaches the deadline during `advance`),
/// the latest text is emitted, unless it equals the last emitted value.
pub struct Debouncer {
    quiet_period: u64,
    now: u64,
    pending: Option<Pending>,
    last_emitted: Option<String>,
    torn_down: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Creates a debouncer with the default quiet period.
    pub fn new() -> Self {
        Self::with_quiet_period(DEFAULT_QUIET_PERIOD)
    }

    /// Creates a debouncer with a custom quiet period in ticks.
    pub fn with_quiet_period(quiet_period: u64) -> Self {
        Self {
            quiet_period,
            now: 0,
            pending: None,
            last_emitted: None,
            torn_down: false,
        }
    }

    /// Returns the configured quiet period.
    #[inline]
    pub fn quiet_period(&self) -> u64 {
        self.quiet_period
    }

    /// Returns true if a timer is currently pending.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns true if the debouncer has been torn down.
    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Accepts a raw input event, restarting the quiet-period timer.
    ///
    /// Any previously pending value is discarded. Ignored after teardown.
    pub fn on_input(&mut self, text: &str) {
        if self.torn_down {
            return;
        }
        self.pending = Some(Pending {
            text: text.to_string(),
            deadline: self.now + self.quiet_period,
        });
    }

    /// Advances the clock by `ticks` and returns the settled value if the
    /// pending timer fired.
    ///
    /// Returns `None` when nothing settled, or when the settled value
    /// equals the last emitted one (duplicate suppression).
    pub fn advance(&mut self, ticks: u64) -> Option<String> {
        if self.torn_down {
            return None;
        }
        self.now = self.now.saturating_add(ticks);

        let fired = match &self.pending {
            Some(p) if self.now >= p.deadline => true,
            _ => false,
        };
        if !fired {
            return None;
        }

        let text = self.pending.take().map(|p| p.text)?;
        if self.last_emitted.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last_emitted = Some(text.clone());
        Some(text)
    }

    /// Cancels any pending timer and makes the debouncer permanently
    /// inert. No further emissions occur; a new debouncer must be created
    /// to restart the stream.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.torn_down = true;
    }
}
