#![forbid(unsafe_code)]

//! Delayed visibility state machine.
//!
//! [`VisibilityController`] manages one boolean visibility flag through
//! debounced show/hide requests with mutual cancellation. Two delays govern
//! the transitions: a show delay (a held hover must outlast it before the
//! tooltip surfaces) and a hide delay (a brief pointer exit does not flicker
//! the tooltip away).
//!
//! The controller is deadline-based rather than timer-handle-based: it
//! stores at most one pending deadline and the host advances it with
//! [`tick`](VisibilityController::tick) from its event loop. Cancelling a
//! pending transition replaces the state outright, so a cancelled deadline
//! can never fire later — there is no race between cancellation and expiry.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use web_time::Instant;
//! use helix_widgets::visibility::{VisibilityController, VisibilityEvent};
//!
//! let mut ctl = VisibilityController::new();
//! let start = Instant::now();
//! ctl.request_show(start);
//! assert!(!ctl.is_visible());
//!
//! // A tick past the show deadline surfaces it, exactly once.
//! let shown = ctl.tick(start + Duration::from_millis(250));
//! assert_eq!(shown, Some(VisibilityEvent::Shown));
//! assert!(ctl.is_visible());
//! ```

use std::time::Duration;

use web_time::Instant;

/// Default delay before a requested show takes effect.
pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_millis(200);

/// Default delay before a requested hide takes effect.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(100);

/// Notification of a completed visibility transition.
///
/// Fires once per transition: `Shown` only when the flag actually flips to
/// visible, `Hidden` only when a previously-shown session closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    Shown,
    Hidden,
}

/// Public view of the controller's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Hidden,
    PendingShow,
    Visible,
    PendingHide,
}

/// Internal state; pending phases carry their deadline so the deadline dies
/// with the phase on cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    PendingShow { deadline: Instant },
    Visible,
    PendingHide { deadline: Instant },
}

/// One visibility session: the flag plus at most one pending deadline.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    show_delay: Duration,
    hide_delay: Duration,
    disabled: bool,
    phase: Phase,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityController {
    /// Create a controller with the default delays (200 ms / 100 ms).
    pub fn new() -> Self {
        Self::with_delays(DEFAULT_SHOW_DELAY, DEFAULT_HIDE_DELAY)
    }

    /// Create a controller with explicit show/hide delays.
    pub fn with_delays(show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            show_delay,
            hide_delay,
            disabled: false,
            phase: Phase::Hidden,
        }
    }

    pub fn show_delay(&self) -> Duration {
        self.show_delay
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// Change the show delay; affects deadlines armed after this call.
    pub fn set_show_delay(&mut self, delay: Duration) {
        self.show_delay = delay;
    }

    /// Change the hide delay; affects deadlines armed after this call.
    pub fn set_hide_delay(&mut self, delay: Duration) {
        self.hide_delay = delay;
    }

    /// Suppress future show requests. Hide requests are unaffected.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> VisibilityState {
        match self.phase {
            Phase::Hidden => VisibilityState::Hidden,
            Phase::PendingShow { .. } => VisibilityState::PendingShow,
            Phase::Visible => VisibilityState::Visible,
            Phase::PendingHide { .. } => VisibilityState::PendingHide,
        }
    }

    /// Whether the flag currently reads as shown.
    ///
    /// `PendingHide` still counts: the session stays on screen until the
    /// hide deadline elapses.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible | Phase::PendingHide { .. })
    }

    /// The deadline of the pending transition, if one is armed.
    ///
    /// Hosts with their own schedulers can use this to sleep until the next
    /// interesting instant instead of polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::PendingShow { deadline } | Phase::PendingHide { deadline } => Some(deadline),
            Phase::Hidden | Phase::Visible => None,
        }
    }

    /// Request the session become visible.
    ///
    /// From `Hidden` this arms the show deadline; from `PendingHide` it
    /// cancels the pending hide (the session never left the screen, so no
    /// duplicate `Shown` will fire). Already-showing and already-pending
    /// states are no-ops, as is any request while disabled.
    pub fn request_show(&mut self, now: Instant) {
        if self.disabled {
            return;
        }
        match self.phase {
            Phase::Hidden => {
                self.phase = Phase::PendingShow {
                    deadline: now + self.show_delay,
                };
                tracing::trace!(delay_ms = self.show_delay.as_millis() as u64, "show armed");
            }
            Phase::PendingHide { .. } => {
                self.phase = Phase::Visible;
                tracing::trace!("pending hide cancelled");
            }
            Phase::PendingShow { .. } | Phase::Visible => {}
        }
    }

    /// Request the session become hidden.
    ///
    /// From `Visible` this arms the hide deadline; from `PendingShow` it
    /// cancels the pending show (the session never surfaced, so nothing is
    /// emitted). Hidden and already-pending states are no-ops.
    pub fn request_hide(&mut self, now: Instant) {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::PendingHide {
                    deadline: now + self.hide_delay,
                };
                tracing::trace!(delay_ms = self.hide_delay.as_millis() as u64, "hide armed");
            }
            Phase::PendingShow { .. } => {
                self.phase = Phase::Hidden;
                tracing::trace!("pending show cancelled");
            }
            Phase::Hidden | Phase::PendingHide { .. } => {}
        }
    }

    /// Hide immediately, cancelling any pending transition.
    ///
    /// Emits `Hidden` only when the session was actually showing (`Visible`
    /// or `PendingHide`); from `Hidden`/`PendingShow` nothing is emitted.
    /// Idempotent: a second call is a silent no-op.
    pub fn force_hide(&mut self) -> Option<VisibilityEvent> {
        let was_shown = self.is_visible();
        self.phase = Phase::Hidden;
        was_shown.then_some(VisibilityEvent::Hidden)
    }

    /// Advance the state machine to `now`, firing an elapsed deadline.
    ///
    /// Returns the transition that completed, if any. Call from the host
    /// loop; a deadline that was cancelled before this call no longer
    /// exists and cannot fire.
    pub fn tick(&mut self, now: Instant) -> Option<VisibilityEvent> {
        match self.phase {
            Phase::PendingShow { deadline } if now >= deadline => {
                self.phase = Phase::Visible;
                Some(VisibilityEvent::Shown)
            }
            Phase::PendingHide { deadline } if now >= deadline => {
                self.phase = Phase::Hidden;
                Some(VisibilityEvent::Hidden)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn controller() -> (VisibilityController, Instant) {
        (
            VisibilityController::with_delays(100 * MS, 100 * MS),
            Instant::now(),
        )
    }

    #[test]
    fn defaults() {
        let ctl = VisibilityController::new();
        assert_eq!(ctl.show_delay(), Duration::from_millis(200));
        assert_eq!(ctl.hide_delay(), Duration::from_millis(100));
        assert_eq!(ctl.state(), VisibilityState::Hidden);
        assert!(!ctl.is_visible());
        assert!(!ctl.is_disabled());
    }

    #[test]
    fn show_fires_after_delay() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        assert_eq!(ctl.state(), VisibilityState::PendingShow);
        assert!(!ctl.is_visible());

        // Not yet.
        assert_eq!(ctl.tick(t0 + 99 * MS), None);
        // At the deadline, exactly once.
        assert_eq!(ctl.tick(t0 + 100 * MS), Some(VisibilityEvent::Shown));
        assert_eq!(ctl.state(), VisibilityState::Visible);
        assert_eq!(ctl.tick(t0 + 200 * MS), None);
    }

    #[test]
    fn hide_before_show_deadline_cancels_silently() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        ctl.request_hide(t0 + 50 * MS);
        assert_eq!(ctl.state(), VisibilityState::Hidden);

        // The cancelled deadline can never fire.
        assert_eq!(ctl.tick(t0 + 500 * MS), None);
        assert!(!ctl.is_visible());
    }

    #[test]
    fn repeated_show_requests_keep_the_original_deadline() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        let deadline = ctl.next_deadline().unwrap();
        ctl.request_show(t0 + 50 * MS);
        assert_eq!(ctl.next_deadline(), Some(deadline));
    }

    #[test]
    fn show_while_visible_is_noop() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        assert_eq!(ctl.tick(t0 + 100 * MS), Some(VisibilityEvent::Shown));
        ctl.request_show(t0 + 150 * MS);
        assert_eq!(ctl.state(), VisibilityState::Visible);
        assert_eq!(ctl.tick(t0 + 500 * MS), None); // no second Shown
    }

    #[test]
    fn hide_fires_after_delay() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        ctl.tick(t0 + 100 * MS);
        ctl.request_hide(t0 + 200 * MS);
        assert_eq!(ctl.state(), VisibilityState::PendingHide);
        assert!(ctl.is_visible(), "still on screen until the deadline");

        assert_eq!(ctl.tick(t0 + 299 * MS), None);
        assert_eq!(ctl.tick(t0 + 300 * MS), Some(VisibilityEvent::Hidden));
        assert_eq!(ctl.state(), VisibilityState::Hidden);
    }

    #[test]
    fn show_during_pending_hide_cancels_without_duplicate_shown() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        ctl.tick(t0 + 100 * MS);
        ctl.request_hide(t0 + 200 * MS);
        ctl.request_show(t0 + 250 * MS);

        assert_eq!(ctl.state(), VisibilityState::Visible);
        // Neither the cancelled hide nor a duplicate show fires.
        assert_eq!(ctl.tick(t0 + 500 * MS), None);
    }

    #[test]
    fn hide_while_hidden_is_noop() {
        let (mut ctl, t0) = controller();
        ctl.request_hide(t0);
        assert_eq!(ctl.state(), VisibilityState::Hidden);
        assert_eq!(ctl.next_deadline(), None);
    }

    #[test]
    fn repeated_hide_requests_keep_the_original_deadline() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        ctl.tick(t0 + 100 * MS);
        ctl.request_hide(t0 + 200 * MS);
        let deadline = ctl.next_deadline().unwrap();
        ctl.request_hide(t0 + 250 * MS);
        assert_eq!(ctl.next_deadline(), Some(deadline));
    }

    #[test]
    fn force_hide_from_visible_emits_once() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        ctl.tick(t0 + 100 * MS);

        assert_eq!(ctl.force_hide(), Some(VisibilityEvent::Hidden));
        // Idempotent.
        assert_eq!(ctl.force_hide(), None);
        assert_eq!(ctl.state(), VisibilityState::Hidden);
    }

    #[test]
    fn force_hide_cancels_pending_hide() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        ctl.tick(t0 + 100 * MS);
        ctl.request_hide(t0 + 200 * MS);

        assert_eq!(ctl.force_hide(), Some(VisibilityEvent::Hidden));
        // The pending hide deadline is gone; no second emission.
        assert_eq!(ctl.tick(t0 + 600 * MS), None);
    }

    #[test]
    fn force_hide_from_pending_show_emits_nothing() {
        let (mut ctl, t0) = controller();
        ctl.request_show(t0);
        assert_eq!(ctl.force_hide(), None);
        assert_eq!(ctl.tick(t0 + 500 * MS), None);
    }

    #[test]
    fn disabled_suppresses_show_only() {
        let (mut ctl, t0) = controller();
        ctl.set_disabled(true);
        ctl.request_show(t0);
        assert_eq!(ctl.state(), VisibilityState::Hidden);

        // Hide paths keep working while disabled.
        ctl.set_disabled(false);
        ctl.request_show(t0);
        ctl.tick(t0 + 100 * MS);
        ctl.set_disabled(true);
        ctl.request_hide(t0 + 200 * MS);
        assert_eq!(ctl.tick(t0 + 300 * MS), Some(VisibilityEvent::Hidden));
    }

    #[test]
    fn zero_delays_fire_on_next_tick() {
        let mut ctl = VisibilityController::with_delays(Duration::ZERO, Duration::ZERO);
        let t0 = Instant::now();
        ctl.request_show(t0);
        assert_eq!(ctl.tick(t0), Some(VisibilityEvent::Shown));
        ctl.request_hide(t0);
        assert_eq!(ctl.tick(t0), Some(VisibilityEvent::Hidden));
    }

    #[test]
    fn at_most_one_deadline_exists() {
        let (mut ctl, t0) = controller();
        assert_eq!(ctl.next_deadline(), None);
        ctl.request_show(t0);
        assert!(ctl.next_deadline().is_some());
        ctl.tick(t0 + 100 * MS);
        assert_eq!(ctl.next_deadline(), None);
        ctl.request_hide(t0 + 200 * MS);
        assert!(ctl.next_deadline().is_some());
        ctl.force_hide();
        assert_eq!(ctl.next_deadline(), None);
    }
}
