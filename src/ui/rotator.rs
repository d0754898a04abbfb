// SPDX-License-Identifier: MPL-2.0
//! Auto-advancing panel selector shared by the services tabs and the
//! highlights section.
//!
//! The selector cycles through a fixed set of panels on a timer. An
//! explicit selection pins the index and suspends auto-advance until a
//! resume deadline passes; hovering the content area suspends it for the
//! duration of the hover only. All deadlines are plain `Instant` values
//! compared on host ticks, so tests can drive the state machine with a
//! fake clock by passing explicit `now` values.

use std::time::{Duration, Instant};

/// State machine driving one rotating panel group.
///
/// `active` is always a valid index into the panel list; advancing wraps
/// modulo the panel count and explicit selections are clamped into range.
#[derive(Debug, Clone)]
pub struct Rotator {
    active: usize,
    panel_count: usize,
    tick_interval: Duration,
    resume_delay: Duration,
    /// When the next automatic advance is due.
    next_advance: Instant,
    /// Set while auto-advance is suspended by an explicit selection.
    /// Re-arming replaces the deadline; clearing it is idempotent.
    resume_at: Option<Instant>,
    /// Set while the pointer is over the content area.
    hovered: bool,
}

impl Rotator {
    /// Creates a selector over `panel_count` panels, starting at index 0
    /// with auto-advance running.
    #[must_use]
    pub fn new(panel_count: usize, tick_interval: Duration, resume_delay: Duration, now: Instant) -> Self {
        Self {
            active: 0,
            panel_count,
            tick_interval,
            resume_delay,
            next_advance: now + tick_interval,
            resume_at: None,
            hovered: false,
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Whether auto-advance is currently suspended by an explicit selection.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.resume_at.is_some()
    }

    /// Replaces both timing parameters, keeping the current index and mode.
    pub fn set_timing(&mut self, tick_interval: Duration, resume_delay: Duration, now: Instant) {
        self.tick_interval = tick_interval;
        self.resume_delay = resume_delay;
        self.next_advance = now + tick_interval;
    }

    /// Pins the active panel and suspends auto-advance until `resume_delay`
    /// has elapsed without further selections.
    ///
    /// Out-of-range indices are clamped to the last panel. Selecting while
    /// already paused replaces the pending resume deadline rather than
    /// stacking a second one.
    pub fn select(&mut self, index: usize, now: Instant) {
        if self.panel_count == 0 {
            return;
        }
        self.active = index.min(self.panel_count - 1);
        self.resume_at = Some(now + self.resume_delay);
    }

    /// Marks the content area as hovered or not.
    ///
    /// Hovering suspends auto-advance immediately; leaving re-enables it
    /// with a full tick interval before the next advance, independent of
    /// the explicit-selection resume deadline.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered && !hovered {
            self.next_advance = now + self.tick_interval;
        }
        self.hovered = hovered;
    }

    /// Cancels a pending resume deadline. Safe to call when none is armed.
    pub fn cancel_resume(&mut self) {
        self.resume_at = None;
    }

    /// Processes a host tick, returning `true` if the active index changed.
    ///
    /// While paused by a selection, ticks before the resume deadline are
    /// ignored; once the deadline passes, auto-advance resumes from the
    /// current index with a full tick interval until the next change.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.panel_count < 2 || self.hovered {
            return false;
        }

        if let Some(resume_at) = self.resume_at {
            if now < resume_at {
                return false;
            }
            self.resume_at = None;
            self.next_advance = now + self.tick_interval;
            return false;
        }

        if now >= self.next_advance {
            self.active = (self.active + 1) % self.panel_count;
            self.next_advance = now + self.tick_interval;
            return true;
        }
        false
    }
}
