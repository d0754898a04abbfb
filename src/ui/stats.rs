// SPDX-License-Identifier: MPL-2.0
//! Network statistics banner with a one-second count-up.
//!
//! The count-up restarts every time the network screen is entered.
//! Progress is advanced on host ticks, so the displayed values are a
//! pure function of elapsed time.

use crate::catalog;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{column, text, Row};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// How long the count-up takes to reach the target values.
pub const COUNT_UP_DURATION: Duration = Duration::from_secs(1);

/// Count-up animation state.
#[derive(Debug, Clone, Copy)]
pub struct State {
    started_at: Instant,
    progress: f64,
}

impl State {
    /// Starts a fresh count-up at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            progress: 0.0,
        }
    }

    /// Restarts the animation from zero.
    pub fn restart(&mut self, now: Instant) {
        self.started_at = now;
        self.progress = 0.0;
    }

    /// Advances the animation; returns `true` while it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.progress >= 1.0 {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        self.progress = (elapsed.as_secs_f64() / COUNT_UP_DURATION.as_secs_f64()).min(1.0);
        self.progress < 1.0
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.progress < 1.0
    }

    /// Current displayed value for a target, never exceeding it.
    #[must_use]
    pub fn value_for(&self, target: f64) -> f64 {
        target * self.progress
    }
}

pub fn view<'a, Message: 'a>(state: &State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut cells = Row::new().spacing(spacing::XL);
    for stat in catalog::network_stats() {
        let value = state.value_for(stat.value);
        let display = format!("{}{}{}", stat.prefix, format_value(value, stat.value), stat.suffix);
        cells = cells.push(
            column![
                text(display)
                    .size(typography::DISPLAY)
                    .color(palette::BRAND_500),
                text(i18n.tr(stat.label_key)).size(typography::CAPTION),
            ]
            .spacing(spacing::XXS),
        );
    }
    cells.width(Length::Shrink).into()
}

/// Formats a count-up value, matching the precision of its target:
/// fractional targets keep one decimal, whole targets render with
/// thousands separators.
fn format_value(value: f64, target: f64) -> String {
    if target.fract() != 0.0 {
        return format!("{value:.1}");
    }
    let whole = value as i64;
    let mut digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            rest
        } else {
            format!("{rest},{grouped}")
        };
    }
    if grouped.is_empty() {
        digits
    } else {
        format!("{digits},{grouped}")
    }
}
