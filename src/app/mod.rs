// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (network map, rotating
//! sections, localization, settings) and translates messages into side
//! effects like config persistence. Policy decisions (window size,
//! rotation timing bounds, persistence format) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog;
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::faq;
use crate::ui::highlights;
use crate::ui::map;
use crate::ui::navbar;
use crate::ui::rotator::Rotator;
use crate::ui::stats;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    pub config: Config,
    screen: Screen,
    map: map::State,
    services_rotator: Rotator,
    highlights: highlights::State,
    faq: faq::State,
    stats: stats::State,
    /// Which navbar dropdown is open, if any.
    open_menu: Option<navbar::Menu>,
    /// Draft text for the rotation tick setting.
    pub rotation_tick_input: String,
    /// Draft text for the rotation resume setting.
    pub rotation_resume_input: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("selected_city", &self.map.selected_city())
            .finish()
    }
}

/// Clamps persisted rotation timings into the supported range so a
/// hand-edited config cannot stall or thrash the rotators.
fn clamp_tick_secs(value: u64) -> u64 {
    value.clamp(config::MIN_ROTATION_TICK_SECS, config::MAX_ROTATION_TICK_SECS)
}

fn clamp_resume_secs(value: u64) -> u64 {
    value.clamp(
        config::MIN_ROTATION_RESUME_SECS,
        config::MAX_ROTATION_RESUME_SECS,
    )
}

/// Effective rotation timing from a config, with defaults and clamping.
fn rotation_timing(config: &Config) -> (Duration, Duration) {
    let tick = clamp_tick_secs(
        config
            .rotation
            .tick_secs
            .unwrap_or(config::DEFAULT_ROTATION_TICK_SECS),
    );
    let resume = clamp_resume_secs(
        config
            .rotation
            .resume_secs
            .unwrap_or(config::DEFAULT_ROTATION_RESUME_SECS),
    );
    (Duration::from_secs(tick), Duration::from_secs(resume))
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let now = Instant::now();
        let (tick, resume) = rotation_timing(&config);
        Self {
            i18n: I18n::default(),
            config,
            screen: Screen::Network,
            map: map::State::new(catalog::atm_locations()),
            services_rotator: Rotator::new(catalog::service_panels().len(), tick, resume, now),
            highlights: highlights::State::new(tick, resume, now),
            faq: faq::State::new(),
            stats: stats::State::new(now),
            open_menu: None,
            rotation_tick_input: tick.as_secs().to_string(),
            rotation_resume_input: resume.as_secs().to_string(),
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let now = Instant::now();
        let (tick, resume) = rotation_timing(&config);

        let app = App {
            i18n,
            services_rotator: Rotator::new(catalog::service_panels().len(), tick, resume, now),
            highlights: highlights::State::new(tick, resume, now),
            stats: stats::State::new(now),
            rotation_tick_input: tick.as_secs().to_string(),
            rotation_resume_input: resume.as_secs().to_string(),
            config,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.config.general.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.screen, self.stats.is_running()),
            subscription::create_escape_subscription(),
        ])
    }

    #[cfg(test)]
    pub(crate) fn screen(&self) -> Screen {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_timing_clamps_out_of_range_config() {
        let mut config = Config::default();
        config.rotation.tick_secs = Some(1);
        config.rotation.resume_secs = Some(10_000);
        let (tick, resume) = rotation_timing(&config);
        assert_eq!(tick.as_secs(), config::MIN_ROTATION_TICK_SECS);
        assert_eq!(resume.as_secs(), config::MAX_ROTATION_RESUME_SECS);
    }

    #[test]
    fn rotation_timing_defaults_when_unset() {
        let (tick, resume) = rotation_timing(&Config::default());
        assert_eq!(tick.as_secs(), config::DEFAULT_ROTATION_TICK_SECS);
        assert_eq!(resume.as_secs(), config::DEFAULT_ROTATION_RESUME_SECS);
    }

    #[test]
    fn default_app_starts_on_the_network_screen() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Network);
        assert!(app.map.selected_city().is_none());
    }
}
