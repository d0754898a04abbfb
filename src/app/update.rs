// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All handlers take the current time from the host once per message, so
//! every component sees a consistent clock within one update.

use super::{clamp_resume_secs, clamp_tick_secs, persistence, App, Message, Screen};
use crate::ui::faq;
use crate::ui::highlights;
use crate::ui::map;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::services;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => handle_navbar(app, msg),
        Message::Map(msg) => {
            map::update(&mut app.map, msg);
            Task::none()
        }
        Message::Services(msg) => {
            services::update(msg, &mut app.services_rotator, Instant::now());
            Task::none()
        }
        Message::Highlights(msg) => {
            highlights::update(msg, &mut app.highlights, Instant::now());
            Task::none()
        }
        Message::Faq(msg) => {
            faq::update(msg, &mut app.faq);
            Task::none()
        }
        Message::SwitchScreen(screen) => {
            switch_screen(app, screen, Instant::now());
            Task::none()
        }
        Message::LanguageSelected(locale) => apply_language(app, locale),
        Message::ThemeModeSelected(mode) => apply_theme_mode(app, mode),
        Message::RotationTickInputChanged(value) => {
            app.rotation_tick_input = value;
            Task::none()
        }
        Message::RotationResumeInputChanged(value) => {
            app.rotation_resume_input = value;
            Task::none()
        }
        Message::ApplyRotationTiming => apply_rotation_timing(app, Instant::now()),
        Message::Tick(now) => {
            handle_tick(app, now);
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.open_menu) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ShowNetwork => {
            switch_screen(app, Screen::Network, Instant::now());
            Task::none()
        }
        NavbarEvent::ShowServices(panel) => {
            let now = Instant::now();
            switch_screen(app, Screen::Services, now);
            if let Some(index) = panel {
                app.services_rotator.select(index, now);
            }
            Task::none()
        }
        NavbarEvent::ShowHighlights => {
            switch_screen(app, Screen::Highlights, Instant::now());
            Task::none()
        }
        NavbarEvent::ShowFaq => {
            switch_screen(app, Screen::Faq, Instant::now());
            Task::none()
        }
        NavbarEvent::OpenSettings => {
            switch_screen(app, Screen::Settings, Instant::now());
            Task::none()
        }
        NavbarEvent::LanguageSelected(locale) => apply_language(app, locale),
    }
}

fn switch_screen(app: &mut App, screen: Screen, now: Instant) {
    let entering_network = screen == Screen::Network && app.screen != Screen::Network;
    app.screen = screen;
    app.open_menu = None;

    // The count-up replays every time the network screen is entered.
    if entering_network {
        app.stats.restart(now);
    }
}

fn apply_language(app: &mut App, locale: LanguageIdentifier) -> Task<Message> {
    app.i18n.set_locale(locale);
    app.config.general.language = Some(app.i18n.current_locale().to_string());
    persistence::persist_preferences(&app.config)
}

fn apply_theme_mode(app: &mut App, mode: ThemeMode) -> Task<Message> {
    app.config.general.theme_mode = mode;
    persistence::persist_preferences(&app.config)
}

fn apply_rotation_timing(app: &mut App, now: Instant) -> Task<Message> {
    let Ok(tick_secs) = app.rotation_tick_input.trim().parse::<u64>() else {
        app.rotation_tick_input = effective_tick_secs(app).to_string();
        return Task::none();
    };
    let Ok(resume_secs) = app.rotation_resume_input.trim().parse::<u64>() else {
        app.rotation_resume_input = effective_resume_secs(app).to_string();
        return Task::none();
    };

    let tick_secs = clamp_tick_secs(tick_secs);
    let resume_secs = clamp_resume_secs(resume_secs);
    app.rotation_tick_input = tick_secs.to_string();
    app.rotation_resume_input = resume_secs.to_string();
    app.config.rotation.tick_secs = Some(tick_secs);
    app.config.rotation.resume_secs = Some(resume_secs);

    let tick = Duration::from_secs(tick_secs);
    let resume = Duration::from_secs(resume_secs);
    app.services_rotator.set_timing(tick, resume, now);
    app.highlights.set_timing(tick, resume, now);

    persistence::persist_preferences(&app.config)
}

fn effective_tick_secs(app: &App) -> u64 {
    app.config
        .rotation
        .tick_secs
        .unwrap_or(crate::config::DEFAULT_ROTATION_TICK_SECS)
}

fn effective_resume_secs(app: &App) -> u64 {
    app.config
        .rotation
        .resume_secs
        .unwrap_or(crate::config::DEFAULT_ROTATION_RESUME_SECS)
}

fn handle_tick(app: &mut App, now: Instant) {
    match app.screen {
        Screen::Network => {
            let _ = app.stats.tick(now);
        }
        Screen::Services => {
            let _ = app.services_rotator.tick(now);
        }
        Screen::Highlights => {
            let _ = app.highlights.tick(now);
        }
        Screen::Faq | Screen::Settings => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn invalid_rotation_input_reverts_to_the_effective_value() {
        let mut app = App::default();
        app.rotation_tick_input = "not a number".to_string();
        let _ = apply_rotation_timing(&mut app, Instant::now());
        assert_eq!(
            app.rotation_tick_input,
            config::DEFAULT_ROTATION_TICK_SECS.to_string()
        );
        assert_eq!(app.config.rotation.tick_secs, None);
    }

    #[test]
    fn rotation_input_is_clamped_and_persisted_in_config() {
        let mut app = App::default();
        app.rotation_tick_input = "1".to_string();
        app.rotation_resume_input = "9999".to_string();
        let _ = apply_rotation_timing(&mut app, Instant::now());

        assert_eq!(
            app.config.rotation.tick_secs,
            Some(config::MIN_ROTATION_TICK_SECS)
        );
        assert_eq!(
            app.config.rotation.resume_secs,
            Some(config::MAX_ROTATION_RESUME_SECS)
        );
        assert_eq!(
            app.rotation_tick_input,
            config::MIN_ROTATION_TICK_SECS.to_string()
        );
    }

    #[test]
    fn language_selection_updates_config() {
        let mut app = App::default();
        let before = app.i18n.current_locale().clone();
        let _ = update(&mut app, Message::LanguageSelected(before.clone()));
        assert_eq!(app.config.general.language, Some(before.to_string()));
    }
}
