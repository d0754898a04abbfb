// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state.

use super::{App, Message, Screen};
use crate::ui::design_tokens::spacing;
use crate::ui::faq;
use crate::ui::highlights;
use crate::ui::map;
use crate::ui::navbar::{self, Section, ViewContext as NavbarViewContext};
use crate::ui::services;
use crate::ui::settings;
use crate::ui::stats;
use iced::widget::{column, container, Column};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        open_menu: app.open_menu,
        active_section: active_section(app.screen),
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match app.screen {
        Screen::Network => view_network(app),
        Screen::Services => services::view(&app.services_rotator, &app.i18n).map(Message::Services),
        Screen::Highlights => highlights::view(&app.highlights, &app.i18n).map(Message::Highlights),
        Screen::Faq => faq::view(&app.faq, &app.i18n).map(Message::Faq),
        Screen::Settings => settings::view_settings(app),
    };

    Column::new()
        .push(navbar)
        .push(
            container(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_network(app: &App) -> Element<'_, Message> {
    let banner = container(stats::view(&app.stats, &app.i18n))
        .width(Length::Fill)
        .padding(spacing::MD)
        .center_x(Length::Fill);

    column![
        banner,
        map::view(&app.map, &app.i18n).map(Message::Map),
    ]
    .spacing(spacing::SM)
    .into()
}

fn active_section(screen: Screen) -> Section {
    match screen {
        Screen::Network => Section::Network,
        Screen::Services => Section::Services,
        Screen::Highlights => Section::Highlights,
        Screen::Faq => Section::Faq,
        Screen::Settings => Section::Settings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_renders() {
        let mut app = App::default();
        for screen in [
            Screen::Network,
            Screen::Services,
            Screen::Highlights,
            Screen::Faq,
            Screen::Settings,
        ] {
            let _ = update_screen(&mut app, screen);
            let _element = view(&app);
        }
    }

    fn update_screen(app: &mut App, screen: Screen) -> iced::Task<Message> {
        super::super::update::update(app, Message::SwitchScreen(screen))
    }
}
