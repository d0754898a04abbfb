// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with dropdown menus.
//!
//! At most one dropdown is open at a time; opening another closes the
//! first, and any navigation closes them all.

use crate::catalog;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Dropdown menus the navbar can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Services,
    Language,
}

/// Sections the navbar links to, used to highlight the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Network,
    Services,
    Highlights,
    Faq,
    Settings,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub open_menu: Option<Menu>,
    pub active_section: Section,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    MenuToggled(Menu),
    CloseMenus,
    ShowNetwork,
    ShowServices(Option<usize>),
    ShowHighlights,
    ShowFaq,
    OpenSettings,
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ShowNetwork,
    /// Navigate to services, optionally pinning a specific panel.
    ShowServices(Option<usize>),
    ShowHighlights,
    ShowFaq,
    OpenSettings,
    LanguageSelected(LanguageIdentifier),
}

/// Processes a navbar message and returns the corresponding event.
pub fn update(message: Message, open_menu: &mut Option<Menu>) -> Event {
    match message {
        Message::MenuToggled(menu) => {
            *open_menu = if *open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
            Event::None
        }
        Message::CloseMenus => {
            *open_menu = None;
            Event::None
        }
        Message::ShowNetwork => {
            *open_menu = None;
            Event::ShowNetwork
        }
        Message::ShowServices(panel) => {
            *open_menu = None;
            Event::ShowServices(panel)
        }
        Message::ShowHighlights => {
            *open_menu = None;
            Event::ShowHighlights
        }
        Message::ShowFaq => {
            *open_menu = None;
            Event::ShowFaq
        }
        Message::OpenSettings => {
            *open_menu = None;
            Event::OpenSettings
        }
        Message::LanguageSelected(locale) => {
            *open_menu = None;
            Event::LanguageSelected(locale)
        }
    }
}

/// Renders the navigation bar, with the open dropdown (if any) below it.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .width(Length::Fill);

    bar = bar.push(
        text(ctx.i18n.tr("app-brand"))
            .size(typography::TITLE)
            .width(Length::Shrink),
    );
    bar = bar.push(Space::new().width(spacing::LG));

    bar = bar.push(nav_button(
        ctx.i18n.tr("nav-network"),
        ctx.active_section == Section::Network,
        Message::ShowNetwork,
    ));
    bar = bar.push(nav_button(
        ctx.i18n.tr("nav-services"),
        ctx.active_section == Section::Services,
        Message::MenuToggled(Menu::Services),
    ));
    bar = bar.push(nav_button(
        ctx.i18n.tr("nav-highlights"),
        ctx.active_section == Section::Highlights,
        Message::ShowHighlights,
    ));
    bar = bar.push(nav_button(
        ctx.i18n.tr("nav-faq"),
        ctx.active_section == Section::Faq,
        Message::ShowFaq,
    ));

    bar = bar.push(Space::new().width(Length::Fill));
    bar = bar.push(nav_button(
        ctx.i18n.current_locale().to_string(),
        false,
        Message::MenuToggled(Menu::Language),
    ));
    bar = bar.push(nav_button(
        ctx.i18n.tr("nav-settings"),
        ctx.active_section == Section::Settings,
        Message::OpenSettings,
    ));

    let mut content = Column::new().width(Length::Fill);
    content = content.push(container(bar).style(styles::container::toolbar));

    match ctx.open_menu {
        Some(Menu::Services) => content = content.push(services_menu(&ctx)),
        Some(Menu::Language) => content = content.push(language_menu(&ctx)),
        None => {}
    }

    content.into()
}

fn nav_button<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let b = button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .on_press(message);
    if active {
        b.style(styles::button::selected).into()
    } else {
        b.style(styles::button::flat).into()
    }
}

fn services_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut items = Column::new().spacing(spacing::XXS);
    items = items.push(menu_item(
        ctx.i18n.tr("nav-services-all"),
        Message::ShowServices(None),
    ));
    for (index, panel) in catalog::service_panels().iter().enumerate() {
        items = items.push(menu_item(
            panel.title.to_string(),
            Message::ShowServices(Some(index)),
        ));
    }
    dropdown(items)
}

fn language_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut items = Column::new().spacing(spacing::XXS);
    for locale in &ctx.i18n.available_locales {
        items = items.push(menu_item(
            locale.to_string(),
            Message::LanguageSelected(locale.clone()),
        ));
    }
    dropdown(items)
}

fn menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::menu_item)
        .on_press(message)
        .into()
}

fn dropdown<'a>(items: Column<'a, Message>) -> Element<'a, Message> {
    container(items)
        .width(Length::Fixed(240.0))
        .padding(spacing::XS)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_open_menu_closes_it() {
        let mut open = None;
        let _ = update(Message::MenuToggled(Menu::Services), &mut open);
        assert_eq!(open, Some(Menu::Services));
        let _ = update(Message::MenuToggled(Menu::Services), &mut open);
        assert_eq!(open, None);
    }

    #[test]
    fn opening_another_menu_replaces_the_first() {
        let mut open = Some(Menu::Services);
        let _ = update(Message::MenuToggled(Menu::Language), &mut open);
        assert_eq!(open, Some(Menu::Language));
    }

    #[test]
    fn close_menus_collapses_the_dropdown_without_navigating() {
        let mut open = Some(Menu::Language);
        let event = update(Message::CloseMenus, &mut open);
        assert_eq!(open, None);
        assert!(matches!(event, Event::None));

        // Closing with nothing open stays a no-op.
        let _ = update(Message::CloseMenus, &mut open);
        assert_eq!(open, None);
    }

    #[test]
    fn navigation_closes_any_open_menu() {
        let mut open = Some(Menu::Services);
        let event = update(Message::ShowServices(Some(1)), &mut open);
        assert_eq!(open, None);
        assert!(matches!(event, Event::ShowServices(Some(1))));
    }
}
