// SPDX-License-Identifier: MPL-2.0
//! Services screen with rotating tab panels.
//!
//! One panel per service is shown at a time. The rotator advances the
//! active tab on a timer; pressing a tab pins it, hovering the panel
//! body suspends rotation while the pointer stays inside.

use crate::catalog::{self, ServicePanel};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::rotator::Rotator;
use crate::ui::styles;
use iced::widget::{button, column, container, mouse_area, row, text, Column, Row};
use iced::{Element, Length};
use std::time::Instant;

/// Messages emitted by the services screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TabPressed(usize),
    HoverChanged(bool),
}

/// Applies a services message to the rotator driving the tabs.
pub fn update(message: Message, rotator: &mut Rotator, now: Instant) {
    match message {
        Message::TabPressed(index) => rotator.select(index, now),
        Message::HoverChanged(hovered) => rotator.set_hovered(hovered, now),
    }
}

pub fn view<'a>(rotator: &Rotator, i18n: &'a I18n) -> Element<'a, Message> {
    let panels = catalog::service_panels();
    let active = rotator.active().min(panels.len().saturating_sub(1));

    let mut tabs = Row::new().spacing(spacing::SM);
    for (index, panel) in panels.iter().enumerate() {
        let tab = button(text(panel.title).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::MD])
            .on_press(Message::TabPressed(index));
        let tab = if index == active {
            tab.style(styles::button::selected)
        } else {
            tab.style(styles::button::flat)
        };
        tabs = tabs.push(tab);
    }

    let body = mouse_area(panel_body(&panels[active]))
        .on_enter(Message::HoverChanged(true))
        .on_exit(Message::HoverChanged(false));

    column![
        text(i18n.tr("services-title")).size(typography::TITLE_LG),
        tabs,
        body,
    ]
    .spacing(spacing::LG)
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

fn panel_body<'a>(panel: &ServicePanel) -> Element<'a, Message> {
    let mut features = Column::new().spacing(spacing::XS);
    for feature in panel.features {
        features = features.push(
            row![
                text("\u{2713}").size(typography::BODY),
                text(*feature).size(typography::BODY),
            ]
            .spacing(spacing::XS),
        );
    }

    container(
        column![
            text(panel.heading).size(typography::TITLE),
            text(panel.description).size(typography::BODY),
            features,
            text(format!("{} \u{2192}", panel.cta)).size(typography::BODY_LG),
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn rotator(now: Instant) -> Rotator {
        Rotator::new(
            catalog::service_panels().len(),
            Duration::from_secs(12),
            Duration::from_secs(90),
            now,
        )
    }

    #[test]
    fn tab_press_pins_the_panel() {
        let now = Instant::now();
        let mut r = rotator(now);
        update(Message::TabPressed(2), &mut r, now);
        assert_eq!(r.active(), 2);
        assert!(r.is_paused());
    }

    #[test]
    fn hover_suspends_rotation_until_the_pointer_leaves() {
        let start = Instant::now();
        let mut r = rotator(start);

        update(Message::HoverChanged(true), &mut r, start);
        assert!(!r.tick(start + Duration::from_secs(120)));

        let left = start + Duration::from_secs(120);
        update(Message::HoverChanged(false), &mut r, left);
        assert!(r.tick(left + Duration::from_secs(12)));
        assert_eq!(r.active(), 1);
    }
}
