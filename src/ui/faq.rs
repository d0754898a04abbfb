// SPDX-License-Identifier: MPL-2.0
//! FAQ screen with independently collapsible entries.

use crate::catalog;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, scrollable, text, Column};
use iced::{Element, Length};
use std::collections::HashSet;

/// State for the FAQ screen (tracks which entries are open).
///
/// Unlike the map's single-selection markers, any number of entries may
/// be open at once.
#[derive(Debug, Clone, Default)]
pub struct State {
    open: HashSet<usize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }
}

/// Messages emitted by the FAQ screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggled(usize),
}

pub fn update(message: Message, state: &mut State) {
    match message {
        Message::Toggled(index) => state.toggle(index),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut entries = Column::new().spacing(spacing::SM);

    for (index, entry) in catalog::faq_entries().iter().enumerate() {
        let indicator = if state.is_open(index) { "\u{2212}" } else { "+" };
        let header = button(
            text(format!("{indicator}  {}", entry.question)).size(typography::BODY_LG),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::flat)
        .on_press(Message::Toggled(index));

        let mut section = column![header];
        if state.is_open(index) {
            section = section.push(
                container(text(entry.answer).size(typography::BODY))
                    .padding([spacing::SM, spacing::MD]),
            );
        }
        entries = entries.push(container(section).style(styles::container::card));
    }

    column![
        text(i18n.tr("faq-title")).size(typography::TITLE_LG),
        scrollable(entries).height(Length::Fill),
    ]
    .spacing(spacing::LG)
    .padding(spacing::MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_toggle_independently() {
        let mut state = State::new();
        update(Message::Toggled(0), &mut state);
        update(Message::Toggled(2), &mut state);

        assert!(state.is_open(0));
        assert!(!state.is_open(1));
        assert!(state.is_open(2));

        update(Message::Toggled(0), &mut state);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }
}
