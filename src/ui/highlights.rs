// SPDX-License-Identifier: MPL-2.0
//! Highlights screen: a Features/Reviews tab pair plus a review
//! carousel, each driven by its own rotator.

use crate::catalog::{self, Feature, Review};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::rotator::Rotator;
use crate::ui::styles;
use iced::widget::{button, column, container, mouse_area, row, text, Column, Row};
use iced::{Element, Length};
use std::time::{Duration, Instant};

/// Index of the features tab.
pub const TAB_FEATURES: usize = 0;
/// Index of the reviews tab.
pub const TAB_REVIEWS: usize = 1;
const TAB_COUNT: usize = 2;

/// Messages emitted by the highlights screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TabPressed(usize),
    ReviewDotPressed(usize),
    HoverChanged(bool),
}

/// Highlights state: the tab pair and the review carousel rotate
/// independently, but a single hover over the section suspends both.
#[derive(Debug, Clone)]
pub struct State {
    tabs: Rotator,
    carousel: Rotator,
}

impl State {
    #[must_use]
    pub fn new(tick_interval: Duration, resume_delay: Duration, now: Instant) -> Self {
        Self {
            tabs: Rotator::new(TAB_COUNT, tick_interval, resume_delay, now),
            carousel: Rotator::new(
                catalog::reviews().len(),
                tick_interval,
                resume_delay,
                now,
            ),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.tabs.active()
    }

    #[must_use]
    pub fn active_review(&self) -> usize {
        self.carousel.active()
    }

    pub fn set_timing(&mut self, tick_interval: Duration, resume_delay: Duration, now: Instant) {
        self.tabs.set_timing(tick_interval, resume_delay, now);
        self.carousel.set_timing(tick_interval, resume_delay, now);
    }

    /// Advances both rotators; returns `true` if either index changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let tabs_changed = self.tabs.tick(now);
        let carousel_changed = self.carousel.tick(now);
        tabs_changed || carousel_changed
    }
}

pub fn update(message: Message, state: &mut State, now: Instant) {
    match message {
        Message::TabPressed(index) => state.tabs.select(index, now),
        Message::ReviewDotPressed(index) => state.carousel.select(index, now),
        Message::HoverChanged(hovered) => {
            state.tabs.set_hovered(hovered, now);
            state.carousel.set_hovered(hovered, now);
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let labels = [i18n.tr("highlights-tab-features"), i18n.tr("highlights-tab-reviews")];
    let mut tabs = Row::new().spacing(spacing::SM);
    for (index, label) in labels.into_iter().enumerate() {
        let tab = button(text(label).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::MD])
            .on_press(Message::TabPressed(index));
        let tab = if index == state.active_tab() {
            tab.style(styles::button::selected)
        } else {
            tab.style(styles::button::flat)
        };
        tabs = tabs.push(tab);
    }

    let body: Element<'a, Message> = if state.active_tab() == TAB_FEATURES {
        features_grid()
    } else {
        review_carousel(state)
    };

    let content = mouse_area(body)
        .on_enter(Message::HoverChanged(true))
        .on_exit(Message::HoverChanged(false));

    column![
        text(i18n.tr("highlights-title")).size(typography::TITLE_LG),
        tabs,
        content,
    ]
    .spacing(spacing::LG)
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

fn features_grid<'a>() -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD);
    let mut current = Row::new().spacing(spacing::MD);

    for (index, feature) in catalog::features().iter().enumerate() {
        current = current.push(feature_card(feature));
        if index % 2 == 1 {
            rows = rows.push(current);
            current = Row::new().spacing(spacing::MD);
        }
    }
    rows = rows.push(current);
    rows.into()
}

fn feature_card<'a>(feature: &Feature) -> Element<'a, Message> {
    let stat = format!(
        "{}{}{}",
        feature.stat_prefix,
        format_stat(feature.stat_value),
        feature.stat_suffix
    );
    container(
        column![
            text(feature.title).size(typography::TITLE),
            text(feature.text).size(typography::BODY),
            row![
                text(stat)
                    .size(typography::TITLE_LG)
                    .color(palette::BRAND_500),
                text(feature.stat_label).size(typography::CAPTION),
            ]
            .spacing(spacing::SM),
        ]
        .spacing(spacing::SM),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn review_carousel<'a>(state: &State) -> Element<'a, Message> {
    let reviews = catalog::reviews();
    let active = state.active_review().min(reviews.len().saturating_sub(1));
    let review: &Review = &reviews[active];

    let mut dots = Row::new().spacing(spacing::XS);
    for index in 0..reviews.len() {
        let glyph = if index == active { "\u{25CF}" } else { "\u{25CB}" };
        dots = dots.push(
            button(text(glyph).size(typography::BODY))
                .style(styles::button::flat)
                .padding(spacing::XXS)
                .on_press(Message::ReviewDotPressed(index)),
        );
    }

    container(
        column![
            text(format!("\u{201C}{}\u{201D}", review.text)).size(typography::BODY_LG),
            text(review.author).size(typography::BODY),
            text(review.source)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
            dots,
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}
