// SPDX-License-Identifier: MPL-2.0
//! Network map with city clusters and a two-level disclosure flow.
//!
//! The map shows one marker per city. Pressing a marker expands that
//! city into its individual machines and opens a details panel; pressing
//! the same marker again collapses it. At most one city is expanded at a
//! time.

pub mod canvas;

use crate::domain::grouping::{build_groups, CityGroup};
use crate::domain::location::AtmLocation;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{canvas as iced_canvas, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

/// Map state owned by the application.
#[derive(Debug, Clone)]
pub struct State {
    groups: Vec<CityGroup>,
    selected_city: Option<&'static str>,
}

/// Messages emitted by the map canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A city marker was pressed.
    CityPressed(&'static str),
    /// The canvas was pressed outside any marker.
    BackgroundPressed,
}

impl State {
    /// Builds the map state from the flat location list.
    #[must_use]
    pub fn new(locations: &[AtmLocation]) -> Self {
        Self {
            groups: build_groups(locations),
            selected_city: None,
        }
    }

    #[must_use]
    pub fn groups(&self) -> &[CityGroup] {
        &self.groups
    }

    #[must_use]
    pub fn selected_city(&self) -> Option<&'static str> {
        self.selected_city
    }

    /// The currently expanded group, if any.
    #[must_use]
    pub fn selected_group(&self) -> Option<&CityGroup> {
        self.selected_city
            .and_then(|city| self.groups.iter().find(|g| g.city == city))
    }

    /// Toggles the selection for `city`.
    ///
    /// Selecting the expanded city collapses it; selecting another city
    /// replaces the expansion. Unknown keys leave the state untouched.
    pub fn toggle_city(&mut self, city: &'static str) {
        if !self.groups.iter().any(|g| g.city == city) {
            return;
        }
        if self.selected_city == Some(city) {
            self.selected_city = None;
        } else {
            self.selected_city = Some(city);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_city = None;
    }
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::CityPressed(city) => state.toggle_city(city),
        Message::BackgroundPressed => state.clear_selection(),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let map = iced_canvas::Canvas::new(canvas::MapCanvas::new(
        state.groups(),
        state.selected_city(),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let content: Element<'a, Message> = match state.selected_group() {
        Some(group) => row![
            map,
            container(details_panel(group, i18n))
                .width(Length::Fixed(sizing::DETAILS_PANEL))
                .height(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::panel),
        ]
        .spacing(spacing::SM)
        .into(),
        None => column![
            map,
            text(i18n.tr("map-hint")).size(typography::CAPTION),
        ]
        .spacing(spacing::XS)
        .into(),
    };

    container(content).padding(spacing::MD).into()
}

fn details_panel<'a>(group: &'a CityGroup, i18n: &'a I18n) -> Element<'a, Message> {
    let mut entries = column![].spacing(spacing::SM);

    for member in &group.members {
        let dot = text("\u{25CF}")
            .size(typography::BODY)
            .color(canvas::status_color(member.status));
        let entry = column![
            row![
                dot,
                text(member.name).size(typography::BODY_LG),
            ]
            .spacing(spacing::XS),
            text(member.address).size(typography::CAPTION),
            row![
                text(i18n.tr(member.status.i18n_key())).size(typography::CAPTION),
                text(i18n.tr(member.placement.i18n_key())).size(typography::CAPTION),
            ]
            .spacing(spacing::SM),
        ]
        .spacing(spacing::XXS);
        entries = entries.push(entry);
    }

    column![
        text(group.city).size(typography::TITLE),
        summary_line(group, i18n),
        Space::new().height(spacing::SM),
        scrollable(entries).height(Length::Fill),
    ]
    .spacing(spacing::XS)
    .into()
}

fn summary_line<'a>(group: &CityGroup, i18n: &'a I18n) -> Element<'a, Message> {
    let mut online_args = FluentArgs::new();
    online_args.set("count", group.online_count() as i64);
    let online = text(i18n.tr_with("map-summary-online", &online_args))
        .size(typography::CAPTION)
        .color(palette::ATM_ONLINE);

    let down_count = group.offline_or_maintenance_count();
    if down_count == 0 {
        return row![online].into();
    }

    let mut down_args = FluentArgs::new();
    down_args.set("count", down_count as i64);
    let down = text(i18n.tr_with("map-summary-down", &down_args))
        .size(typography::CAPTION)
        .color(palette::ATM_MAINTENANCE);

    row![online, down].spacing(spacing::SM).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::{AtmStatus, Coordinates, Placement};

    fn atm(id: &'static str, city: &'static str, status: AtmStatus) -> AtmLocation {
        AtmLocation {
            id,
            name: "Test ATM",
            address: "1 Main St",
            city,
            coordinates: Coordinates::new(49.0, -123.0),
            status,
            placement: Placement::Indoor,
        }
    }

    fn sample_state() -> State {
        State::new(&[
            atm("1", "Vancouver", AtmStatus::Online),
            atm("2", "Vancouver", AtmStatus::Maintenance),
            atm("3", "Toronto", AtmStatus::Online),
        ])
    }

    #[test]
    fn pressing_a_marker_expands_its_city() {
        let mut state = sample_state();
        update(&mut state, Message::CityPressed("Vancouver"));
        assert_eq!(state.selected_city(), Some("Vancouver"));
        assert_eq!(state.selected_group().map(|g| g.members.len()), Some(2));
    }

    #[test]
    fn pressing_the_expanded_marker_collapses_it() {
        let mut state = sample_state();
        update(&mut state, Message::CityPressed("Toronto"));
        update(&mut state, Message::CityPressed("Toronto"));
        assert_eq!(state.selected_city(), None);
    }

    #[test]
    fn pressing_another_marker_replaces_the_expansion() {
        let mut state = sample_state();
        update(&mut state, Message::CityPressed("Vancouver"));
        update(&mut state, Message::CityPressed("Toronto"));
        assert_eq!(state.selected_city(), Some("Toronto"));
    }

    #[test]
    fn unknown_city_keys_are_ignored() {
        let mut state = sample_state();
        update(&mut state, Message::CityPressed("Vancouver"));
        update(&mut state, Message::CityPressed("Atlantis"));
        assert_eq!(state.selected_city(), Some("Vancouver"));
    }

    #[test]
    fn background_press_clears_the_selection() {
        let mut state = sample_state();
        update(&mut state, Message::CityPressed("Vancouver"));
        update(&mut state, Message::BackgroundPressed);
        assert_eq!(state.selected_city(), None);
    }
}
