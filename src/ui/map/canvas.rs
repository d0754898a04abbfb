// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the network map.
//!
//! Markers are placed with a plain equirectangular fit: the bounding box
//! of all coordinates is scaled uniformly into the padded canvas and
//! centered. Good enough at city-marker scale; not geodesically correct.

use super::Message;
use crate::domain::grouping::{CityGroup, GroupStatus};
use crate::domain::location::{AtmStatus, Coordinates};
use crate::ui::design_tokens::{palette, sizing, typography};
use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::widget::{canvas, Action};
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Inset between canvas edges and the outermost markers.
const VIEW_PADDING: f32 = 48.0;

/// Fill color for a cluster marker by aggregate status.
#[must_use]
pub fn group_color(status: GroupStatus) -> Color {
    match status {
        GroupStatus::AllOnline => palette::CLUSTER_ALL_ONLINE,
        GroupStatus::Mixed => palette::CLUSTER_MIXED,
        GroupStatus::NoneOnline => palette::CLUSTER_NONE_ONLINE,
    }
}

/// Dot color for an individual machine by status.
#[must_use]
pub fn status_color(status: AtmStatus) -> Color {
    match status {
        AtmStatus::Online => palette::ATM_ONLINE,
        AtmStatus::Maintenance => palette::ATM_MAINTENANCE,
        AtmStatus::Offline => palette::ATM_OFFLINE,
    }
}

/// Uniform-scale mapping from geographic coordinates to canvas points.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    min_lat: f64,
    min_lng: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height: f64,
}

impl Viewport {
    /// Fits the bounding box of `coords` into `width` x `height` with
    /// `padding` on every side. Returns `None` for an empty input.
    #[must_use]
    pub fn fit(
        coords: impl Iterator<Item = Coordinates>,
        width: f32,
        height: f32,
        padding: f32,
    ) -> Option<Self> {
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lng = f64::INFINITY;
        let mut max_lng = f64::NEG_INFINITY;
        let mut any = false;

        for c in coords {
            any = true;
            min_lat = min_lat.min(c.lat);
            max_lat = max_lat.max(c.lat);
            min_lng = min_lng.min(c.lng);
            max_lng = max_lng.max(c.lng);
        }
        if !any {
            return None;
        }

        // Degenerate spans (a single point, or all points on one line)
        // still need a finite scale.
        let span_lat = (max_lat - min_lat).max(1e-6);
        let span_lng = (max_lng - min_lng).max(1e-6);

        let inner_w = f64::from((width - 2.0 * padding).max(1.0));
        let inner_h = f64::from((height - 2.0 * padding).max(1.0));
        let scale = (inner_w / span_lng).min(inner_h / span_lat);

        let used_w = span_lng * scale;
        let used_h = span_lat * scale;
        let offset_x = f64::from(padding) + (inner_w - used_w) / 2.0;
        let offset_y = f64::from(padding) + (inner_h - used_h) / 2.0;

        Some(Self {
            min_lat,
            min_lng,
            scale,
            offset_x,
            offset_y,
            height: used_h,
        })
    }

    /// Projects a coordinate. Latitude grows upward, so y is flipped.
    #[must_use]
    pub fn project(&self, c: Coordinates) -> Point {
        let x = self.offset_x + (c.lng - self.min_lng) * self.scale;
        let y = self.offset_y + self.height - (c.lat - self.min_lat) * self.scale;
        Point::new(x as f32, y as f32)
    }
}

/// Canvas program drawing cluster markers and expanded member dots.
pub struct MapCanvas<'a> {
    groups: &'a [CityGroup],
    selected: Option<&'static str>,
}

impl<'a> MapCanvas<'a> {
    #[must_use]
    pub fn new(groups: &'a [CityGroup], selected: Option<&'static str>) -> Self {
        Self { groups, selected }
    }

    fn viewport(&self, bounds: Rectangle) -> Option<Viewport> {
        Viewport::fit(
            self.groups
                .iter()
                .flat_map(|g| g.members.iter().map(|m| m.coordinates)),
            bounds.width,
            bounds.height,
            VIEW_PADDING,
        )
    }

    /// Returns the city whose marker contains `position`, if any.
    fn hit_test(&self, position: Point, bounds: Rectangle) -> Option<&'static str> {
        let viewport = self.viewport(bounds)?;
        let radius = sizing::CLUSTER_MARKER / 2.0;
        self.groups
            .iter()
            .find(|group| {
                let center = viewport.project(group.centroid);
                distance(position, center) <= radius
            })
            .map(|group| group.city)
    }
}

fn distance(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let position = cursor.position_in(bounds)?;
            let message = match self.hit_test(position, bounds) {
                Some(city) => Message::CityPressed(city),
                None => Message::BackgroundPressed,
            };
            return Some(Action::publish(message).and_capture());
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let Some(viewport) = self.viewport(bounds) else {
            return vec![frame.into_geometry()];
        };

        let outline = theme.extended_palette().background.base.text;

        // Expanded member dots go under the markers so the cluster circle
        // of the selected city stays visible as an anchor.
        if let Some(selected) = self.selected {
            if let Some(group) = self.groups.iter().find(|g| g.city == selected) {
                for member in &group.members {
                    let center = viewport.project(member.coordinates);
                    let dot = Path::circle(center, sizing::ATM_DOT / 2.0);
                    frame.fill(&dot, status_color(member.status));
                    frame.stroke(
                        &dot,
                        Stroke::default().with_width(1.0).with_color(palette::WHITE),
                    );
                }
            }
        }

        for group in self.groups {
            let center = viewport.project(group.centroid);
            let marker = Path::circle(center, sizing::CLUSTER_MARKER / 2.0);
            frame.fill(&marker, group_color(group.aggregate));

            let stroke_width = if self.selected == Some(group.city) {
                3.0
            } else {
                1.0
            };
            frame.stroke(
                &marker,
                Stroke::default()
                    .with_width(stroke_width)
                    .with_color(outline),
            );

            let label = group.members.len().to_string();
            let font_size = typography::BODY;
            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(
                    center.x - font_size * 0.3 * label.len() as f32,
                    center.y - font_size * 0.6,
                ),
                color: palette::GRAY_900,
                size: font_size.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let hovering = cursor
            .position_in(bounds)
            .and_then(|position| self.hit_test(position, bounds))
            .is_some();
        if hovering {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fits_points_inside_padding() {
        let coords = [
            Coordinates::new(43.0, -123.0),
            Coordinates::new(53.0, -63.0),
        ];
        let viewport = Viewport::fit(coords.iter().copied(), 800.0, 600.0, 48.0)
            .expect("non-empty input");

        for c in coords {
            let p = viewport.project(c);
            assert!(p.x >= 48.0 - 0.5 && p.x <= 800.0 - 48.0 + 0.5);
            assert!(p.y >= 48.0 - 0.5 && p.y <= 600.0 - 48.0 + 0.5);
        }
    }

    #[test]
    fn projection_preserves_relative_position() {
        let west = Coordinates::new(49.0, -123.0);
        let east = Coordinates::new(49.0, -79.0);
        let north = Coordinates::new(53.0, -100.0);
        let south = Coordinates::new(43.0, -100.0);
        let viewport = Viewport::fit(
            [west, east, north, south].into_iter(),
            800.0,
            600.0,
            48.0,
        )
        .expect("non-empty input");

        assert!(viewport.project(west).x < viewport.project(east).x);
        // Screen y grows downward.
        assert!(viewport.project(north).y < viewport.project(south).y);
    }

    #[test]
    fn single_point_projects_without_blowing_up() {
        let only = Coordinates::new(49.28, -123.12);
        let viewport =
            Viewport::fit(std::iter::once(only), 800.0, 600.0, 48.0).expect("non-empty input");
        let p = viewport.project(only);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn empty_input_yields_no_viewport() {
        assert!(Viewport::fit(std::iter::empty(), 800.0, 600.0, 48.0).is_none());
    }

    #[test]
    fn hit_test_finds_the_marker_under_the_cursor() {
        use crate::domain::grouping::build_groups;
        use crate::domain::location::{AtmLocation, AtmStatus, Placement};

        let locations = [
            AtmLocation {
                id: "1",
                name: "West",
                address: "1 W St",
                city: "Vancouver",
                coordinates: Coordinates::new(49.28, -123.12),
                status: AtmStatus::Online,
                placement: Placement::Indoor,
            },
            AtmLocation {
                id: "2",
                name: "East",
                address: "1 E St",
                city: "Toronto",
                coordinates: Coordinates::new(43.65, -79.38),
                status: AtmStatus::Online,
                placement: Placement::Outdoor,
            },
        ];
        let groups = build_groups(&locations);
        let canvas = MapCanvas::new(&groups, None);
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(800.0, 600.0));

        let viewport = canvas.viewport(bounds).expect("non-empty groups");
        let marker = viewport.project(groups[0].centroid);

        assert_eq!(canvas.hit_test(marker, bounds), Some("Vancouver"));

        // A point well outside every marker radius hits nothing.
        let off = Point::new(
            marker.x + sizing::CLUSTER_MARKER * 2.0,
            marker.y + sizing::CLUSTER_MARKER * 2.0,
        );
        assert_eq!(canvas.hit_test(off, bounds), None);
    }

    #[test]
    fn colors_follow_aggregate_status() {
        assert_eq!(
            group_color(GroupStatus::AllOnline),
            palette::CLUSTER_ALL_ONLINE
        );
        assert_eq!(group_color(GroupStatus::Mixed), palette::CLUSTER_MIXED);
        assert_eq!(
            group_color(GroupStatus::NoneOnline),
            palette::CLUSTER_NONE_ONLINE
        );
    }
}
