// SPDX-License-Identifier: MPL-2.0
//! Derives city groups from the flat location list.
//!
//! Groups are pure views recomputed from the source data; they are never
//! stored or mutated independently. Key order follows the first
//! appearance of each city in the input, so the same input always
//! produces the same group sequence.

use super::location::{AtmLocation, Coordinates};
use std::collections::HashMap;

/// Aggregate status of a city group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStatus {
    /// Every member is online.
    AllOnline,
    /// At least one member online and at least one not.
    Mixed,
    /// No member is online.
    NoneOnline,
}

/// All ATMs sharing one city, with derived centroid and aggregate status.
#[derive(Debug, Clone)]
pub struct CityGroup {
    pub city: &'static str,
    /// Members in source order.
    pub members: Vec<AtmLocation>,
    /// Arithmetic mean of member coordinates. Used for marker placement
    /// only; not geodesically correct.
    pub centroid: Coordinates,
    pub aggregate: GroupStatus,
}

impl CityGroup {
    #[must_use]
    pub fn online_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_online()).count()
    }

    #[must_use]
    pub fn offline_or_maintenance_count(&self) -> usize {
        self.members.len() - self.online_count()
    }
}

/// Groups locations by city, preserving first-seen city order.
///
/// Pure function of its input: no side effects, deterministic, and an
/// empty input yields an empty vector.
#[must_use]
pub fn build_groups(locations: &[AtmLocation]) -> Vec<CityGroup> {
    let mut order: Vec<&'static str> = Vec::new();
    let mut by_city: HashMap<&'static str, Vec<AtmLocation>> = HashMap::new();

    for atm in locations {
        if !by_city.contains_key(atm.city) {
            order.push(atm.city);
        }
        by_city.entry(atm.city).or_default().push(atm.clone());
    }

    order
        .into_iter()
        .map(|city| {
            let members = by_city.remove(city).unwrap_or_default();
            let centroid = centroid_of(&members);
            let aggregate = aggregate_status(&members);
            CityGroup {
                city,
                members,
                centroid,
                aggregate,
            }
        })
        .collect()
}

fn centroid_of(members: &[AtmLocation]) -> Coordinates {
    let n = members.len() as f64;
    let lat = members.iter().map(|m| m.coordinates.lat).sum::<f64>() / n;
    let lng = members.iter().map(|m| m.coordinates.lng).sum::<f64>() / n;
    Coordinates::new(lat, lng)
}

fn aggregate_status(members: &[AtmLocation]) -> GroupStatus {
    let online = members.iter().filter(|m| m.is_online()).count();
    if online == members.len() {
        GroupStatus::AllOnline
    } else if online > 0 {
        GroupStatus::Mixed
    } else {
        GroupStatus::NoneOnline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::{AtmStatus, Placement};

    fn atm(
        id: &'static str,
        city: &'static str,
        lat: f64,
        lng: f64,
        status: AtmStatus,
    ) -> AtmLocation {
        AtmLocation {
            id,
            name: "Test ATM",
            address: "1 Main St",
            city,
            coordinates: Coordinates::new(lat, lng),
            status,
            placement: Placement::Indoor,
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(build_groups(&[]).is_empty());
    }

    #[test]
    fn grouping_preserves_first_seen_city_order_and_member_order() {
        let input = vec![
            atm("1", "Vancouver", 49.28, -123.12, AtmStatus::Online),
            atm("2", "Toronto", 43.65, -79.38, AtmStatus::Online),
            atm("3", "Vancouver", 49.29, -123.13, AtmStatus::Online),
        ];
        let groups = build_groups(&input);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "Vancouver");
        assert_eq!(groups[1].city, "Toronto");
        let ids: Vec<_> = groups[0].members.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn grouping_is_deterministic() {
        let input = vec![
            atm("1", "A", 10.0, 20.0, AtmStatus::Online),
            atm("2", "B", 30.0, 40.0, AtmStatus::Offline),
            atm("3", "A", 12.0, 22.0, AtmStatus::Maintenance),
        ];
        let first = build_groups(&input);
        let second = build_groups(&input);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.city, b.city);
            assert_eq!(a.centroid, b.centroid);
            assert_eq!(a.aggregate, b.aggregate);
            let a_ids: Vec<_> = a.members.iter().map(|m| m.id).collect();
            let b_ids: Vec<_> = b.members.iter().map(|m| m.id).collect();
            assert_eq!(a_ids, b_ids);
        }
    }

    #[test]
    fn centroid_is_arithmetic_mean() {
        let input = vec![
            atm("1", "A", 10.0, 20.0, AtmStatus::Online),
            atm("2", "A", 20.0, 40.0, AtmStatus::Online),
        ];
        let groups = build_groups(&input);
        let centroid = groups[0].centroid;

        assert!((centroid.lat - 15.0).abs() < 1e-9);
        assert!((centroid.lng - 30.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_status_three_way() {
        let all = build_groups(&[
            atm("1", "A", 0.0, 0.0, AtmStatus::Online),
            atm("2", "A", 0.0, 0.0, AtmStatus::Online),
        ]);
        assert_eq!(all[0].aggregate, GroupStatus::AllOnline);

        let mixed = build_groups(&[
            atm("1", "A", 0.0, 0.0, AtmStatus::Online),
            atm("2", "A", 0.0, 0.0, AtmStatus::Online),
            atm("3", "A", 0.0, 0.0, AtmStatus::Maintenance),
        ]);
        assert_eq!(mixed[0].aggregate, GroupStatus::Mixed);

        let none = build_groups(&[
            atm("1", "A", 0.0, 0.0, AtmStatus::Offline),
            atm("2", "A", 0.0, 0.0, AtmStatus::Maintenance),
        ]);
        assert_eq!(none[0].aggregate, GroupStatus::NoneOnline);
    }

    #[test]
    fn end_to_end_scenario_from_three_points() {
        let input = vec![
            atm("1", "A", 0.0, 0.0, AtmStatus::Online),
            atm("2", "A", 0.0, 0.0, AtmStatus::Maintenance),
            atm("3", "B", 0.0, 0.0, AtmStatus::Online),
        ];
        let groups = build_groups(&input);

        assert_eq!(groups.len(), 2);
        let a = &groups[0];
        assert_eq!(a.city, "A");
        assert_eq!(
            a.members.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec!["1", "2"]
        );
        assert_eq!(a.aggregate, GroupStatus::Mixed);
        assert_eq!(a.online_count(), 1);
        assert_eq!(a.offline_or_maintenance_count(), 1);

        let b = &groups[1];
        assert_eq!(b.city, "B");
        assert_eq!(b.members.len(), 1);
        assert_eq!(b.aggregate, GroupStatus::AllOnline);
    }
}
