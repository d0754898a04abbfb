// SPDX-License-Identifier: MPL-2.0
//! ATM location records.
//!
//! Locations are static data supplied by the catalog at startup; the
//! application never mutates them. `id` is unique across the full set,
//! while many locations share a `city`.

/// Geographic position as a latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Operational status of a single ATM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmStatus {
    Online,
    Offline,
    Maintenance,
}

impl AtmStatus {
    /// i18n message key for the status label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            AtmStatus::Online => "status-online",
            AtmStatus::Offline => "status-offline",
            AtmStatus::Maintenance => "status-maintenance",
        }
    }
}

/// Whether the machine sits inside a host business or on the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Indoor,
    Outdoor,
}

impl Placement {
    /// i18n message key for the placement label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Placement::Indoor => "placement-indoor",
            Placement::Outdoor => "placement-outdoor",
        }
    }
}

/// A single ATM in the network.
#[derive(Debug, Clone)]
pub struct AtmLocation {
    /// Unique, stable identifier.
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    /// Grouping key for the map clusters.
    pub city: &'static str,
    pub coordinates: Coordinates,
    pub status: AtmStatus,
    pub placement: Placement,
}

impl AtmLocation {
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == AtmStatus::Online
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_check_matches_status() {
        let atm = AtmLocation {
            id: "t1",
            name: "Test",
            address: "1 Main St",
            city: "Testville",
            coordinates: Coordinates::new(49.0, -123.0),
            status: AtmStatus::Online,
            placement: Placement::Indoor,
        };
        assert!(atm.is_online());

        let down = AtmLocation {
            status: AtmStatus::Maintenance,
            ..atm
        };
        assert!(!down.is_online());
    }

    #[test]
    fn status_i18n_keys_are_distinct() {
        assert_ne!(AtmStatus::Online.i18n_key(), AtmStatus::Offline.i18n_key());
        assert_ne!(
            AtmStatus::Offline.i18n_key(),
            AtmStatus::Maintenance.i18n_key()
        );
    }
}
