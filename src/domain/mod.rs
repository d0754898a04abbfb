// SPDX-License-Identifier: MPL-2.0
//! Domain types for the ATM network: locations, city grouping, and
//! aggregate status derivation.

pub mod grouping;
pub mod location;

pub use grouping::{build_groups, CityGroup, GroupStatus};
pub use location::{AtmLocation, AtmStatus, Coordinates, Placement};
