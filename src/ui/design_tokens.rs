// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared across the UI.
//!
//! Marker colors mirror the brand palette used on the web map: amber for
//! fully online clusters, orange for mixed, gray for dark clusters, and a
//! parallel green/orange/gray trio for individual machines.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (amber scale)
    pub const BRAND_400: Color = Color::from_rgb(0.984, 0.749, 0.141); // #fbbf24
    pub const BRAND_500: Color = Color::from_rgb(0.961, 0.62, 0.043); // #f59e0b
    pub const BRAND_600: Color = Color::from_rgb(0.851, 0.467, 0.024); // #d97706

    // Cluster marker colors (aggregate status)
    pub const CLUSTER_ALL_ONLINE: Color = BRAND_400; // #fbbf24
    pub const CLUSTER_MIXED: Color = Color::from_rgb(0.984, 0.573, 0.235); // #fb923c
    pub const CLUSTER_NONE_ONLINE: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9ca3af

    // Individual machine colors (status)
    pub const ATM_ONLINE: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10b981
    pub const ATM_MAINTENANCE: Color = Color::from_rgb(0.976, 0.451, 0.086); // #f97316
    pub const ATM_OFFLINE: Color = Color::from_rgb(0.42, 0.447, 0.502); // #6b7280
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Font size scale.
pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_LG: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const TITLE_LG: f32 = 28.0;
    pub const DISPLAY: f32 = 40.0;
}

/// Border radii.
pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

/// Component sizes.
pub mod sizing {
    /// Diameter of a city cluster marker on the map canvas.
    pub const CLUSTER_MARKER: f32 = 40.0;
    /// Diameter of an individual ATM dot on the map canvas.
    pub const ATM_DOT: f32 = 12.0;
    /// Width of the map details side panel.
    pub const DETAILS_PANEL: f32 = 300.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_colors_are_distinct() {
        assert_ne!(palette::CLUSTER_ALL_ONLINE, palette::CLUSTER_MIXED);
        assert_ne!(palette::CLUSTER_MIXED, palette::CLUSTER_NONE_ONLINE);
        assert_ne!(palette::CLUSTER_ALL_ONLINE, palette::CLUSTER_NONE_ONLINE);
    }

    #[test]
    fn atm_status_colors_are_distinct() {
        assert_ne!(palette::ATM_ONLINE, palette::ATM_MAINTENANCE);
        assert_ne!(palette::ATM_MAINTENANCE, palette::ATM_OFFLINE);
        assert_ne!(palette::ATM_ONLINE, palette::ATM_OFFLINE);
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
    }
}
