// SPDX-License-Identifier: MPL-2.0
//! Static content catalog.
//!
//! Everything the screens display (ATM locations, service panels,
//! feature highlights, reviews, FAQ entries, and network statistics)
//! is plain static data defined here and handed to the components at
//! construction time. Nothing in this module is fetched or mutated at
//! runtime.

use crate::domain::{AtmLocation, AtmStatus, Coordinates, Placement};

/// One selectable content panel on the services screen.
#[derive(Debug, Clone, Copy)]
pub struct ServicePanel {
    pub title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

/// One feature card with its headline statistic.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
    pub stat_value: f64,
    pub stat_prefix: &'static str,
    pub stat_suffix: &'static str,
    pub stat_label: &'static str,
}

/// A customer review shown in the rotating carousel.
#[derive(Debug, Clone, Copy)]
pub struct Review {
    pub text: &'static str,
    pub author: &'static str,
    pub source: &'static str,
}

/// One FAQ entry.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A network statistic rendered with a count-up animation.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub label_key: &'static str,
}

pub fn atm_locations() -> &'static [AtmLocation] {
    ATM_LOCATIONS
}

static ATM_LOCATIONS: &[AtmLocation] = &[
    AtmLocation {
        id: "1",
        name: "INS Market",
        address: "887 Dunsmur St",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2827, -123.1207),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "2",
        name: "J & J Market",
        address: "1319 Robson St",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2863, -123.1302),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "3",
        name: "Al-Madina Store",
        address: "516 Pender St W",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2808, -123.1106),
        status: AtmStatus::Online,
        placement: Placement::Outdoor,
    },
    AtmLocation {
        id: "4",
        name: "Metro Plus",
        address: "1020 Granville St",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2780, -123.1208),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "5",
        name: "Quick Stop Mart",
        address: "789 Seymour St",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2811, -123.1182),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "6",
        name: "Downtown Mall",
        address: "456 Burrard St",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2855, -123.1190),
        status: AtmStatus::Maintenance,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "7",
        name: "Corner Market",
        address: "234 Hastings St W",
        city: "Vancouver",
        coordinates: Coordinates::new(49.2815, -123.1089),
        status: AtmStatus::Online,
        placement: Placement::Outdoor,
    },
    AtmLocation {
        id: "8",
        name: "City Center ATM",
        address: "650 Georgia St",
        city: "Toronto",
        coordinates: Coordinates::new(43.6532, -79.3832),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "9",
        name: "Union Station",
        address: "65 Front St W",
        city: "Toronto",
        coordinates: Coordinates::new(43.6453, -79.3806),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "10",
        name: "Eaton Centre",
        address: "220 Yonge St",
        city: "Toronto",
        coordinates: Coordinates::new(43.6544, -79.3807),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "11",
        name: "Old Montreal ATM",
        address: "400 Rue Saint-Jacques",
        city: "Montreal",
        coordinates: Coordinates::new(45.5017, -73.5673),
        status: AtmStatus::Online,
        placement: Placement::Outdoor,
    },
    AtmLocation {
        id: "12",
        name: "Downtown Montreal",
        address: "1250 René-Lévesque",
        city: "Montreal",
        coordinates: Coordinates::new(45.4972, -73.5733),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "13",
        name: "Calgary Tower",
        address: "101 9 Ave SW",
        city: "Calgary",
        coordinates: Coordinates::new(51.0447, -114.0719),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "14",
        name: "Edmonton Mall",
        address: "8882 170 St NW",
        city: "Edmonton",
        coordinates: Coordinates::new(53.5263, -113.6236),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "15",
        name: "Ottawa Parliament",
        address: "111 Wellington St",
        city: "Ottawa",
        coordinates: Coordinates::new(45.4215, -75.7028),
        status: AtmStatus::Online,
        placement: Placement::Outdoor,
    },
    AtmLocation {
        id: "16",
        name: "Winnipeg Downtown",
        address: "360 Main St",
        city: "Winnipeg",
        coordinates: Coordinates::new(49.8951, -97.1384),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "17",
        name: "Regina City Square",
        address: "1945 Hamilton St",
        city: "Regina",
        coordinates: Coordinates::new(50.4452, -104.6189),
        status: AtmStatus::Online,
        placement: Placement::Indoor,
    },
    AtmLocation {
        id: "18",
        name: "Halifax Waterfront",
        address: "1869 Upper Water St",
        city: "Halifax",
        coordinates: Coordinates::new(44.6488, -63.5752),
        status: AtmStatus::Online,
        placement: Placement::Outdoor,
    },
];

pub fn service_panels() -> &'static [ServicePanel] {
    SERVICE_PANELS
}

static SERVICE_PANELS: &[ServicePanel] = &[
    ServicePanel {
        title: "Buy Online",
        heading: "Buy Bitcoin & Crypto Online",
        description: "Get instant access to 70+ cryptocurrencies with our secure online \
                      platform. Buy, sell, and trade crypto with competitive fees and 24/7 \
                      support.",
        features: &[
            "Instant transactions with e-Transfer",
            "Competitive trading fees of 0.15%-0.25%",
            "Secure wallet integration",
        ],
        cta: "Start Buying Online",
    },
    ServicePanel {
        title: "Find an ATM",
        heading: "Find a Bitcoin ATM Near You",
        description: "Access our network of Bitcoin ATMs across Canada. Buy and sell crypto \
                      with cash at convenient locations near you.",
        features: &[
            "200+ ATM locations nationwide",
            "Buy with cash instantly",
            "No KYC for transactions under $1000",
        ],
        cta: "Locate ATM",
    },
    ServicePanel {
        title: "Guided Purchase",
        heading: "Personalized Crypto Assistance",
        description: "New to crypto? Our expert team provides personalized guidance through \
                      your first purchase and beyond.",
        features: &[
            "One-on-one expert consultation",
            "Step-by-step purchase guidance",
            "Ongoing portfolio support",
        ],
        cta: "Get Expert Help",
    },
];

pub fn features() -> &'static [Feature] {
    FEATURES
}

static FEATURES: &[Feature] = &[
    Feature {
        title: "Robust Security",
        text: "Your security is our priority. We use encrypted systems, multi-factor \
               authentication, and secure infrastructure to protect your assets and data.",
        stat_value: 99.9,
        stat_prefix: "",
        stat_suffix: "%",
        stat_label: "Uptime",
    },
    Feature {
        title: "FINTRAC Compliance",
        text: "Committed to legal and financial standards, we are registered with FINTRAC \
               and Revenu Québec. We employ extensive KYC procedures.",
        stat_value: 60000.0,
        stat_prefix: "",
        stat_suffix: "+",
        stat_label: "Verified Users",
    },
    Feature {
        title: "Expert Support",
        text: "Count on our team of experts to navigate buying and selling in the crypto \
               landscape. Our team provides support within 24 hours.",
        stat_value: 24.0,
        stat_prefix: "",
        stat_suffix: "h",
        stat_label: "Response Time",
    },
    Feature {
        title: "Nationwide Network",
        text: "230+ ATMs across Canada with 99.9% uptime and instant transactions for \
               convenient cash-to-crypto conversions at locations near you.",
        stat_value: 230.0,
        stat_prefix: "",
        stat_suffix: "+",
        stat_label: "ATMs in Canada",
    },
    Feature {
        title: "Versatile Options",
        text: "Transact your way online, at an ATM, or directly with our team. Choose from \
               cash, wire transfers, and more payment methods.",
        stat_value: 24.0,
        stat_prefix: "$",
        stat_suffix: "M",
        stat_label: "Quarterly Volume",
    },
    Feature {
        title: "Non-Custodial Platform",
        text: "Unlike traditional exchanges, we never hold your funds. Your transfers go \
               directly to you, reducing risks and boosting security.",
        stat_value: 100.0,
        stat_prefix: "",
        stat_suffix: "%",
        stat_label: "Direct Transfers",
    },
];

pub fn reviews() -> &'static [Review] {
    REVIEWS
}

static REVIEWS: &[Review] = &[
    Review {
        text: "One of the only Canadian options. Great customer service. And the app is easy \
               to use. Never given me issues yet.",
        author: "joe stone",
        source: "Google Play Store",
    },
    Review {
        text: "Life is like a sandwich, no matter how you flip it, the bread comes first. \
               Thank you for a platform to help me get it!",
        author: "Costa prava",
        source: "Apple App Store",
    },
    Review {
        text: "Very nice, clean interface for anyone just getting into crypto this is a great \
               place to start.",
        author: "Jonathan Watts",
        source: "Google Play Store",
    },
    Review {
        text: "This Is Definitely One of the Best Exchanges For Canadians. Very Simple and \
               easy!",
        author: "Dendvwg",
        source: "Apple App Store",
    },
    Review {
        text: "Love the new app! Makes it's so much easier for newbies like me to trade \
               crypto!",
        author: "@MoAlkhooly",
        source: "Twitter",
    },
    Review {
        text: "Much Wow. Such Good",
        author: "Jeshua Williams",
        source: "Apple App Store",
    },
];

pub fn faq_entries() -> &'static [FaqEntry] {
    FAQ_ENTRIES
}

static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I purchase Bitcoin?",
        answer: "You can purchase Bitcoin at any of our 220+ ATM locations across Canada. \
                 Simply visit an ATM, follow the on-screen instructions, insert cash, and \
                 provide your Bitcoin wallet address. The Bitcoin will be transferred to \
                 your wallet instantly.",
    },
    FaqEntry {
        question: "How do beginners buy Bitcoins?",
        answer: "Beginners can start by downloading a Bitcoin wallet app, visiting one of \
                 our user-friendly ATM locations, and following the simple step-by-step \
                 process. Our ATMs are designed for first-time users with clear \
                 instructions and 24/7 support available if you need help.",
    },
    FaqEntry {
        question: "Can you legally buy Bitcoin?",
        answer: "Yes, buying Bitcoin is completely legal in Canada. We are FINTRAC \
                 registered and fully compliant with all Canadian financial regulations. \
                 We operate under strict compliance standards to ensure all transactions \
                 are secure and legal.",
    },
    FaqEntry {
        question: "What is the safest way to buy Bitcoin?",
        answer: "Using a regulated ATM network is one of the safest ways to buy Bitcoin. \
                 Our ATMs are FINTRAC regulated, located in secure public locations, and \
                 don't require you to share personal banking information online. Plus, you \
                 receive your Bitcoin instantly to your own wallet.",
    },
    FaqEntry {
        question: "How many Bitcoins are left?",
        answer: "Bitcoin has a maximum supply of 21 million coins. As of now, over 19 \
                 million Bitcoins have been mined, leaving less than 2 million left to be \
                 mined. The last Bitcoin is expected to be mined around the year 2140 due \
                 to the halving mechanism.",
    },
    FaqEntry {
        question: "Can Bitcoin transactions be traced?",
        answer: "Bitcoin transactions are recorded on a public blockchain, making them \
                 traceable but pseudonymous. While transaction amounts and wallet addresses \
                 are visible, they don't directly reveal personal identities unless linked \
                 through other means. This provides transparency while maintaining privacy.",
    },
    FaqEntry {
        question: "What is the minimum amount to invest in Bitcoin?",
        answer: "There's no official minimum to invest in Bitcoin since it's divisible up \
                 to 8 decimal places. At our ATMs, the minimum transaction amount varies by \
                 location but is typically around $20-50 CAD, making Bitcoin accessible to \
                 everyone regardless of budget.",
    },
];

pub fn network_stats() -> &'static [Stat] {
    NETWORK_STATS
}

static NETWORK_STATS: &[Stat] = &[
    Stat {
        value: 60000.0,
        prefix: "",
        suffix: "+",
        label_key: "stat-verified-users",
    },
    Stat {
        value: 220.0,
        prefix: "",
        suffix: "+",
        label_key: "stat-atms",
    },
    Stat {
        value: 24.0,
        prefix: "$",
        suffix: "M",
        label_key: "stat-quarterly-volume",
    },
    Stat {
        value: 99.9,
        prefix: "",
        suffix: "%",
        label_key: "stat-uptime",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn location_ids_are_unique() {
        let mut seen = HashSet::new();
        for atm in atm_locations() {
            assert!(seen.insert(atm.id), "duplicate id {}", atm.id);
        }
    }

    #[test]
    fn catalog_sections_are_populated() {
        assert!(!atm_locations().is_empty());
        assert_eq!(service_panels().len(), 3);
        assert_eq!(features().len(), 6);
        assert_eq!(reviews().len(), 6);
        assert_eq!(faq_entries().len(), 7);
        assert_eq!(network_stats().len(), 4);
    }

    #[test]
    fn every_service_panel_lists_features() {
        for panel in service_panels() {
            assert!(!panel.features.is_empty());
        }
    }
}
