//! Static content registry — every word on the page lives here.
//!
//! The registry is the single source of truth for the copy: typed literal
//! records in fixed lists, defined at startup and read-only thereafter.
//! Sections map these lists to markup and add nothing of their own.

use crate::icons::{
    ICON_BUILDINGS, ICON_CLOCK, ICON_FACEBOOK, ICON_HEADSET, ICON_INSTAGRAM, ICON_LIGHTNING,
    ICON_LINKEDIN, ICON_MAP_PIN, ICON_PACKAGE, ICON_SCOOTER, ICON_SHIELD_CHECK, ICON_TRUCK,
    ICON_TWITTER, ICON_WALLET,
};

/// Brand name shown in the header and footer.
pub const BRAND: &str = "Swifthaul";

/// One-line pitch used as the hero description.
pub const TAGLINE: &str = "Two-wheelers for a single parcel, trucks for a full load — \
    verified driver-partners, upfront fares and live tracking on every trip.";

/// City the service currently operates in.
pub const DEFAULT_CITY: &str = "Bengaluru";

/// Entries of the estimate widget's service dropdown. Each entry names a
/// service from [`SERVICES`].
pub const SERVICE_OPTIONS: &[&str] = &["Two-Wheelers", "Trucks", "Packers & Movers", "Enterprise"];

/// Header navigation entry.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Card in the services grid.
#[derive(Clone, Copy, Debug)]
pub struct Service {
    /// Stable iteration key, unique within [`SERVICES`].
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// SVG path data from [`crate::icons`].
    pub icon: &'static str,
}

/// Card in the features grid.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    /// Stable iteration key, unique within [`FEATURES`].
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Customer quote with attribution.
#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    /// Stable iteration key, unique within [`TESTIMONIALS`].
    pub id: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

/// Single link inside a footer column.
#[derive(Clone, Copy, Debug)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Titled group of footer links.
#[derive(Clone, Copy, Debug)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

/// Social media link rendered as an icon button.
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#testimonials", label: "Customers" },
];

pub const SERVICES: &[Service] = &[
    Service {
        id: "two-wheelers",
        title: "Two-Wheelers",
        description: "Bike couriers for documents, food and parcels up to 20 kg, \
            delivered across town within the hour.",
        icon: ICON_SCOOTER,
    },
    Service {
        id: "trucks",
        title: "Trucks",
        description: "Mini trucks to 14-foot lorries for bulk goods, with verified \
            driver-partners on every trip.",
        icon: ICON_TRUCK,
    },
    Service {
        id: "packers-movers",
        title: "Packers & Movers",
        description: "House shifting handled end to end: packing, loading, transit \
            and placement in your new home.",
        icon: ICON_PACKAGE,
    },
    Service {
        id: "enterprise",
        title: "Enterprise",
        description: "Dedicated fleets, route planning and monthly billing for \
            businesses that move goods every day.",
        icon: ICON_BUILDINGS,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "express-pickups",
        icon: ICON_LIGHTNING,
        title: "Express pickups",
        description: "A driver-partner reaches your doorstep within minutes of booking.",
    },
    Feature {
        id: "upfront-fares",
        icon: ICON_WALLET,
        title: "Upfront fares",
        description: "The fare is fixed before the trip starts, from distance and \
            vehicle class. No meter, no haggling.",
    },
    Feature {
        id: "live-tracking",
        icon: ICON_MAP_PIN,
        title: "Live tracking",
        description: "Follow every consignment on the map from pickup to drop, and \
            share the trip link with the receiver.",
    },
    Feature {
        id: "goods-safety",
        icon: ICON_SHIELD_CHECK,
        title: "Goods in safe hands",
        description: "Background-verified partners, trained handling and optional \
            cover for goods in transit.",
    },
    Feature {
        id: "always-on",
        icon: ICON_CLOCK,
        title: "Open all hours",
        description: "Book at 3 pm or 3 am. The fleet does not keep office hours.",
    },
    Feature {
        id: "on-call-support",
        icon: ICON_HEADSET,
        title: "On-call support",
        description: "A human on the line whenever a trip needs attention.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "asha-kora-home",
        quote: "Swifthaul moved our entire storefront inventory across town in one \
            weekend without a single damaged carton.",
        name: "Asha Menon",
        role: "Owner, Kora Home Store",
        avatar: "assets/avatars/asha.svg",
    },
    Testimonial {
        id: "rahul-spice-route",
        quote: "The two-wheeler fleet is the backbone of our cloud kitchen. Orders \
            leave the counter and reach customers hot.",
        name: "Rahul Iyer",
        role: "Founder, Spice Route Kitchens",
        avatar: "assets/avatars/rahul.svg",
    },
    Testimonial {
        id: "meera-deccan",
        quote: "We run forty truck trips a month on the enterprise plan, and the \
            invoice at the end of it is the least of my worries.",
        name: "Meera Pillai",
        role: "Operations Head, Deccan Traders",
        avatar: "assets/avatars/meera.svg",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink { label: "About us", href: "/about" },
            FooterLink { label: "Careers", href: "/careers" },
            FooterLink { label: "Press", href: "/press" },
        ],
    },
    FooterColumn {
        title: "Services",
        links: &[
            FooterLink { label: "Two-Wheelers", href: "/services/two-wheelers" },
            FooterLink { label: "Trucks", href: "/services/trucks" },
            FooterLink { label: "Packers & Movers", href: "/services/packers-movers" },
            FooterLink { label: "Enterprise", href: "/services/enterprise" },
        ],
    },
    FooterColumn {
        title: "Support",
        links: &[
            FooterLink { label: "Help center", href: "/help" },
            FooterLink { label: "Terms of service", href: "/terms" },
            FooterLink { label: "Privacy policy", href: "/privacy" },
        ],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: ICON_TWITTER,
        label: "Swifthaul on Twitter",
        href: "https://twitter.com/swifthaul",
    },
    SocialLink {
        icon: ICON_INSTAGRAM,
        label: "Swifthaul on Instagram",
        href: "https://instagram.com/swifthaul",
    },
    SocialLink {
        icon: ICON_LINKEDIN,
        label: "Swifthaul on LinkedIn",
        href: "https://linkedin.com/company/swifthaul",
    },
    SocialLink {
        icon: ICON_FACEBOOK,
        label: "Swifthaul on Facebook",
        href: "https://facebook.com/swifthaul",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_unique<'a>(keys: impl Iterator<Item = &'a str>, list: &str) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key {key:?} in {list}");
        }
    }

    #[test]
    fn iteration_keys_are_unique_within_their_list() {
        assert_unique(SERVICES.iter().map(|s| s.id), "SERVICES");
        assert_unique(FEATURES.iter().map(|f| f.id), "FEATURES");
        assert_unique(TESTIMONIALS.iter().map(|t| t.id), "TESTIMONIALS");
        assert_unique(NAV_LINKS.iter().map(|l| l.href), "NAV_LINKS");
        assert_unique(SOCIAL_LINKS.iter().map(|l| l.href), "SOCIAL_LINKS");
        for column in FOOTER_COLUMNS {
            assert_unique(column.links.iter().map(|l| l.href), column.title);
        }
    }

    #[test]
    fn services_are_the_four_offerings_in_order() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Two-Wheelers", "Trucks", "Packers & Movers", "Enterprise"]);
    }

    #[test]
    fn every_estimate_option_names_a_service() {
        for option in SERVICE_OPTIONS {
            assert!(
                SERVICES.iter().any(|s| s.title == *option),
                "option {option:?} has no matching service"
            );
        }
        assert_eq!(SERVICE_OPTIONS.len(), SERVICES.len());
    }

    #[test]
    fn copy_fields_are_non_empty() {
        for service in SERVICES {
            assert!(!service.title.is_empty() && !service.description.is_empty());
            assert!(!service.icon.is_empty());
        }
        for feature in FEATURES {
            assert!(!feature.title.is_empty() && !feature.description.is_empty());
        }
        for testimonial in TESTIMONIALS {
            assert!(!testimonial.quote.is_empty());
            assert!(!testimonial.name.is_empty() && !testimonial.role.is_empty());
            assert!(testimonial.avatar.starts_with("assets/"));
        }
    }

    #[test]
    fn nav_links_anchor_to_page_sections() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "nav link {:?} is not an anchor", link.label);
        }
    }
}
