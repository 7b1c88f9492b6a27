//! Static informational content: events, hotels, contact, about.
//!
//! These pages are fixed product copy; only auth talks to the backend.

/// A static informational page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A listed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub name: &'static str,
    pub venue: &'static str,
    pub city: &'static str,
    pub date: &'static str,
    pub price: &'static str,
}

/// A partner hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotel {
    pub name: &'static str,
    pub city: &'static str,
    pub distance: &'static str,
    pub rate: &'static str,
}

pub const ABOUT: Page = Page {
    slug: "about",
    title: "About",
    body: "FasTicket is a one-stop shop for live event tickets.\n\
           We partner with venues and promoters to offer fair prices,\n\
           instant delivery, and hotel deals near every show.",
};

pub const CONTACT: Page = Page {
    slug: "contact",
    title: "Contact",
    body: "Support hours: Mon-Fri, 9:00-18:00 (UTC)\n\
           Email: support@fasticket.example\n\
           Phone: +1 (555) 010-4321\n\
           Press inquiries: press@fasticket.example",
};

pub const HOME: Page = Page {
    slug: "home",
    title: "Home",
    body: "Welcome to FasTicket.\n\
           Browse events and hotels, or log in to book tickets.",
};

/// Returns the event listing.
pub fn events() -> &'static [Event] {
    &[
        Event {
            name: "Midnight Parade Tour",
            venue: "Riverside Arena",
            city: "Austin",
            date: "2026-09-12",
            price: "$59",
        },
        Event {
            name: "Static Bloom",
            venue: "The Foundry",
            city: "Portland",
            date: "2026-09-20",
            price: "$35",
        },
        Event {
            name: "Open Air Jazz Night",
            venue: "Lakeside Pavilion",
            city: "Chicago",
            date: "2026-10-03",
            price: "$42",
        },
        Event {
            name: "Synthwave Revival",
            venue: "Neon Hall",
            city: "Denver",
            date: "2026-10-17",
            price: "$48",
        },
        Event {
            name: "Harbor Lights Festival",
            venue: "Pier 9",
            city: "Seattle",
            date: "2026-11-01",
            price: "$75",
        },
    ]
}

/// Returns the partner hotel listing.
pub fn hotels() -> &'static [Hotel] {
    &[
        Hotel {
            name: "The Meridian",
            city: "Austin",
            distance: "0.3 mi from Riverside Arena",
            rate: "$129/night",
        },
        Hotel {
            name: "Foundry Inn",
            city: "Portland",
            distance: "2 blocks from The Foundry",
            rate: "$99/night",
        },
        Hotel {
            name: "Lakeside Suites",
            city: "Chicago",
            distance: "0.5 mi from Lakeside Pavilion",
            rate: "$149/night",
        },
        Hotel {
            name: "Pier House",
            city: "Seattle",
            distance: "next to Pier 9",
            rate: "$139/night",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: listings are non-empty and pages carry copy.
    #[test]
    fn test_content_present() {
        assert!(!events().is_empty());
        assert!(!hotels().is_empty());
        assert!(!ABOUT.body.is_empty());
        assert!(!CONTACT.body.is_empty());
        assert!(!HOME.body.is_empty());
    }

    /// Test: page slugs are unique.
    #[test]
    fn test_page_slugs_unique() {
        let slugs = [HOME.slug, ABOUT.slug, CONTACT.slug];
        let mut seen = std::collections::HashSet::new();
        for slug in slugs {
            assert!(seen.insert(slug), "duplicate slug {slug}");
        }
    }
}
