use crate::config;
use crate::icons::Icon;

pub const SITE_NAME: &str = "Vaishya Excellence Awards";
pub const CONTACT_EMAIL: &str = "contact@vaishyaawards.org";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientToken {
    pub from: &'static str,
    pub to: &'static str,
}

impl GradientToken {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn css_vars(&self) -> String {
        format!("--accent-from: {}; --accent-to: {};", self.from, self.to)
    }
}

pub const GOLD: GradientToken = GradientToken::new("#f59e0b", "#ea580c");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Categories", anchor: "categories" },
    NavLink { label: "Event Details", anchor: "details" },
    NavLink { label: "Nominate", anchor: "nominate" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub title: &'static str,
    pub icon: Icon,
    pub color: GradientToken,
}

impl Category {
    pub fn slug(&self) -> String {
        slugify(self.title)
    }

    pub fn criteria_anchor(&self) -> String {
        format!("criteria-{}", self.slug())
    }
}

pub const CATEGORIES: [Category; 8] = [
    Category {
        title: "Business Excellence",
        icon: Icon::Trophy,
        color: GradientToken::new("#f59e0b", "#f97316"),
    },
    Category {
        title: "Community Service",
        icon: Icon::Users,
        color: GradientToken::new("#a855f7", "#8b5cf6"),
    },
    Category {
        title: "Education & Research",
        icon: Icon::Trophy,
        color: GradientToken::new("#3b82f6", "#06b6d4"),
    },
    Category {
        title: "Arts & Culture",
        icon: Icon::Trophy,
        color: GradientToken::new("#ec4899", "#f43f5e"),
    },
    Category {
        title: "Innovation",
        icon: Icon::Trophy,
        color: GradientToken::new("#22c55e", "#10b981"),
    },
    Category {
        title: "Healthcare",
        icon: Icon::Trophy,
        color: GradientToken::new("#ef4444", "#f43f5e"),
    },
    Category {
        title: "Young Achiever",
        icon: Icon::Trophy,
        color: GradientToken::new("#eab308", "#f59e0b"),
    },
    Category {
        title: "Lifetime Achievement",
        icon: Icon::Trophy,
        color: GradientToken::new("#6366f1", "#8b5cf6"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDetailCard {
    pub title: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub icon: Icon,
    pub banner: GradientToken,
    pub lines: [&'static str; 2],
}

impl EventDetailCard {
    pub fn image_url(&self) -> String {
        config::media_url(self.image)
    }
}

pub const EVENT_DETAILS: [EventDetailCard; 3] = [
    EventDetailCard {
        title: "Date & Time",
        image: "event-calendar.jpg",
        image_alt: "Event Calendar",
        icon: Icon::Calendar,
        banner: GradientToken::new("#fbbf24", "#f97316"),
        lines: ["September 15, 2025", "6:00 PM - 10:00 PM"],
    },
    EventDetailCard {
        title: "Venue",
        image: "event-venue.jpg",
        image_alt: "Event Venue",
        icon: Icon::MapPin,
        banner: GradientToken::new("#c084fc", "#ec4899"),
        lines: ["Grand Community Hall", "123 Main Street, City"],
    },
    EventDetailCard {
        title: "Dress Code",
        image: "event-dress-code.jpg",
        image_alt: "Dress Code",
        icon: Icon::Users,
        banner: GradientToken::new("#60a5fa", "#6366f1"),
        lines: ["Formal Attire", "Traditional Wear Encouraged"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineMilestone {
    pub title: &'static str,
    pub date: &'static str,
    pub color: GradientToken,
    pub ink: &'static str,
}

pub const TIMELINE: [TimelineMilestone; 4] = [
    TimelineMilestone {
        title: "Nominations Open",
        date: "June 1, 2025",
        color: GradientToken::new("#fbbf24", "#f97316"),
        ink: "#92400e",
    },
    TimelineMilestone {
        title: "Nominations Close",
        date: "August 15, 2025",
        color: GradientToken::new("#c084fc", "#ec4899"),
        ink: "#6b21a8",
    },
    TimelineMilestone {
        title: "Finalists Announcement",
        date: "September 1, 2025",
        color: GradientToken::new("#60a5fa", "#6366f1"),
        ink: "#1e40af",
    },
    TimelineMilestone {
        title: "Awards Ceremony",
        date: "September 15, 2025",
        color: GradientToken::new("#4ade80", "#10b981"),
        ink: "#166534",
    },
];

pub const PILLARS: [(&str, &str); 3] = [
    (
        "Our Mission",
        "To inspire excellence and innovation within the Vaishya community by recognizing outstanding contributions.",
    ),
    (
        "Our Vision",
        "To create a platform that celebrates achievement, fosters unity, and promotes the rich heritage of our community.",
    ),
    (
        "Our Values",
        "Excellence, Integrity, Community Service, Innovation, and Cultural Preservation.",
    ),
];

pub const HERO_VIDEO: &str = "awards-background.mp4";
pub const NOMINATION_VIDEO: &str = "awards-background-2.mp4";
pub const HERO_IMAGE: &str = "/placeholder.svg?height=400&width=600";
pub const ABOUT_IMAGE: &str = "community-celebration.jpg";
pub const NOMINATION_IMAGE: &str = "nomination-image.jpg";
pub const GALLERY_IMAGES: [&str; 3] = [
    "awards-gallery-1.jpg",
    "awards-gallery-2.jpg",
    "awards-gallery-3.jpg",
];

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slugify("Education & Research"), "education-research");
        assert_eq!(slugify("Innovation"), "innovation");
        assert_eq!(slugify("  Young Achiever!"), "young-achiever");
    }

    #[test]
    fn criteria_anchors_are_unique() {
        let anchors: HashSet<String> = CATEGORIES.iter().map(|c| c.criteria_anchor()).collect();
        assert_eq!(anchors.len(), CATEGORIES.len());
        assert!(anchors.contains("criteria-arts-culture"));
    }

    #[test]
    fn nav_targets_existing_sections() {
        let hrefs: Vec<String> = NAV_LINKS.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["#about", "#categories", "#details", "#nominate"]);
    }

    #[test]
    fn timeline_is_chronological() {
        let titles: Vec<&str> = TIMELINE.iter().map(|m| m.title).collect();
        assert_eq!(
            titles,
            [
                "Nominations Open",
                "Nominations Close",
                "Finalists Announcement",
                "Awards Ceremony",
            ]
        );
        assert_eq!(TIMELINE.last().map(|m| m.date), Some("September 15, 2025"));
    }

    #[test]
    fn ceremony_date_matches_detail_card() {
        assert_eq!(EVENT_DETAILS[0].lines[0], TIMELINE[3].date);
        assert_eq!(
            EVENT_DETAILS[1].image_url(),
            "https://v0.blob.com/event-venue.jpg"
        );
    }
}
