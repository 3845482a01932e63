//! # Content
//!
//! Hardcoded copy for every section of the page.
//!
//! Records have no identity beyond their position in a fixed slice; nothing
//! here changes at runtime.

use serde::Serialize;

/// Icons referenced by content records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    TreePine,
    Globe,
    Award,
    Truck,
    Clock,
    Phone,
    Mail,
    MapPin,
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
    Check,
}

impl Icon {
    /// Stable kebab-case name, used as the icon's CSS class suffix.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::TreePine => "tree-pine",
            Icon::Globe => "globe",
            Icon::Award => "award",
            Icon::Truck => "truck",
            Icon::Clock => "clock",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Facebook => "facebook",
            Icon::Instagram => "instagram",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Check => "check",
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

/// An image placeholder with alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub company: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub summary: &'static str,
    pub badges: &'static [&'static str],
    pub image: Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct About {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub image: Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturesBlock {
    pub heading: &'static str,
    pub highlight: &'static str,
    pub subheading: &'static str,
    pub items: &'static [Feature],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clients {
    pub heading: &'static str,
    pub logos: &'static [Image],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Values {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub hours_heading: &'static str,
    pub hours: &'static str,
    pub timezone: &'static str,
    pub location: &'static str,
    pub location_note: &'static str,
    pub contact_heading: &'static str,
    pub items: &'static [ContactItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub company: &'static str,
    pub tagline: &'static str,
    pub social: &'static [Icon],
    pub columns: &'static [FooterColumn],
    pub copyright: &'static str,
}

/// Everything the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub stats: &'static [Stat],
    pub about: About,
    pub features: FeaturesBlock,
    pub clients: Clients,
    pub values: Values,
    pub contact: Contact,
    pub footer: Footer,
}

impl SiteContent {
    /// The built-in Kharisma Perkasa Makmur content.
    #[must_use]
    pub fn kharisma() -> &'static SiteContent {
        &KHARISMA
    }
}

// =============================================================================
// KHARISMA PERKASA MAKMUR
// =============================================================================

const STATS: &[Stat] = &[
    Stat {
        icon: Icon::Globe,
        value: "40+",
        label: "Continents Reached",
    },
    Stat {
        icon: Icon::Award,
        value: "14+",
        label: "Years Experience",
    },
    Stat {
        icon: Icon::Truck,
        value: "1,500+",
        label: "Containers Delivered",
    },
];

const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::TreePine,
        title: "Sustainable Materials",
        description: "SVLK-certified Indonesian hardwood including teak, mahogany, and mindi wood sourced from managed forests.",
    },
    Feature {
        icon: Icon::Award,
        title: "Quality Assurance",
        description: "With extensive industry experience, we guarantee quality through our robust processes.",
    },
    Feature {
        icon: Icon::Globe,
        title: "Global Logistics",
        description: "Experienced in international shipping with proper documentation for customs clearance worldwide.",
    },
];

const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem {
        icon: Icon::Phone,
        label: "Phone:",
        value: "+62 291 123 4567",
    },
    ContactItem {
        icon: Icon::Phone,
        label: "WhatsApp:",
        value: "+62 812 3456 7890",
    },
    ContactItem {
        icon: Icon::Mail,
        label: "Sales:",
        value: "sales@kharismapm.co.id",
    },
    ContactItem {
        icon: Icon::Mail,
        label: "Export:",
        value: "export@kharismapm.co.id",
    },
];

const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Products",
        links: &[
            "Bedroom Furniture",
            "Dining Sets",
            "Living Room",
            "Office Furniture",
            "Custom Orders",
        ],
    },
    FooterColumn {
        title: "Services",
        links: &[
            "Manufacturing",
            "Design Consultation",
            "Global Shipping",
            "Quality Control",
            "Customer Support",
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            "About Us",
            "Careers",
            "Sustainability",
            "Certifications",
            "News & Updates",
        ],
    },
    FooterColumn {
        title: "Contact Info",
        links: &[
            "+62 291 123 4567",
            "export@kharismapm.co.id",
            "Jepara, Central Java, Indonesia",
        ],
    },
];

static KHARISMA: SiteContent = SiteContent {
    hero: Hero {
        company: "KHARISMA PERKASA MAKMUR",
        headline: "Crafting Furniture tailored to",
        highlight: "Global Markets",
        summary: "From sustainable Indonesian wood directly to your business, no matter where you are in the world. \
                  We provide outstanding quality, competitive pricing, and dependable supply chains for international retailers.",
        badges: &["SVLK Timber Legality", "Global Shipping"],
        image: Image {
            src: "/placeholder.svg?height=400&width=500",
            alt: "Premium furniture",
        },
    },
    stats: STATS,
    about: About {
        heading: "About Us",
        paragraphs: &[
            "With over a decade of experience in indoor furniture manufacturing, we deliver high-quality products \
             that meet international standards while maintaining competitive pricing for global markets. As a trusted \
             supplier to several leading retailers, we understand the need for dependable supply, consistent quality, \
             and customer-ready designs that balance style and affordability.",
            "Our production facility is equipped with an in-house kiln dry system, which allows us to maintain precise \
             wood moisture levels. This ensures the durability and stability of every piece we craft, from bedroom sets \
             and dining furniture to custom commercial pieces, ready for export worldwide.",
        ],
        image: Image {
            src: "/placeholder.svg?height=400&width=400",
            alt: "Factory in Jepara, Indonesia",
        },
    },
    features: FeaturesBlock {
        heading: "Why Choose",
        highlight: "Our Furniture",
        subheading: "Local craftsmanship meets international quality standards.",
        items: FEATURES,
    },
    clients: Clients {
        heading: "Trusted by Retailers Worldwide",
        logos: &[],
    },
    values: Values {
        heading: "Everyone is Welcome",
        tagline: "Our aim is to build lasting partnerships across cultures and continents",
        body: "At Kharisma Perkasa Makmur, we believe in the power of collaboration without boundaries. Whether you're \
               a small boutique retailer or a large furniture chain, we welcome partnerships that create mutual growth.",
    },
    contact: Contact {
        hours_heading: "Business Hours",
        hours: "Monday - Friday: 8:00 AM \u{2013} 5:00 PM",
        timezone: "Western Indonesia Time (WIB)",
        location: "Gresik, East Java, Indonesia",
        location_note: "For inquiries or to schedule a visit, please contact us. \
                        We would be delighted to provide you with a tour of our facility.",
        contact_heading: "Contact Us",
        items: CONTACT_ITEMS,
    },
    footer: Footer {
        company: "Kharisma Perkasa Makmur",
        tagline: "Premium Indonesian furniture manufacturer serving global markets since 2008.",
        social: &[Icon::Facebook, Icon::Instagram, Icon::Linkedin, Icon::Twitter],
        columns: FOOTER_COLUMNS,
        copyright: "\u{a9} 2024 Kharisma Perkasa Makmur. All rights reserved.",
    },
};

// =============================================================================
// TESTS
// =============================================================================
