//! Static page content: showcase tiles, feature cards, pricing tiers, and
//! footer links.
//!
//! DESIGN
//! ======
//! Content is plain `const` tables so components stay stateless and render
//! the same records on the server and in the browser.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const PRODUCT_NAME: &str = "PodcastAI";
pub const TAGLINE: &str = "Transform your ideas into professional podcasts with the power of AI.";

/// Hero image tile.
#[derive(Clone, Copy, Debug)]
pub struct ShowcaseTile {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
}

pub const SHOWCASE: &[ShowcaseTile] = &[
    ShowcaseTile {
        title: "Content Creation",
        blurb: "Generate engaging scripts and stories with AI assistance",
        image_url: "https://images.unsplash.com/photo-1661956602116-aa6865609028?auto=format&fit=crop&q=80&w=800",
        image_alt: "Podcast Recording",
    },
    ShowcaseTile {
        title: "Voice Synthesis",
        blurb: "Choose from premium AI voices or clone your own",
        image_url: "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?auto=format&fit=crop&q=80&w=800",
        image_alt: "Voice Recording",
    },
    ShowcaseTile {
        title: "Audio Production",
        blurb: "Professional editing and sound effects automatically applied",
        image_url: "https://images.unsplash.com/photo-1478737270239-2f02b77fc618?auto=format&fit=crop&q=80&w=800",
        image_alt: "Audio Production",
    },
];

/// "How It Works" card.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "AI Script Generation",
        description: "Input your topic and our AI creates engaging, well-researched scripts tailored to your style.",
    },
    Feature {
        icon: "🪄",
        title: "Voice Synthesis",
        description: "Choose from premium AI voices or clone your own voice for authentic delivery.",
    },
    Feature {
        icon: "🎙",
        title: "Production Ready",
        description: "Automatically add music, sound effects, and professional editing.",
    },
];

/// One pricing plan. `price` is whole US dollars per month.
#[derive(Clone, Copy, Debug)]
pub struct PricingTier {
    pub title: &'static str,
    pub price: u32,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl PricingTier {
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        title: "Starter",
        price: 29,
        features: &["2 hours of content per month", "Basic AI voices", "Standard templates", "Email support"],
        highlighted: false,
    },
    PricingTier {
        title: "Professional",
        price: 79,
        features: &[
            "10 hours of content per month",
            "Premium AI voices",
            "Custom templates",
            "Voice cloning",
            "Priority support",
        ],
        highlighted: true,
    },
    PricingTier {
        title: "Enterprise",
        price: 199,
        features: &[
            "Unlimited content",
            "All premium features",
            "Custom voice training",
            "Dedicated support",
            "API access",
        ],
        highlighted: false,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[
            Link { label: "Features", href: "#features" },
            Link { label: "Pricing", href: "#pricing" },
            Link { label: "API", href: "#" },
            Link { label: "Documentation", href: "#" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            Link { label: "About Us", href: "#" },
            Link { label: "Careers", href: "#" },
            Link { label: "Blog", href: "#" },
            Link { label: "Contact", href: "#" },
        ],
    },
];

/// Social links; `label` doubles as the accessible name.
pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "#" },
    Link { label: "Twitter", href: "#" },
    Link { label: "Instagram", href: "#" },
    Link { label: "Email", href: "#" },
];

pub const LEGAL_LINKS: &[Link] = &[
    Link { label: "Privacy Policy", href: "#" },
    Link { label: "Terms of Service", href: "#" },
    Link { label: "Cookie Policy", href: "#" },
];

/// Anchors the navigation bar links to.
pub const NAV_LINKS: &[Link] = &[
    Link { label: "Features", href: "#features" },
    Link { label: "Pricing", href: "#pricing" },
];

pub const COPYRIGHT: &str = "© 2025 PodcastAI. All rights reserved.";
