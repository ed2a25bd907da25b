//! Static page content.
//!
//! Every record is `'static` data; nothing here has a lifecycle. All hrefs
//! are inert placeholders: the root path or an in-page anchor.

/// Link shown in the navigation bar (desktop list and mobile panel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Visual weight of a button-styled link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Outline,
}

/// Button-styled anchor (auth actions and section calls to action).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub href: &'static str,
    pub label: &'static str,
    pub emphasis: Emphasis,
    /// Render a trailing arrow glyph.
    pub arrow: bool,
}

/// Semantic glyph for a feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureIcon {
    Zap,
    Shield,
    Users,
    Sparkles,
    TrendingUp,
    Star,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub author_title: &'static str,
    pub rating: usize,
    /// Initials for the avatar stack above the quote.
    pub avatars: &'static [&'static str],
}

/// Checklist entry with a supporting line (CTA panel).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

// =============================================================================
// Navigation
// =============================================================================

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#pricing", label: "Pricing" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const LOGIN: CallToAction = CallToAction {
    href: "#login",
    label: "Log in",
    emphasis: Emphasis::Outline,
    arrow: false,
};

pub const SIGNUP: CallToAction = CallToAction {
    href: "#signup",
    label: "Sign up",
    emphasis: Emphasis::Primary,
    arrow: false,
};

/// Auth entry points, in display order.
pub const AUTH_ACTIONS: &[CallToAction] = &[LOGIN, SIGNUP];

// =============================================================================
// Hero
// =============================================================================

pub const HERO_BADGE: &str = "Now with AI capabilities";
pub const HERO_HEADLINE: &str = "Build amazing products";
pub const HERO_HEADLINE_ACCENT: &str = "faster than ever";
pub const HERO_SUBHEADING: &str = "The all-in-one platform to design, develop, and deploy \
applications at scale. Join thousands of developers building the future.";

pub const HERO_ACTIONS: &[CallToAction] = &[
    CallToAction {
        href: "#signup",
        label: "Get started for free",
        emphasis: Emphasis::Primary,
        arrow: true,
    },
    CallToAction {
        href: "#demo",
        label: "Watch demo",
        emphasis: Emphasis::Outline,
        arrow: false,
    },
];

pub const HERO_PERKS: &[&str] = &[
    "Free 14-day trial",
    "No credit card required",
    "Cancel anytime",
];

// =============================================================================
// Stats and features
// =============================================================================

pub const STATS: &[Stat] = &[
    Stat { value: "99.9%", label: "Uptime SLA" },
    Stat { value: "10k+", label: "Active Users" },
    Stat { value: "150+", label: "Countries" },
    Stat { value: "24/7", label: "Support" },
];

pub const FEATURES_BADGE: &str = "Features";
pub const FEATURES_HEADING: &str = "Everything you need to succeed";
pub const FEATURES_SUBHEADING: &str =
    "Powerful features designed to help you build better products and grow your business.";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: FeatureIcon::Zap,
        title: "Lightning Fast",
        description: "Built with performance in mind. Experience blazing fast load times \
and instant interactions.",
    },
    Feature {
        icon: FeatureIcon::Shield,
        title: "Secure by Default",
        description: "Enterprise-grade security features protect your data with \
industry-leading encryption.",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "Collaborative",
        description: "Work seamlessly with your team in real-time. Built for modern \
collaboration.",
    },
    Feature {
        icon: FeatureIcon::Sparkles,
        title: "AI-Powered",
        description: "Leverage cutting-edge AI to automate workflows and boost productivity.",
    },
    Feature {
        icon: FeatureIcon::TrendingUp,
        title: "Scalable",
        description: "Grows with your business. From startup to enterprise, we've got you \
covered.",
    },
    Feature {
        icon: FeatureIcon::Star,
        title: "Best-in-Class",
        description: "Award-winning platform trusted by thousands of companies worldwide.",
    },
];

// =============================================================================
// Social proof
// =============================================================================

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "This platform has completely transformed how we build and ship products. \
Our team's productivity has increased by 300%.",
    author: "Sarah Johnson",
    author_title: "CTO, TechCorp Inc.",
    rating: 5,
    avatars: &["A", "B", "C", "D", "E"],
};

// =============================================================================
// Call to action
// =============================================================================

pub const CTA_BADGE: &str = "Get Started";
pub const CTA_HEADING: &str = "Ready to transform your workflow?";
pub const CTA_BODY: &str = "Join thousands of teams already building better products with \
our platform. Start your free trial today, no credit card required.";

pub const CTA_ACTIONS: &[CallToAction] = &[
    CallToAction {
        href: "#signup",
        label: "Start free trial",
        emphasis: Emphasis::Primary,
        arrow: true,
    },
    CallToAction {
        href: "#contact",
        label: "Contact sales",
        emphasis: Emphasis::Outline,
        arrow: false,
    },
];

pub const CTA_BENEFITS: &[Benefit] = &[
    Benefit {
        title: "14-day free trial",
        detail: "Full access to all features",
    },
    Benefit {
        title: "No credit card required",
        detail: "Start building immediately",
    },
    Benefit {
        title: "Cancel anytime",
        detail: "No long-term commitment",
    },
    Benefit {
        title: "24/7 support",
        detail: "We're here to help you succeed",
    },
];

// =============================================================================
// Footer
// =============================================================================

pub const FOOTER_BLURB: &str =
    "Building the future of software development, one line of code at a time.";

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink { href: "#features", label: "Features" },
            NavLink { href: "#pricing", label: "Pricing" },
            NavLink { href: "#docs", label: "Documentation" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink { href: "#about", label: "About" },
            NavLink { href: "#blog", label: "Blog" },
            NavLink { href: "#careers", label: "Careers" },
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            NavLink { href: "#privacy", label: "Privacy" },
            NavLink { href: "#terms", label: "Terms" },
            NavLink { href: "#security", label: "Security" },
        ],
    },
];

/// Every navigational target the page may link to.
pub const KNOWN_TARGETS: &[&str] = &[
    "/",
    "#features",
    "#pricing",
    "#about",
    "#contact",
    "#signup",
    "#login",
    "#docs",
    "#blog",
    "#careers",
    "#privacy",
    "#terms",
    "#security",
    "#demo",
];

/// All hrefs used anywhere on the page, in render order.
pub fn all_hrefs() -> Vec<&'static str> {
    NAV_LINKS
        .iter()
        .map(|l| l.href)
        .chain(AUTH_ACTIONS.iter().map(|a| a.href))
        .chain(HERO_ACTIONS.iter().map(|a| a.href))
        .chain(CTA_ACTIONS.iter().map(|a| a.href))
        .chain(
            FOOTER_COLUMNS
                .iter()
                .flat_map(|c| c.links.iter().map(|l| l.href)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_fixed_list_sizes() {
        assert_eq!(NAV_LINKS.len(), 5);
        assert_eq!(AUTH_ACTIONS.len(), 2);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(STATS.len(), 4);
        assert_eq!(FOOTER_COLUMNS.len(), 3);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 3));
    }

    #[test]
    fn test_every_href_is_a_known_target() {
        let known: HashSet<_> = KNOWN_TARGETS.iter().copied().collect();
        for href in all_hrefs() {
            assert!(known.contains(href), "unexpected target {href}");
            assert!(href == "/" || href.starts_with('#'));
        }
    }

    #[test]
    fn test_every_known_target_is_used() {
        let used: HashSet<_> = all_hrefs().into_iter().collect();
        for target in KNOWN_TARGETS {
            assert!(used.contains(target), "{target} never rendered");
        }
    }

    #[test]
    fn test_feature_icons_are_distinct() {
        let icons: HashSet<_> = FEATURES.iter().map(|f| f.icon).collect();
        assert_eq!(icons.len(), FEATURES.len());
    }

    #[test]
    fn test_records_are_populated() {
        assert!(FEATURES
            .iter()
            .all(|f| !f.title.is_empty() && !f.description.is_empty()));
        assert!(STATS.iter().all(|s| !s.value.is_empty() && !s.label.is_empty()));
        assert!(!TESTIMONIAL.quote.is_empty());
        assert_eq!(TESTIMONIAL.rating, 5);
        assert_eq!(TESTIMONIAL.avatars.len(), 5);
    }

    #[test]
    fn test_auth_actions_order() {
        assert_eq!(AUTH_ACTIONS[0].href, "#login");
        assert_eq!(AUTH_ACTIONS[0].emphasis, Emphasis::Outline);
        assert_eq!(AUTH_ACTIONS[1].href, "#signup");
        assert_eq!(AUTH_ACTIONS[1].emphasis, Emphasis::Primary);
    }
}
