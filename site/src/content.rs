//! Static page content.
//!
//! All tables are `&'static` and never mutated; a record's identity is its
//! position in the table.

use crate::icons::{
    ICON_BOLT, ICON_CHART_BAR, ICON_FINGERPRINT, ICON_GITHUB, ICON_LINKEDIN, ICON_PUZZLE,
    ICON_SHIELD_CHECK, ICON_SPARKLES, ICON_X,
};

/// Product name as shown in the nav, footer and CTA.
pub const BRAND: &str = "Antimatter AI";

/// Anchor ids of the page sections, in render order.
pub const SECTION_IDS: &[&str] = &[
    "hero",
    "features",
    "product",
    "solutions",
    "testimonials",
    "pricing",
    "contact",
];

/// Anchors that are linked but intentionally have no section yet.
pub const PLACEHOLDER_ANCHORS: &[&str] = &["#", "#blog"];

/// A labelled link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text
    pub label: &'static str,
    /// Target (in-page anchor)
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// Primary navigation.
pub const NAV_LINKS: &[NavLink] = &[
    link("Product", "#product"),
    link("Solutions", "#solutions"),
    link("Features", "#features"),
    link("Pricing", "#pricing"),
    link("Blog", "#blog"),
];

/// A headline number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Displayed value ("1.2M", "99.99%")
    pub value: &'static str,
    /// Caption
    pub label: &'static str,
    /// Optional trend ("+18%")
    pub change: Option<&'static str>,
}

/// Dashboard mock in the hero card.
pub const HERO_STATS: &[Stat] = &[
    Stat { value: "1.2M", label: "AI Requests", change: Some("+18%") },
    Stat { value: "42ms", label: "Avg Latency", change: Some("-23%") },
    Stat { value: "98.7%", label: "Accuracy", change: Some("+2.1%") },
];

/// Stats row under the testimonials.
pub const PLATFORM_STATS: &[Stat] = &[
    Stat { value: "5B+", label: "API calls served", change: None },
    Stat { value: "99.99%", label: "Uptime SLA", change: None },
    Stat { value: "<50ms", label: "Average latency", change: None },
    Stat { value: "120+", label: "Countries served", change: None },
];

/// Colour treatment of a feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    /// CSS gradient for the icon tile
    pub gradient: &'static str,
    /// rgba() glow used for the hover halo and icon shadow
    pub glow: &'static str,
}

/// A feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
    /// Outline icon path data
    pub icon: &'static str,
    /// Colour treatment
    pub accent: Accent,
}

/// Feature grid.
pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Intelligent Generation",
        description: "State-of-the-art language models fine-tuned for your domain. Generate content, code, insights, and more with unmatched accuracy.",
        icon: ICON_SPARKLES,
        accent: Accent {
            gradient: "linear-gradient(135deg, #7c3aed, #7e22ce)",
            glow: "rgba(124, 58, 237, 0.2)",
        },
    },
    Feature {
        title: "Real-time Processing",
        description: "Sub-50ms response times powered by our distributed edge infrastructure. Scale to millions of requests without breaking a sweat.",
        icon: ICON_BOLT,
        accent: Accent {
            gradient: "linear-gradient(135deg, #0891b2, #1d4ed8)",
            glow: "rgba(6, 182, 212, 0.2)",
        },
    },
    Feature {
        title: "Adaptive Learning",
        description: "Models that continuously improve from your data. The more you use Antimatter AI, the smarter and more tailored it becomes.",
        icon: ICON_FINGERPRINT,
        accent: Accent {
            gradient: "linear-gradient(135deg, #059669, #0f766e)",
            glow: "rgba(16, 185, 129, 0.2)",
        },
    },
    Feature {
        title: "Enterprise Security",
        description: "SOC 2 Type II certified. Your data never trains our base models. Private deployments, VPC options, and end-to-end encryption.",
        icon: ICON_SHIELD_CHECK,
        accent: Accent {
            gradient: "linear-gradient(135deg, #ea580c, #b91c1c)",
            glow: "rgba(234, 88, 12, 0.2)",
        },
    },
    Feature {
        title: "Seamless Integration",
        description: "Drop-in SDKs for Python, JavaScript, Go, and Rust. REST & GraphQL APIs. Works with the tools you already love.",
        icon: ICON_PUZZLE,
        accent: Accent {
            gradient: "linear-gradient(135deg, #db2777, #be123c)",
            glow: "rgba(219, 39, 119, 0.2)",
        },
    },
    Feature {
        title: "Advanced Analytics",
        description: "Full observability into your AI pipeline. Track usage, costs, accuracy, and performance with real-time dashboards.",
        icon: ICON_CHART_BAR,
        accent: Accent {
            gradient: "linear-gradient(135deg, #7c3aed, #4338ca)",
            glow: "rgba(99, 102, 241, 0.2)",
        },
    },
];

/// Colour family shared by a use-case card's border and wash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Violet
    Violet,
    /// Cyan
    Cyan,
    /// Emerald
    Emerald,
}

impl Tone {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Violet => "tone-violet",
            Tone::Cyan => "tone-cyan",
            Tone::Emerald => "tone-emerald",
        }
    }
}

/// A product use-case card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseCase {
    /// Eyebrow label
    pub category: &'static str,
    /// Card title
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
    /// Bullet list
    pub items: &'static [&'static str],
    /// Colour family
    pub tone: Tone,
}

/// Product use cases.
pub const USE_CASES: &[UseCase] = &[
    UseCase {
        category: "Content Creation",
        title: "AI writing that sounds like you",
        description: "Generate blog posts, marketing copy, documentation, and more—trained on your brand voice and style guide.",
        items: &["Blog post generation", "SEO optimization", "Brand voice matching", "Multi-language"],
        tone: Tone::Violet,
    },
    UseCase {
        category: "Code Intelligence",
        title: "Ship code faster with AI copilot",
        description: "Auto-complete, refactor, review, and document code across 30+ languages with context-aware suggestions.",
        items: &["Code completion", "Bug detection", "Automated tests", "Documentation"],
        tone: Tone::Cyan,
    },
    UseCase {
        category: "Data Analysis",
        title: "Turn raw data into decisions",
        description: "Ask questions in plain English and get instant insights from your databases, spreadsheets, and data warehouses.",
        items: &["Natural language queries", "Chart generation", "Anomaly detection", "Predictions"],
        tone: Tone::Emerald,
    },
];

/// Status of a line in the training pipeline mock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStatus {
    /// Finished
    Done,
    /// In progress
    Running,
    /// Not started
    Pending,
}

impl PipelineStatus {
    /// Leading glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            PipelineStatus::Done => "✓",
            PipelineStatus::Running => "◉",
            PipelineStatus::Pending => "○",
        }
    }

    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            PipelineStatus::Done => "pipeline-done",
            PipelineStatus::Running => "pipeline-running",
            PipelineStatus::Pending => "pipeline-pending",
        }
    }
}

/// One line of the pipeline mock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineLine {
    /// Status
    pub status: PipelineStatus,
    /// Log text
    pub text: &'static str,
}

/// A deployment region in the "deploy anywhere" mock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Region name
    pub name: &'static str,
    /// Round-trip latency label
    pub latency: &'static str,
}

/// Illustration shown beside a how-it-works step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepVisual {
    /// Data source chips
    Sources(&'static [&'static str]),
    /// Training log
    Pipeline(&'static [PipelineLine]),
    /// Healthy regions grid
    Regions(&'static [Region]),
    /// Bar chart, heights in percent
    Bars(&'static [u8]),
}

/// A how-it-works step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Two-digit ordinal ("01")
    pub number: &'static str,
    /// Step title
    pub title: &'static str,
    /// Step body
    pub description: &'static str,
    /// Illustration
    pub visual: StepVisual,
}

/// How-it-works timeline.
pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Connect your data",
        description: "Ingest structured and unstructured data from any source—databases, APIs, documents, or real-time streams. Our intelligent connectors handle the heavy lifting.",
        visual: StepVisual::Sources(&["PostgreSQL", "S3", "Snowflake", "Kafka", "REST API"]),
    },
    Step {
        number: "02",
        title: "Build and fine-tune",
        description: "Choose from our pre-built model catalog or fine-tune on your proprietary data. Our AutoML pipeline handles hyperparameter optimization automatically.",
        visual: StepVisual::Pipeline(&[
            PipelineLine { status: PipelineStatus::Done, text: "Data preprocessing complete" },
            PipelineLine { status: PipelineStatus::Done, text: "Model initialized (7B params)" },
            PipelineLine { status: PipelineStatus::Running, text: "Fine-tuning epoch 3/10 — loss: 0.089" },
            PipelineLine { status: PipelineStatus::Pending, text: "Evaluation pending..." },
        ]),
    },
    Step {
        number: "03",
        title: "Deploy anywhere",
        description: "One-click deployment to our global edge network or your own infrastructure. Auto-scaling, zero-downtime updates, and built-in monitoring included.",
        visual: StepVisual::Regions(&[
            Region { name: "US-East", latency: "12ms" },
            Region { name: "EU-West", latency: "18ms" },
            Region { name: "AP-South", latency: "24ms" },
        ]),
    },
    Step {
        number: "04",
        title: "Monitor and improve",
        description: "Real-time dashboards track accuracy, latency, and cost. Detect drift automatically and trigger retraining workflows to keep your models sharp.",
        visual: StepVisual::Bars(&[40, 60, 45, 80, 65, 90, 75, 95, 70, 88]),
    },
];

/// A customer quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Quote body (without quotation marks)
    pub quote: &'static str,
    /// Person quoted
    pub author: &'static str,
    /// Job title
    pub role: &'static str,
    /// Employer
    pub company: &'static str,
    /// Avatar initials
    pub avatar: &'static str,
    /// Avatar background gradient
    pub gradient: &'static str,
}

/// Customer stories, in carousel order.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Antimatter AI cut our ML development cycle from 6 months to 3 weeks. The fine-tuning pipeline is extraordinary—we went from prototype to production without a single DevOps headache.",
        author: "Sarah Chen",
        role: "CTO",
        company: "Nexus Health",
        avatar: "SC",
        gradient: "linear-gradient(135deg, #8b5cf6, #9333ea)",
    },
    Testimonial {
        quote: "We processed 50 million documents in our first month. The accuracy improvements from their adaptive learning blew our previous vendor's metrics out of the water. Genuinely transformative.",
        author: "Marcus Rivera",
        role: "Head of AI",
        company: "Orbital Finance",
        avatar: "MR",
        gradient: "linear-gradient(135deg, #06b6d4, #2563eb)",
    },
    Testimonial {
        quote: "The security posture was a non-negotiable for us. Antimatter AI was the only platform that met our compliance requirements out of the box, and the performance is best-in-class.",
        author: "Priya Nair",
        role: "VP Engineering",
        company: "Fortis Cloud",
        avatar: "PN",
        gradient: "linear-gradient(135deg, #10b981, #0d9488)",
    },
    Testimonial {
        quote: "Their SDK integration took literally 15 minutes. I've never deployed an AI service this fast. It's exactly what developer experience should feel like in 2024.",
        author: "Tom Okafor",
        role: "Staff Engineer",
        company: "BuildKit",
        avatar: "TO",
        gradient: "linear-gradient(135deg, #f97316, #dc2626)",
    },
];

/// "Trusted by" wordmarks.
pub const TRUSTED_BY: &[&str] = &[
    "Accenture", "MongoDB", "Vercel", "Stripe", "Notion", "Linear", "Figma", "Datadog",
];

/// A pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Tier name
    pub name: &'static str,
    /// Price label ("$49", "Custom")
    pub price: &'static str,
    /// Billing period suffix, empty when not applicable
    pub period: &'static str,
    /// One-line pitch
    pub description: &'static str,
    /// Included features
    pub features: &'static [&'static str],
    /// Button label
    pub cta: &'static str,
    /// Button target
    pub href: &'static str,
    /// Visually emphasised tier
    pub highlighted: bool,
    /// Ribbon above the card
    pub badge: Option<&'static str>,
}

/// Pricing table.
pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$0",
        period: "/month",
        description: "Perfect for prototyping and side projects",
        features: &[
            "1M tokens / month",
            "3 model deployments",
            "Community support",
            "REST & SDK access",
            "Basic analytics",
        ],
        cta: "Start for free",
        href: "#contact",
        highlighted: false,
        badge: None,
    },
    Plan {
        name: "Pro",
        price: "$49",
        period: "/month",
        description: "For teams building serious AI products",
        features: &[
            "50M tokens / month",
            "Unlimited deployments",
            "Priority support (SLA 4h)",
            "Fine-tuning included",
            "Advanced analytics",
            "Team collaboration",
            "Custom domains",
        ],
        cta: "Start Pro trial",
        href: "#contact",
        highlighted: true,
        badge: Some("Most Popular"),
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "For organizations with mission-critical AI",
        features: &[
            "Unlimited tokens",
            "Private cloud / VPC",
            "Dedicated support & SLA",
            "Custom model training",
            "SSO / SAML",
            "SOC 2 compliance",
            "SLA guarantees",
        ],
        cta: "Talk to sales",
        href: "#contact",
        highlighted: false,
        badge: None,
    },
];

/// A titled column of footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterGroup {
    /// Column heading
    pub title: &'static str,
    /// Links
    pub links: &'static [NavLink],
}

/// Footer link columns.
pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Product",
        links: &[
            link("Features", "#features"),
            link("Pricing", "#pricing"),
            link("Changelog", "#"),
            link("Roadmap", "#"),
        ],
    },
    FooterGroup {
        title: "Solutions",
        links: &[
            link("Enterprise", "#"),
            link("Startups", "#"),
            link("Developers", "#"),
            link("Research", "#"),
        ],
    },
    FooterGroup {
        title: "Resources",
        links: &[
            link("Documentation", "#"),
            link("API Reference", "#"),
            link("Blog", "#blog"),
            link("Community", "#"),
        ],
    },
    FooterGroup {
        title: "Company",
        links: &[
            link("About", "#"),
            link("Careers", "#"),
            link("Privacy", "#"),
            link("Terms", "#"),
        ],
    },
];

/// A social profile button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Accessible name
    pub label: &'static str,
    /// Target
    pub href: &'static str,
    /// Filled icon path data (24x24)
    pub icon: &'static str,
}

/// Footer social buttons.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", href: "#", icon: ICON_X },
    SocialLink { label: "GitHub", href: "#", icon: ICON_GITHUB },
    SocialLink { label: "LinkedIn", href: "#", icon: ICON_LINKEDIN },
];

/// Every in-page href used by nav, plans and footer.
pub fn all_hrefs() -> impl Iterator<Item = &'static str> {
    NAV_LINKS
        .iter()
        .map(|l| l.href)
        .chain(PLANS.iter().map(|p| p.href))
        .chain(FOOTER_GROUPS.iter().flat_map(|g| g.links.iter().map(|l| l.href)))
        .chain(SOCIAL_LINKS.iter().map(|s| s.href))
}

/// True when `href` points at a rendered section or a known placeholder.
pub fn is_known_anchor(href: &str) -> bool {
    if PLACEHOLDER_ANCHORS.contains(&href) {
        return true;
    }
    href.strip_prefix('#')
        .is_some_and(|id| SECTION_IDS.contains(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_href_is_a_known_anchor() {
        for href in all_hrefs() {
            assert!(is_known_anchor(href), "dangling anchor: {href}");
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        assert!(!is_known_anchor("#nowhere"));
        assert!(!is_known_anchor("pricing"));
        assert!(is_known_anchor("#pricing"));
    }

    #[test]
    fn exactly_one_highlighted_plan_carries_the_badge() {
        let highlighted: Vec<_> = PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Pro");
        for plan in PLANS {
            assert_eq!(plan.badge.is_some(), plan.highlighted, "{}", plan.name);
        }
    }

    #[test]
    fn avatars_are_author_initials() {
        for t in TESTIMONIALS {
            let initials: String = t
                .author
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .collect();
            assert_eq!(t.avatar, initials);
        }
    }

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn bar_heights_are_percentages() {
        for step in STEPS {
            if let StepVisual::Bars(bars) = step.visual {
                assert!(bars.iter().all(|h| *h <= 100));
            }
        }
    }
}
