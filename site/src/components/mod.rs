//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! Document (static render only)
//! └── LandingPage
//!     ├── Nav                 (menu toggle, scroll shadow)
//!     ├── main
//!     │   ├── Hero            (ParticleCanvas, dashboard mock)
//!     │   ├── Features        (FeatureCard x6)
//!     │   ├── Product         (UseCaseCard x3, parallax glow)
//!     │   ├── HowItWorks      (StepItem x4)
//!     │   ├── Testimonials    (carousel)
//!     │   ├── Pricing         (PlanCard x3)
//!     │   └── CallToAction
//!     └── Footer
//! ```
//!
//! Every section reads from [`crate::content`] and owns its own UI state;
//! nothing flows between sections.

mod canvas;
mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod nav;
mod page;
mod pricing;
mod product;
mod reveal;
mod section_header;
mod testimonials;

pub use canvas::ParticleCanvas;
pub use cta::CallToAction;
pub use document::Document;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use icons::{Icon, IconStyle, LogoMark};
pub use nav::Nav;
pub use page::LandingPage;
pub use pricing::Pricing;
pub use product::Product;
pub use reveal::Reveal;
pub use section_header::SectionHeader;
pub use testimonials::Testimonials;

/// Render a view to an HTML string for assertions.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render<V: leptos::tachys::view::RenderHtml>(view: V) -> String {
    view.to_html()
}
