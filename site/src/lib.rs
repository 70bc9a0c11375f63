//! # antimatter-site
//!
//! Leptos components, static content and styles for the Antimatter AI
//! landing page.
//!
//! The same component tree is used two ways:
//!
//! - **Browser** (`csr` feature): the `landing` app mounts [`components::LandingPage`]
//!   to `<body>` and the interactive pieces come alive (mobile menu, scroll
//!   shadow, testimonial carousel, reveal-on-scroll, particle canvas).
//! - **Static** (`ssr` feature, default): [`render_page`] produces a complete
//!   HTML document, readable without JavaScript.
//!
//! ## Quick Start
//!
//! ```rust
//! use antimatter_site::{render_page, SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("built for builders"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - static tables (nav links, features, plans, testimonials...)
//! - [`state`] - UI toggles (menu, carousel, scroll flag)
//! - [`motion`] - entrance animation timing
//! - [`particles`] - hero particle field simulation
//! - [`components`] - Leptos UI components
//! - [`config`] - document metadata, loaded from TOML
//! - [`icons`] - SVG path data
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod icons;
pub mod motion;
pub mod particles;
pub mod state;
pub mod styles;

pub use config::SiteConfig;
pub use error::{Result, SiteError};

use std::path::{Path, PathBuf};

#[cfg(feature = "ssr")]
use components::Document;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page as a static HTML document.
///
/// Reveal animations are rendered in their final state, the particle canvas
/// stays blank, and the footer uses `config.copyright_year` (or the fallback
/// year baked into [`config::DEFAULT_COPYRIGHT_YEAR`]).
///
/// # Example
///
/// ```rust
/// use antimatter_site::{render_page, SiteConfig};
///
/// let html = render_page(&SiteConfig::default());
/// assert!(html.contains("<title>"));
/// assert!(html.contains("id=\"pricing\""));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    let doc = view! { <Document config=config.clone() /> };

    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// File name written by [`write_page`].
pub const INDEX_FILE: &str = "index.html";

/// Write a rendered page to `<out_dir>/index.html`, creating `out_dir` as needed.
///
/// Returns the path of the written file.
pub fn write_page(out_dir: &Path, html: &str) -> Result<PathBuf> {
    let wrap = |source| SiteError::WriteOutput {
        path: out_dir.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(out_dir).map_err(wrap)?;

    let target = out_dir.join(INDEX_FILE);
    std::fs::write(&target, html).map_err(|source| SiteError::WriteOutput {
        path: target.clone(),
        source,
    })?;
    tracing::info!(path = %target.display(), bytes = html.len(), "wrote page");
    Ok(target)
}
