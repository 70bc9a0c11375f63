//! Whole-page checks against the static render.

#![cfg(feature = "ssr")]

use antimatter_site::content::{self, SECTION_IDS};
use antimatter_site::{SiteConfig, render_page};
use pretty_assertions::assert_eq;

fn page() -> String {
    render_page(&SiteConfig::default())
}

#[test]
fn sections_appear_once_in_order() {
    let html = page();

    let positions: Vec<usize> = SECTION_IDS
        .iter()
        .map(|id| {
            let needle = format!("id=\"{id}\"");
            assert_eq!(html.matches(&needle).count(), 1, "section {id}");
            html.find(&needle).unwrap_or_default()
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

/// Every `href="#..."` value in rendered markup, in document order.
fn in_page_hrefs(html: &str) -> Vec<&str> {
    html.match_indices("href=\"#")
        .filter_map(|(at, needle)| {
            let start = at + needle.len() - 1;
            let len = html[start..].find('"')?;
            Some(&html[start..start + len])
        })
        .collect()
}

#[test]
fn every_content_anchor_has_a_target() {
    let html = page();

    for href in content::all_hrefs() {
        if content::PLACEHOLDER_ANCHORS.contains(&href) {
            continue;
        }
        if let Some(id) = href.strip_prefix('#') {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "{href} points nowhere"
            );
        }
    }
}

#[test]
fn every_rendered_anchor_has_a_target() {
    let html = page();
    let hrefs = in_page_hrefs(&html);

    // nav, hero CTAs, plans, footer, cta banner
    assert!(hrefs.len() > 20, "only found {hrefs:?}");
    for href in hrefs {
        if content::PLACEHOLDER_ANCHORS.contains(&href) {
            continue;
        }
        assert!(content::is_known_anchor(href), "{href} is not a section anchor");
        let id = &href[1..];
        assert!(
            html.contains(&format!("id=\"{id}\"")),
            "{href} points nowhere"
        );
    }
}

#[test]
fn collects_hrefs_from_markup() {
    let html = r##"<a href="#hero">x</a><a href="/">y</a><a href="#">z</a>"##;
    assert_eq!(in_page_hrefs(html), vec!["#hero", "#"]);
}

#[test]
fn static_page_needs_no_script() {
    let html = page();

    assert!(!html.contains("<script"));
    assert!(html.contains("<body class=\"static\">"));
}

#[test]
fn config_file_drives_metadata() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("site.toml");
    std::fs::write(
        &path,
        r#"
lang = "de"
copyright_year = 2030

[meta]
title = "Antimatter AI Preview"
keywords = ["ai", "platform"]

[meta.open_graph]
kind = "article"
"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    let html = render_page(&config);

    assert!(html.contains("lang=\"de\""));
    assert!(html.contains("<title>Antimatter AI Preview</title>"));
    assert!(html.contains("content=\"ai, platform\""));
    assert!(html.contains("content=\"article\""));
    assert!(html.contains("© 2030 Antimatter AI, Inc."));
}
