//! Root document component for the static render.

use super::LandingPage;
use crate::config::SiteConfig;
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

/// The complete HTML document: metadata, inlined CSS and the page body.
///
/// `<body class="static">` switches every reveal to its final state, since
/// no script runs to observe them.
#[component]
pub fn Document(config: SiteConfig) -> impl IntoView {
    let year = config.year();
    let keywords = config.keywords_content();
    let SiteConfig { lang, meta, .. } = config;
    let og = meta.open_graph;
    let open_graph = (
        og_tag("og:title", og.title),
        og_tag("og:description", og.description),
        og_tag("og:type", og.kind),
    );

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <meta name="keywords" content=keywords />
                {open_graph}
                <style>{PAGE_CSS}</style>
            </head>
            <body class="static">
                <div class="noise" aria-hidden="true"></div>
                <LandingPage year=year />
            </body>
        </html>
    }
}

/// `<meta property=.. content=..>`; `property` is not a typed `<meta>` attribute.
fn og_tag(property: &'static str, content: String) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .attr("content", content)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_open_graph_tags() {
        let html = render(view! { <Document config=SiteConfig::default() /> });

        assert!(html.contains("property=\"og:title\""));
        assert!(html.contains("property=\"og:description\""));
        assert!(html.contains("property=\"og:type\" content=\"website\""));
        assert!(html.contains("name=\"viewport\""));
    }

    #[test]
    fn honours_language() {
        let config = SiteConfig {
            lang: "pl".into(),
            ..SiteConfig::default()
        };
        let html = render(view! { <Document config=config /> });
        assert!(html.contains("lang=\"pl\""));
    }
}
