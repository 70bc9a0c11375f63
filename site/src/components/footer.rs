use super::{Icon, IconStyle, LogoMark};
use crate::content::{BRAND, FOOTER_GROUPS, SOCIAL_LINKS};
use leptos::prelude::*;

/// Brand blurb, social buttons, link columns and the copyright bar.
#[component]
pub fn Footer(
    /// Year in the copyright line
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {year} {BRAND}, Inc. All rights reserved.");

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="/" class="brand">
                            <LogoMark />
                            <span class="brand-name">"Antimatter"<span class="brand-accent">" AI"</span></span>
                        </a>
                        <p class="footer-tagline">
                            "The AI platform built for the next generation of software."
                        </p>
                        <div class="social-links">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| view! {
                                    <a href=social.href class="social-link" aria-label=social.label>
                                        <Icon path=social.icon paint=IconStyle::Filled class="icon icon-sm" />
                                    </a>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    {FOOTER_GROUPS
                        .iter()
                        .map(|group| view! {
                            <div class="footer-column">
                                <h4 class="footer-heading">{group.title}</h4>
                                <ul class="footer-links">
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! {
                                            <li><a href=link.href class="footer-link">{link.label}</a></li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="footer-bottom">
                    <p>{copyright}</p>
                    <p class="system-status">
                        <span class="status-dot"></span>
                        "All systems operational"
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_columns_and_links() {
        let html = render(view! { <Footer year=2025 /> });

        for group in FOOTER_GROUPS {
            assert!(html.contains(group.title));
            for link in group.links {
                assert!(html.contains(link.label));
            }
        }
        for social in SOCIAL_LINKS {
            assert!(html.contains(&format!("aria-label=\"{}\"", social.label)));
        }
    }

    #[test]
    fn copyright_uses_given_year() {
        let html = render(view! { <Footer year=2042 /> });
        assert!(html.contains("© 2042 Antimatter AI, Inc. All rights reserved."));
        assert!(html.contains("All systems operational"));
    }
}
