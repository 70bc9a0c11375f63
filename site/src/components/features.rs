use super::{Icon, Reveal, SectionHeader};
use crate::content::{FEATURES, Feature};
use crate::motion::{FEATURE_STAGGER_MS, Motion, stagger};
use leptos::prelude::*;

/// Six-card capability grid.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section section-features">
            <div class="container">
                <SectionHeader
                    eyebrow="Platform Capabilities"
                    description="A unified platform that takes you from prototype to production—without stitching together a dozen different tools."
                >
                    "Everything you need to "
                    <span class="gradient-text">"ship AI products"</span>
                </SectionHeader>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=feature index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, index: usize) -> impl IntoView {
    let motion = Motion::rise(40.0, 600).delayed(stagger(index, FEATURE_STAGGER_MS));
    let halo = format!(
        "background: radial-gradient(circle at 50% 0%, {}, transparent 70%)",
        feature.accent.glow
    );
    let tile = format!(
        "background: {}; box-shadow: 0 8px 24px {}",
        feature.accent.gradient, feature.accent.glow
    );

    view! {
        <Reveal motion=motion class="card feature-card">
            <div class="card-halo" style=halo aria-hidden="true"></div>
            <div class="feature-icon" style=tile>
                <Icon path=feature.icon class="icon icon-md" />
            </div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_every_feature() {
        let html = render(view! { <Features /> });

        assert!(html.contains("id=\"features\""));
        assert!(html.contains("Platform Capabilities"));
        assert!(html.contains("ship AI products"));
        for feature in FEATURES {
            assert!(html.contains(feature.title), "missing {}", feature.title);
        }
        assert_eq!(html.matches("feature-card").count(), FEATURES.len());
    }

    #[test]
    fn cards_are_staggered_by_80ms() {
        let html = render(view! { <Features /> });
        assert!(html.contains("--reveal-delay: 0ms"));
        assert!(html.contains("--reveal-delay: 400ms"));
    }
}
