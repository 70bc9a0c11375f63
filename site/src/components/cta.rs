use super::Reveal;
use crate::motion::{Entrance, Motion};
use leptos::prelude::*;

/// Closing call-to-action banner.
#[component]
pub fn CallToAction() -> impl IntoView {
    let motion = Motion {
        entrance: Entrance::Zoom(0.95),
        duration_ms: 700,
        delay_ms: 0,
    };

    view! {
        <section id="contact" class="section section-cta">
            <div class="container container-narrow">
                <Reveal motion=motion class="cta-card">
                    <div class="cta-glow cta-glow-violet" aria-hidden="true"></div>
                    <div class="cta-glow cta-glow-cyan" aria-hidden="true"></div>
                    <div class="cta-body">
                        <span class="eyebrow eyebrow-violet">"Get Started Today"</span>
                        <h2 class="section-title">
                            "Ready to build with"
                            <br />
                            <span class="gradient-text">"Antimatter AI?"</span>
                        </h2>
                        <p class="cta-description">
                            "Join thousands of developers and companies already shipping AI-powered products. Start free, no credit card required."
                        </p>
                        <div class="cta-actions">
                            <a href="#" class="btn btn-light btn-lg">"Start building free →"</a>
                            <a href="#" class="btn btn-ghost btn-lg">"Schedule a demo"</a>
                        </div>
                        <p class="cta-fineprint">
                            "No credit card required · Free tier forever · Cancel anytime"
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_banner_copy() {
        let html = render(view! { <CallToAction /> });

        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("Get Started Today"));
        assert!(html.contains("Antimatter AI?"));
        assert!(html.contains("Start building free →"));
        assert!(html.contains("Schedule a demo"));
        assert!(html.contains("--reveal-from: scale(0.95)"));
    }
}
