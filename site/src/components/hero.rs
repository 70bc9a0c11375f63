use super::{Icon, ParticleCanvas, Reveal};
use crate::content::{BRAND, HERO_STATS, Stat};
use crate::motion::{Entrance, Motion};
use crate::icons::{ICON_ARROW_DOWN, ICON_PLAY};
use leptos::prelude::*;

const HERO_DELAY_MS: u32 = 300;
const HERO_STAGGER_MS: u32 = 120;

fn hero_item(index: u32) -> Motion {
    Motion::rise(30.0, 700).delayed(HERO_DELAY_MS + index * HERO_STAGGER_MS)
}

/// Opening banner: headline, CTAs, social proof and the dashboard mock,
/// over the particle canvas.
#[component]
pub fn Hero() -> impl IntoView {
    let social_proof = format!("developers already building with {BRAND}");
    let mockup = Motion {
        entrance: Entrance::Rise(60.0),
        duration_ms: 1000,
        delay_ms: 900,
    };

    view! {
        <section id="hero" class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="glow glow-violet"></div>
                <div class="glow glow-cyan"></div>
            </div>
            <ParticleCanvas />
            <div class="hero-grid-overlay" aria-hidden="true"></div>

            <div class="container hero-content">
                <Reveal motion=hero_item(0)>
                    <span class="hero-badge">
                        <span class="pulse-dot"></span>
                        "Introducing Antimatter AI v2.0"
                    </span>
                </Reveal>

                <Reveal motion=hero_item(1)>
                    <h1 class="hero-title">
                        <span>"The AI platform"</span>
                        <br />
                        <span class="gradient-text">"built for builders"</span>
                    </h1>
                </Reveal>

                <Reveal motion=hero_item(2)>
                    <p class="hero-description">
                        "Antimatter AI gives your team the intelligence layer to build, deploy, and scale AI-powered products—without the complexity."
                    </p>
                </Reveal>

                <Reveal motion=hero_item(3) class="hero-actions">
                    <a href="#contact" class="btn btn-primary btn-lg btn-pulse">"Start building free"</a>
                    <a href="#product" class="btn btn-ghost btn-lg">
                        "Watch demo"
                        <Icon path=ICON_PLAY stroke_width="2" class="icon icon-sm" />
                    </a>
                </Reveal>

                <Reveal motion=hero_item(4) class="social-proof">
                    <div class="avatar-stack" aria-hidden="true">
                        {(0..5u32)
                            .map(|i| view! {
                                <span class="avatar-dot" style=format!("filter: hue-rotate({}deg)", i * 30)></span>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="social-proof-text">
                        <strong>"5,000+"</strong>
                        " "
                        {social_proof}
                    </p>
                </Reveal>

                <Reveal motion=mockup class="hero-mockup">
                    <DashboardMock />
                </Reveal>
            </div>

            <a href="#features" class="scroll-hint">
                <span>"Scroll"</span>
                <Icon path=ICON_ARROW_DOWN class="icon icon-sm" />
            </a>
        </section>
    }
}

#[component]
fn DashboardMock() -> impl IntoView {
    view! {
        <div class="mockup-card">
            <div class="terminal-header">
                <span class="terminal-dot red"></span>
                <span class="terminal-dot yellow"></span>
                <span class="terminal-dot green"></span>
                <span class="terminal-title">"antimatter-ai — dashboard"</span>
            </div>
            <div class="mockup-body">
                {HERO_STATS.iter().map(|stat| view! { <StatTile stat=stat /> }).collect::<Vec<_>>()}
                <pre class="mockup-code"><code>
                    <span class="code-comment">"// Antimatter AI SDK"</span>"\n"
                    <span class="code-keyword">"import"</span>" { AntimatterAI } "
                    <span class="code-keyword">"from"</span>
                    <span class="code-string">" '@antimatter/sdk'"</span>"\n\n"
                    <span class="code-comment">"// Initialize in seconds"</span>"\n"
                    <span class="code-decl">"const"</span>" ai "<span class="code-decl">"= new"</span>
                    <span class="code-call">" AntimatterAI"</span>"({ apiKey })\n"
                    <span class="code-decl">"const"</span>" result "<span class="code-decl">"= await"</span>
                    <span class="code-call">" ai.generate"</span>"({ prompt })"
                </code></pre>
            </div>
        </div>
    }
}

#[component]
fn StatTile(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <p class="stat-tile-label">{stat.label}</p>
            <p class="stat-tile-value">{stat.value}</p>
            {stat.change.map(|change| view! { <p class="stat-tile-change">{change}</p> })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_headline_and_ctas() {
        let html = render(view! { <Hero /> });

        assert!(html.contains("id=\"hero\""));
        assert!(html.contains("The AI platform"));
        assert!(html.contains("built for builders"));
        assert!(html.contains("Introducing Antimatter AI v2.0"));
        assert!(html.contains("Start building free"));
        assert!(html.contains("Watch demo"));
        assert!(html.contains("href=\"#product\""));
        assert!(html.contains("developers already building with Antimatter AI"));
    }

    #[test]
    fn renders_dashboard_stats_and_canvas() {
        let html = render(view! { <Hero /> });

        for stat in HERO_STATS {
            assert!(html.contains(stat.label));
            assert!(html.contains(stat.value));
        }
        assert!(html.contains("particle-canvas"));
        assert!(html.contains("antimatter-ai — dashboard"));
    }

    #[test]
    fn hero_items_are_staggered() {
        assert_eq!(hero_item(0).delay_ms, 300);
        assert_eq!(hero_item(4).delay_ms, 780);
    }
}
