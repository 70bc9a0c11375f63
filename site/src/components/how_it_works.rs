use super::{Reveal, SectionHeader};
use crate::content::{STEPS, Step, StepVisual};
use crate::motion::{Motion, alternate};
use leptos::prelude::*;

/// Four-step timeline, alternating sides on wide screens.
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="solutions" class="section section-steps">
            <div class="section-rule" aria-hidden="true"></div>
            <div class="container">
                <SectionHeader
                    eyebrow="How It Works"
                    tone="cyan"
                    description="Our end-to-end platform removes the complexity of building production AI systems."
                >
                    "From data to deployment"
                    <br />
                    <span class="gradient-text">"in four steps"</span>
                </SectionHeader>

                <div class="timeline">
                    <div class="timeline-line" aria-hidden="true"></div>
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! { <StepItem step=step index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepItem(step: &'static Step, index: usize) -> impl IntoView {
    let motion = Motion {
        entrance: alternate(index, 40.0),
        duration_ms: 700,
        delay_ms: 0,
    };
    let class = if index % 2 == 0 { "step" } else { "step step-reverse" };

    view! {
        <Reveal motion=motion class=class>
            <div class="step-copy">
                <div class="step-number-row">
                    <span class="step-number">{step.number}</span>
                    <span class="step-number-rule"></span>
                </div>
                <h3 class="step-title">{step.title}</h3>
                <p class="card-text">{step.description}</p>
            </div>
            <div class="step-dot" aria-hidden="true"></div>
            <div class="step-visual">
                <StepIllustration visual=step.visual />
            </div>
        </Reveal>
    }
}

#[component]
fn StepIllustration(visual: StepVisual) -> impl IntoView {
    match visual {
        StepVisual::Sources(sources) => view! {
            <div class="chip-row">
                {sources.iter().map(|src| view! { <span class="chip">{*src}</span> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        StepVisual::Pipeline(lines) => view! {
            <div class="pipeline">
                {lines
                    .iter()
                    .map(|line| {
                        let text = format!("{} {}", line.status.glyph(), line.text);
                        view! {
                            <div class="pipeline-line">
                                <span class="pipeline-caret">"▸"</span>
                                <span class=line.status.class()>{text}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        StepVisual::Regions(regions) => view! {
            <div class="region-grid">
                {regions
                    .iter()
                    .map(|region| view! {
                        <div class="region">
                            <span class="status-dot"></span>
                            <p class="region-name">{region.name}</p>
                            <p class="region-latency">{region.latency}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        StepVisual::Bars(bars) => view! {
            <div class="bar-chart">
                {bars
                    .iter()
                    .map(|h| view! {
                        <span class="bar" style=format!("height: {:.0}px", f64::from(*h) * 0.6)></span>
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_all_steps_in_order() {
        let html = render(view! { <HowItWorks /> });

        assert!(html.contains("id=\"solutions\""));
        assert!(html.contains("in four steps"));
        let mut last = 0;
        for step in STEPS {
            let at = html.find(step.title).expect(step.title);
            assert!(at > last, "{} out of order", step.title);
            last = at;
        }
    }

    #[test]
    fn renders_step_illustrations() {
        let html = render(view! { <HowItWorks /> });

        assert!(html.contains("Snowflake"));
        assert!(html.contains("✓ Model initialized (7B params)"));
        assert!(html.contains("◉ Fine-tuning epoch 3/10 — loss: 0.089"));
        assert!(html.contains("AP-South"));
        assert!(html.contains("height: 24px"));
        assert_eq!(html.matches("class=\"bar\"").count(), 10);
    }

    #[test]
    fn odd_steps_are_reversed() {
        let html = render(view! { <HowItWorks /> });
        assert_eq!(html.matches("step step-reverse").count(), 2);
        assert!(html.contains("--reveal-from: translateX(40px)"));
    }
}
