use super::{Icon, Reveal, SectionHeader};
use crate::content::{USE_CASES, UseCase};
use crate::motion::{CARD_STAGGER_MS, Entrance, Motion, parallax_offset, scroll_progress, stagger};
use crate::icons::ICON_CHEVRON_RIGHT;
use leptos::ev;
use leptos::html::Section;
use leptos::prelude::*;

/// Use-case cards with a slow parallax glow behind them.
#[component]
pub fn Product() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let (offset, set_offset) = signal(parallax_offset(0.5));

    Effect::new(move || {
        let Some(el) = section.get() else {
            return;
        };
        let handle = window_event_listener(ev::scroll, move |_| {
            let viewport = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let rect = el.get_bounding_client_rect();
            set_offset.set(parallax_offset(scroll_progress(rect.top(), rect.height(), viewport)));
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <section id="product" node_ref=section class="section section-product">
            <div class="section-rule" aria-hidden="true"></div>
            <div
                class="parallax-glow"
                aria-hidden="true"
                style=move || format!("transform: translateY(calc(-50% + {:.1}px))", offset.get())
            ></div>

            <div class="container">
                <SectionHeader
                    eyebrow="Use Cases"
                    description="Whether you're building consumer apps or enterprise workflows, Antimatter AI adapts to your needs."
                    left=true
                >
                    "Built for every team,"
                    <br />
                    <span class="gradient-text">"every use case"</span>
                </SectionHeader>

                <div class="use-case-list">
                    {USE_CASES
                        .iter()
                        .enumerate()
                        .map(|(index, use_case)| view! { <UseCaseCard use_case=use_case index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn UseCaseCard(use_case: &'static UseCase, index: usize) -> impl IntoView {
    let motion = Motion {
        entrance: Entrance::SlideFromLeft(40.0),
        duration_ms: 600,
        delay_ms: stagger(index, CARD_STAGGER_MS),
    };

    view! {
        <Reveal motion=motion class=format!("use-case-card {}", use_case.tone.class())>
            <div class="use-case-copy">
                <span class="use-case-category">{use_case.category}</span>
                <h3 class="use-case-title">{use_case.title}</h3>
                <p class="card-text">{use_case.description}</p>
                <a href="#contact" class="text-link">
                    "Learn more"
                    <Icon path=ICON_CHEVRON_RIGHT stroke_width="2" class="icon icon-xs" />
                </a>
            </div>
            <ul class="use-case-items">
                {use_case
                    .items
                    .iter()
                    .map(|item| view! { <li><span class="bullet"></span>{*item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_use_cases_with_items() {
        let html = render(view! { <Product /> });

        assert!(html.contains("id=\"product\""));
        assert!(html.contains("every use case"));
        for use_case in USE_CASES {
            assert!(html.contains(use_case.category));
            assert!(html.contains(use_case.title));
            for item in use_case.items {
                assert!(html.contains(item), "missing {item}");
            }
        }
    }

    #[test]
    fn cards_carry_tone_and_slide_from_left() {
        let html = render(view! { <Product /> });
        assert!(html.contains("use-case-card tone-violet"));
        assert!(html.contains("use-case-card tone-emerald"));
        assert!(html.contains("--reveal-from: translateX(-40px)"));
    }

    #[test]
    fn glow_starts_centered() {
        let html = render(view! { <Product /> });
        assert!(html.contains("translateY(calc(-50% + 0.0px))"));
    }
}
