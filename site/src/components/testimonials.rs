use super::{Icon, IconStyle, Reveal, SectionHeader};
use crate::content::{PLATFORM_STATS, TESTIMONIALS, TRUSTED_BY, Testimonial};
use crate::motion::Motion;
use crate::state::Carousel;
use crate::icons::ICON_QUOTE;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

/// Logo wall, customer quote carousel and platform stats.
#[component]
pub fn Testimonials() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(TESTIMONIALS.len()));

    let on_keydown = move |ev: KeyboardEvent| {
        let mut next = carousel.get_untracked();
        if !step_for_key(&mut next, &ev.key()) {
            return;
        }
        ev.prevent_default();
        set_carousel.set(next);
        focus_dot(&ev, next.active());
    };

    view! {
        <section id="testimonials" class="section section-testimonials">
            <div class="container">
                <Reveal motion=Motion::rise(20.0, 600) class="trusted-by">
                    <p class="trusted-by-label">"Trusted by teams at"</p>
                    <div class="logo-wall">
                        {TRUSTED_BY
                            .iter()
                            .map(|name| view! { <span class="logo-word">{*name}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </Reveal>

                <div class="divider" aria-hidden="true"></div>

                <SectionHeader eyebrow="Customer Stories">
                    "Loved by builders worldwide"
                </SectionHeader>

                <div class="carousel">
                    <div class="carousel-stage">
                        {move || {
                            TESTIMONIALS
                                .get(carousel.get().active())
                                .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        }}
                    </div>

                    <div class="carousel-dots" role="tablist" on:keydown=on_keydown>
                        {(0..carousel.get_untracked().len())
                            .map(|index| view! {
                                <button
                                    class=move || if carousel.get().is_active(index) { "dot active" } else { "dot" }
                                    role="tab"
                                    tabindex=move || if carousel.get().is_active(index) { "0" } else { "-1" }
                                    aria-selected=move || carousel.get().is_active(index).to_string()
                                    aria-label=format!("View testimonial {}", index + 1)
                                    on:click=move |_| set_carousel.update(|c| c.select(index))
                                ></button>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <Reveal motion=Motion::rise(30.0, 700).delayed(300) class="stats-row">
                    {PLATFORM_STATS
                        .iter()
                        .map(|stat| view! {
                            <div class="stat">
                                <p class="stat-value gradient-text">{stat.value}</p>
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </Reveal>
            </div>
        </section>
    }
}

/// Arrow keys step the carousel with wrap. Returns false for any other key.
fn step_for_key(carousel: &mut Carousel, key: &str) -> bool {
    if carousel.is_empty() {
        return false;
    }
    match key {
        "ArrowRight" => carousel.next(),
        "ArrowLeft" => carousel.prev(),
        _ => return false,
    }
    true
}

/// Move focus to dot `index` of the row the key event came from.
fn focus_dot(ev: &KeyboardEvent, index: usize) {
    let dot = ev
        .current_target()
        .and_then(|row| row.dyn_into::<Element>().ok())
        .zip(u32::try_from(index).ok())
        .and_then(|(row, index)| row.children().item(index))
        .and_then(|dot| dot.dyn_into::<HtmlElement>().ok());
    if let Some(dot) = dot {
        let _ = dot.focus();
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let quote = format!("\u{201c}{}\u{201d}", testimonial.quote);
    let byline = format!("{} · {}", testimonial.role, testimonial.company);

    view! {
        <figure class="testimonial-card">
            <Icon path=ICON_QUOTE paint=IconStyle::Filled class="icon icon-quote" />
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption class="testimonial-author">
                <span class="avatar" style=format!("background: {}", testimonial.gradient)>
                    {testimonial.avatar}
                </span>
                <span class="author-meta">
                    <span class="author-name">{testimonial.author}</span>
                    <span class="author-role">{byline}</span>
                </span>
            </figcaption>
        </figure>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn shows_first_testimonial_only() {
        let html = render(view! { <Testimonials /> });

        let first = &TESTIMONIALS[0];
        assert!(html.contains(first.author));
        assert!(html.contains("CTO · Nexus Health"));
        assert!(html.contains(&format!("\u{201c}{}\u{201d}", first.quote)));
        for other in &TESTIMONIALS[1..] {
            assert!(!html.contains(other.author), "{} should be hidden", other.author);
        }
    }

    #[test]
    fn one_dot_per_testimonial_with_first_active() {
        let html = render(view! { <Testimonials /> });

        for i in 1..=TESTIMONIALS.len() {
            assert!(html.contains(&format!("aria-label=\"View testimonial {i}\"")));
        }
        assert_eq!(html.matches("class=\"dot active\"").count(), 1);
        assert_eq!(html.matches("class=\"dot\"").count(), TESTIMONIALS.len() - 1);
    }

    #[test]
    fn only_active_dot_is_tabbable() {
        let html = render(view! { <Testimonials /> });

        assert_eq!(html.matches("tabindex=\"0\"").count(), 1);
        assert_eq!(html.matches("tabindex=\"-1\"").count(), TESTIMONIALS.len() - 1);
    }

    #[test]
    fn arrow_keys_step_with_wrap() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());

        assert!(step_for_key(&mut carousel, "ArrowLeft"));
        assert_eq!(carousel.active(), TESTIMONIALS.len() - 1);
        assert!(step_for_key(&mut carousel, "ArrowRight"));
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());
        assert!(!step_for_key(&mut carousel, "Enter"));
        assert_eq!(carousel.active(), 0);

        let mut empty = Carousel::new(0);
        assert!(!step_for_key(&mut empty, "ArrowRight"));
    }

    #[test]
    fn renders_logo_wall_and_stats() {
        let html = render(view! { <Testimonials /> });

        assert!(html.contains("id=\"testimonials\""));
        assert!(html.contains("Loved by builders worldwide"));
        for name in TRUSTED_BY {
            assert!(html.contains(name));
        }
        assert!(html.contains("5B+"));
        assert!(html.contains("&lt;50ms"));
    }
}
