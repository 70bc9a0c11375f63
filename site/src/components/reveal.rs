//! Reveal-on-scroll wrapper.
//!
//! The wrapper starts in the hidden pose described by its [`Motion`] and
//! gets `is-visible` the first time it scrolls into view. The observer
//! disconnects after firing, so each element animates once.

use crate::motion::{reveal_class, Motion, REVEAL_ROOT_MARGIN};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Wraps children in a container that animates in when scrolled into view.
#[component]
pub fn Reveal(
    /// Entrance pose, duration and delay
    #[prop(optional)]
    motion: Motion,
    /// Extra classes on the wrapper
    #[prop(optional, into)]
    class: String,
    /// Revealed content
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    Effect::new(move || {
        if let Some(el) = node.get() {
            reveal_once(&el, set_visible);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || reveal_class(&class, visible.get())
            style=motion.style()
        >
            {children()}
        </div>
    }
}

/// Observe `el` until it intersects the viewport, then flip `visible` and stop.
/// Without IntersectionObserver the element is shown straight away.
fn reveal_once(el: &web_sys::Element, visible: WriteSignal<bool>) {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if hit {
                observer.disconnect();
                visible.set(true);
            }
        },
    )
    .into_js_value();

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.unchecked_ref(), &options) {
        Ok(observer) => observer.observe(el),
        Err(_) => visible.set(true),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;
    use crate::motion::Entrance;

    #[test]
    fn renders_hidden_with_motion_style() {
        let motion = Motion::rise(40.0, 600).delayed(80);
        let html = render(view! {
            <Reveal class="card" motion=motion>
                <p>"inside"</p>
            </Reveal>
        });

        assert!(html.contains("class=\"reveal card\""));
        assert!(html.contains("--reveal-from: translateY(40px)"));
        assert!(html.contains("--reveal-delay: 80ms"));
        assert!(html.contains("<p>inside</p>"));
    }

    #[test]
    fn default_motion_without_class() {
        let motion = Motion {
            entrance: Entrance::Fade,
            ..Motion::default()
        };
        let html = render(view! {
            <Reveal motion=motion>
                "x"
            </Reveal>
        });

        assert!(html.contains("class=\"reveal\""));
        assert!(html.contains("--reveal-from: none"));
    }
}
