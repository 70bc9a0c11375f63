use super::LogoMark;
use crate::content::NAV_LINKS;
use crate::state::{MenuState, is_scrolled};
use leptos::ev;
use leptos::prelude::*;

/// Fixed header: brand, section links, CTAs and the mobile drawer.
#[component]
pub fn Nav() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move || {
        let handle = window_event_listener(ev::scroll, move |_| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let next = is_scrolled(y);
            if scrolled.get_untracked() != next {
                set_scrolled.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let close_menu = move |_| set_menu.update(MenuState::close);

    view! {
        <header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <nav class="nav-inner">
                <a href="/" class="brand">
                    <LogoMark />
                    <span class="brand-name">"Antimatter"<span class="brand-accent">" AI"</span></span>
                </a>

                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <li><a href=link.href class="nav-link">{link.label}</a></li>
                        })
                        .collect::<Vec<_>>()}
                </ul>

                <div class="nav-actions">
                    <a href="#contact" class="nav-signin">"Sign in"</a>
                    <a href="#contact" class="btn btn-primary btn-sm">"Get started"</a>
                </div>

                <button
                    class=move || if menu.get().is_open() { "menu-toggle open" } else { "menu-toggle" }
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| set_menu.update(MenuState::toggle)
                >
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                </button>
            </nav>

            // Mobile drawer
            <Show when=move || menu.get().is_open()>
                <div class="mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="mobile-link" on:click=close_menu>{link.label}</a>
                        })
                        .collect::<Vec<_>>()}
                    <div class="mobile-actions">
                        <a href="#contact" class="mobile-link" on:click=close_menu>"Sign in"</a>
                        <a href="#contact" class="btn btn-primary" on:click=close_menu>"Get started"</a>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_brand_and_links() {
        let html = render(view! { <Nav /> });

        assert!(html.contains("Antimatter"));
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
            assert!(html.contains(link.label));
        }
        assert!(html.contains("Sign in"));
        assert!(html.contains("Get started"));
    }

    #[test]
    fn starts_closed_and_unscrolled() {
        let html = render(view! { <Nav /> });

        assert!(html.contains("class=\"site-header\""));
        assert!(html.contains("aria-label=\"Toggle menu\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("class=\"menu-toggle\""));
        assert!(!html.contains("mobile-menu"));
    }
}
