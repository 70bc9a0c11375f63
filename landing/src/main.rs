// Antimatter AI landing page, browser build (Leptos 0.8, csr)

mod banner;

use antimatter_site::components::LandingPage;
use antimatter_site::config::DEFAULT_COPYRIGHT_YEAR;
use antimatter_site::styles::PAGE_CSS;
use antimatter_site::SiteConfig;
use banner::ConsoleBanner;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Current year from the browser clock.
fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(DEFAULT_COPYRIGHT_YEAR)
}

#[component]
fn App() -> impl IntoView {
    let SiteConfig {
        meta,
        copyright_year,
        ..
    } = SiteConfig::default();
    let year = copyright_year.unwrap_or_else(current_year);

    Effect::new(move || {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&meta.title);
        }
    });

    view! {
        <style>{PAGE_CSS}</style>
        <ConsoleBanner />
        <div class="noise" aria-hidden="true"></div>
        <LandingPage year=year />
    }
}
