use super::{CallToAction, Features, Footer, Hero, HowItWorks, Nav, Pricing, Product, Testimonials};
use leptos::prelude::*;

/// The whole landing page, top to bottom.
///
/// Used directly by the browser app and wrapped in [`super::Document`] for
/// the static render.
#[component]
pub fn LandingPage(
    /// Year shown in the footer copyright
    year: i32,
) -> impl IntoView {
    view! {
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <Features />
                <Product />
                <HowItWorks />
                <Testimonials />
                <Pricing />
                <CallToAction />
            </main>
            <Footer year=year />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;
    use crate::content::SECTION_IDS;

    #[test]
    fn sections_render_in_order() {
        let html = render(view! { <LandingPage year=2025 /> });

        let mut last = 0;
        for id in SECTION_IDS {
            let at = html
                .find(&format!("id=\"{id}\""))
                .unwrap_or_else(|| panic!("missing section {id}"));
            assert!(at > last, "section {id} out of order");
            last = at;
        }
    }

    #[test]
    fn header_before_main_before_footer() {
        let html = render(view! { <LandingPage year=2025 /> });

        let header = html.find("<header").expect("header");
        let main = html.find("<main").expect("main");
        let footer = html.find("<footer").expect("footer");
        assert!(header < main && main < footer);
    }
}
