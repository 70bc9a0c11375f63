use super::Reveal;
use leptos::prelude::*;

/// Eyebrow pill, heading and lede shared by the content sections.
#[component]
pub fn SectionHeader(
    /// Small uppercase label above the heading
    eyebrow: &'static str,
    /// Paragraph under the heading
    #[prop(optional)]
    description: Option<&'static str>,
    /// Pill colour: "violet" or "cyan"
    #[prop(default = "violet")]
    tone: &'static str,
    /// Left-align instead of centering
    #[prop(optional)]
    left: bool,
    /// Heading content
    children: Children,
) -> impl IntoView {
    let class = if left {
        "section-header section-header-left"
    } else {
        "section-header"
    };
    view! {
        <Reveal class=class>
            <span class=format!("eyebrow eyebrow-{tone}")>{eyebrow}</span>
            <h2 class="section-title">{children()}</h2>
            {description.map(|text| view! { <p class="section-description">{text}</p> })}
        </Reveal>
    }
}
