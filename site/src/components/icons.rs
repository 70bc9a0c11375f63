//! Inline SVG icon components. Path data lives in [`crate::icons`].

use leptos::prelude::*;

/// How the path is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconStyle {
    /// Stroked outline (Heroicons outline)
    #[default]
    Outline,
    /// Solid fill
    Filled,
}

/// Renders an inline 24x24 SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_BOLT class="icon-md" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Outline or filled
    #[prop(optional)]
    paint: IconStyle,
    /// Stroke width for outline icons
    #[prop(default = "1.5")]
    stroke_width: &'static str,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let (fill, stroke) = match paint {
        IconStyle::Outline => ("none", "currentColor"),
        IconStyle::Filled => ("currentColor", "none"),
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=class
            viewBox="0 0 24 24"
            fill=fill
            stroke=stroke
            stroke-width=stroke_width
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Brand mark: a triangle on a gradient tile.
#[component]
pub fn LogoMark() -> impl IntoView {
    view! {
        <span class="logo-mark">
            <svg width="16" height="16" viewBox="0 0 16 16" fill="none" aria-hidden="true">
                <path d="M8 2L14 12H2L8 2Z" fill="white" fill-opacity="0.9"></path>
            </svg>
        </span>
    }
}
