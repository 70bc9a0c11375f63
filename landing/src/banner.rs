//! Console greeting for developers who open devtools.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn ascii_logo() -> String {
    format!(
        r#"
    _          _   _                 _   _
   /_\  _ _ | |_(_)_ __  __ _ | |_| |_ ___ _ _
  / _ \| ' \|  _| | '  \/ _` ||  _|  _/ -_) '_|
 /_/ \_\_||_|\__|_|_|_|_\__,_| \__|\__\___|_|

  The AI platform built for builders.
  v{VERSION} | antimatter.ai
"#
    )
}

/// Prints the banner once on mount; renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || print_banner());

    view! {}
}

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", ascii_logo())),
        &JsValue::from_str("color: #8b5cf6; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cWe're hiring engineers who read source. Say hi: web@antimatter.ai"),
        &JsValue::from_str("color: #22d3ee;"),
    );
}
