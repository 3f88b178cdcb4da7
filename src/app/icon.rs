use leptos::prelude::*;

use crate::icons::glyph;

/// Inline SVG icon, e.g. `name="github"`. Strokes use `currentColor`, so the
/// icon follows the surrounding text color.
#[component]
pub fn Icon(#[prop(into)] name: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let paths = glyph(&name).unwrap_or_else(|| {
        log::warn!("no glyph for icon {name:?}");
        ""
    });
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=format!("inline-block shrink-0 {class}")
            aria-hidden="true"
            inner_html=paths
        ></svg>
    }
}
