#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod blog;
pub mod catalog;
pub mod icons;
pub mod magnetic;
pub mod nav;
pub mod reveal;
pub mod theme;

/// Site icon, served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_favicon_is_shipped() {
        let file = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON.trim_start_matches('/'));
        assert!(file.is_file(), "{} missing", file.display());
    }
}
