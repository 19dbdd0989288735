#![cfg(test)]
//! The web crate links its stylesheet through `asset!`, which resolves
//! relative to this crate, so the theme exists twice: the shared copy under
//! `ui/assets/theme/` (embedded by desktop) and `web/assets/main.css`. This
//! lint keeps the two from drifting apart.
//!
//! If you edit the theme, copy it to both locations (or fold this back into
//! a single file and delete the test).

const WEB_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

const SHARED_THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn web_stylesheet_matches_the_shared_theme() {
    assert_eq!(
        WEB_CSS, SHARED_THEME_CSS,
        "web/assets/main.css has drifted from ui/assets/theme/main.css"
    );
}
