#![cfg(test)]
/*!
Stylesheet selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the Rust components rely on (navbar, chart panel,
  page layout) remain present in the shared stylesheets under `ui/assets/`.
- Fail fast if a refactor drops or renames a class, preventing a silent
  styling regression in packaged desktop builds.

A lightweight substring presence check is sufficient as an early warning;
parsing the CSS properly would buy nothing here.

If you intentionally rename or remove a selector:
1. Update the component markup.
2. Adjust the required-selector lists below.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const CHARTS_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/charts.css"
));

/// Core selectors that must exist in the shared theme.
const REQUIRED_THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page-home__features",
    // Media query token (sanity check responsive block exists)
    "@media",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand",
    ".navbar__brand-mark",
    ".navbar__brand-subtitle",
    ".navbar__links",
    ".navbar__link {",
];

const REQUIRED_CHART_SELECTORS: &[&str] = &[
    ".chart-panel {",
    ".chart-panel__filters",
    ".chart-panel__filter-row",
    ".chart-panel__filter-caption",
    ".chart-panel__filter-option",
    ".chart-panel__image",
];

fn assert_all_present(css: &str, required: &[&str], sheet: &str) {
    for selector in required {
        assert!(
            css.contains(selector),
            "Expected selector `{selector}` missing from {sheet}"
        );
    }
}

#[test]
fn theme_contains_required_selectors() {
    assert_all_present(THEME_CSS, REQUIRED_THEME_SELECTORS, "theme/main.css");
}

#[test]
fn navbar_sheet_contains_required_selectors() {
    assert_all_present(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS, "styling/navbar.css");
}

#[test]
fn chart_sheet_contains_required_selectors() {
    assert_all_present(CHARTS_CSS, REQUIRED_CHART_SELECTORS, "styling/charts.css");
}

#[test]
fn chart_sheet_leaves_option_emphasis_inline() {
    // Selected/deselected emphasis is an inline style contract owned by the
    // chart panel component; the stylesheet must not fight it.
    assert!(!CHARTS_CSS.contains("font-weight: bold"));
    assert!(!CHARTS_CSS.contains("text-decoration: underline"));
}
