use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined in release native builds, linked elsewhere)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the label and returns a link that already contains
/// that label as its child, preserving styling. Platforms call
/// `register_nav` once before rendering the root.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub nodes: fn(label: &str) -> Element,
    pub listings: fn(label: &str) -> Element,
    pub ratings: fn(label: &str) -> Element,
    pub vendors: fn(label: &str) -> Element,
    pub useragents: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)("Overview");
        let nodes = (b.nodes)("Nodes");
        let listings = (b.listings)("Listings");
        let ratings = (b.ratings)("Ratings");
        let vendors = (b.vendors)("Vendors");
        let useragents = (b.useragents)("User agents");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {nodes}
                {listings}
                {ratings}
                {vendors}
                {useragents}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "Crawlview" }
                    }
                    span { class: "navbar__brand-subtitle", "peer network statistics" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                }
            }
        }
    }
}
