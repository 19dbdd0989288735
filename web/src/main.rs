use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Home, Listings, Nodes, Ratings, UserAgents, Vendors};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/nodes")]
    Nodes {},
    #[route("/listings")]
    Listings {},
    #[route("/ratings")]
    Ratings {},
    #[route("/vendors")]
    Vendors {},
    #[route("/useragents")]
    UserAgents {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_nodes(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Nodes {}, "{label}" })
}
fn nav_listings(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Listings {}, "{label}" })
}
fn nav_ratings(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Ratings {}, "{label}" })
}
fn nav_vendors(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Vendors {}, "{label}" })
}
fn nav_useragents(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::UserAgents {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Register the navigation builder so the shared navbar can link to
    // web-specific routes without `ui` knowing the `Route` enum.
    register_nav(NavBuilder {
        home: nav_home,
        nodes: nav_nodes,
        listings: nav_listings,
        ratings: nav_ratings,
        vendors: nav_vendors,
        useragents: nav_useragents,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared navbar component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
