use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Crawlview" }
            p { "Charts rendered from a continuously crawled peer network." }
            p {
                "Pick a page from the navbar. Every chart can be narrowed by "
                "time frame and last-active window; the node charts can also be "
                "restricted to clearnet, Tor, or dualstack peers."
            }

            ul { class: "page-home__features",
                li { "Nodes — reachable peers over time, by network class" }
                li { "Listings — published listings across the network" }
                li { "Ratings — ratings left across the network" }
                li { "Vendors — peers with at least one listing" }
                li { "User agents — software versions among active peers" }
            }
        }
    }
}
