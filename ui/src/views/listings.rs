use dioxus::prelude::*;

use crate::components::ChartPanel;

const LISTINGS_CHART: &str = "/charts/listings";

#[component]
pub fn Listings() -> Element {
    rsx! {
        section { class: "page page-listings",
            h1 { "Listings" }
            p { "Total listings published across the network." }

            ChartPanel {
                title: "Listings",
                endpoint: LISTINGS_CHART.to_string(),
                node_filters: false,
            }
        }
    }
}
