use dioxus::prelude::*;

use crate::components::ChartPanel;

const RATINGS_CHART: &str = "/charts/ratings";

#[component]
pub fn Ratings() -> Element {
    rsx! {
        section { class: "page page-ratings",
            h1 { "Ratings" }
            p { "Ratings left across the network over time." }

            ChartPanel {
                title: "Ratings",
                endpoint: RATINGS_CHART.to_string(),
                node_filters: false,
            }
        }
    }
}
