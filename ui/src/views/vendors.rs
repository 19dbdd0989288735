use dioxus::prelude::*;

use crate::components::ChartPanel;

const VENDORS_CHART: &str = "/charts/vendors";

#[component]
pub fn Vendors() -> Element {
    rsx! {
        section { class: "page page-vendors",
            h1 { "Vendors" }
            p { "Peers carrying at least one published listing." }

            ChartPanel {
                title: "Vendors",
                endpoint: VENDORS_CHART.to_string(),
                node_filters: false,
            }
        }
    }
}
