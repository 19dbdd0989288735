use dioxus::prelude::*;

use crate::components::ChartPanel;

/// Chart endpoint for reachable-node counts. Accepts `only=` for the
/// node-type filter, unlike the other chart endpoints.
const NODES_CHART: &str = "/charts/nodes";

#[component]
pub fn Nodes() -> Element {
    rsx! {
        section { class: "page page-nodes",
            // The marker id doubles as the page's signal that node-type
            // filtering applies here.
            h1 { id: "nodesOnline", "Nodes online" }
            p { "Reachable peers seen by the crawler, bucketed over time." }

            ChartPanel {
                title: "Nodes online",
                endpoint: NODES_CHART.to_string(),
                node_filters: true,
            }
        }
    }
}
