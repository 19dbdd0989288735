use dioxus::prelude::*;

use crate::components::ChartPanel;

/// Pie chart of user-agent strings among active peers. The endpoint only
/// reads `lastActive`; the extra `timeFrame` parameter the panel sends is
/// ignored server-side.
const USER_AGENTS_CHART: &str = "/charts/useragents";

#[component]
pub fn UserAgents() -> Element {
    rsx! {
        section { class: "page page-useragents",
            h1 { "User agents" }
            p { "Software versions reported by peers the crawler has reached." }

            ChartPanel {
                title: "User agents",
                endpoint: USER_AGENTS_CHART.to_string(),
                node_filters: false,
            }
        }
    }
}
