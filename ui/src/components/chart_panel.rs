use dioxus::prelude::*;

use crate::core::controller::ChartController;
use crate::core::filters::{Choice, LastActiveWindow, NodeTypeFilter, TimeFrame};

// Chart panel stylesheet (layout only; option emphasis is inline, see below)
const CHARTS_CSS: Asset = asset!("/assets/styling/charts.css");

// The emphasis contract for filter options. Kept inline rather than in the
// stylesheet so the selected state carries exactly these two properties.
const SELECTED_STYLE: &str = "text-decoration: underline; font-weight: bold";
const DESELECTED_STYLE: &str = "text-decoration: none; font-weight: normal";

/// A server-rendered chart image plus the filter rows that parameterize it.
///
/// The panel owns one [`ChartController`]; every click moves a selection
/// register and the recomputed `src` makes the browser fetch a fresh image.
/// No completion or error callback is registered for that fetch — a broken
/// URL shows the browser's broken-image placeholder and nothing else.
#[component]
pub fn ChartPanel(title: String, endpoint: String, node_filters: bool) -> Element {
    let controller = use_signal(move || ChartController::new(&endpoint, node_filters));

    let current = controller();
    let src = current.image_url();
    let show_node_types = current.node_filters();

    #[cfg(debug_assertions)]
    println!("[charts] render {title} src={src}");

    let time_frames: Vec<Choice> = TimeFrame::ALL.iter().copied().map(Choice::TimeFrame).collect();
    let last_actives: Vec<Choice> = LastActiveWindow::ALL
        .iter()
        .copied()
        .map(Choice::LastActive)
        .collect();
    let node_types: Vec<Choice> = NodeTypeFilter::ALL
        .iter()
        .copied()
        .map(Choice::NodeType)
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: CHARTS_CSS }

        section { class: "chart-panel",
            div { class: "chart-panel__filters",
                FilterRow { caption: "Time frame", choices: time_frames, controller }
                FilterRow { caption: "Last active", choices: last_actives, controller }
                if show_node_types {
                    FilterRow { caption: "Node type", choices: node_types, controller }
                }
            }

            img {
                id: "chartImage",
                class: "chart-panel__image",
                alt: "{title}",
                src: "{src}",
            }
        }
    }
}

/// One filter group: a caption followed by its options in order. All three
/// rows share this component; the group shows through the `Choice` variants.
#[component]
fn FilterRow(caption: String, choices: Vec<Choice>, controller: Signal<ChartController>) -> Element {
    let current = controller();

    rsx! {
        div { class: "chart-panel__filter-row",
            span { class: "chart-panel__filter-caption", "{caption}" }
            { choices.iter().copied().map(|choice| {
                let style = if current.is_selected(choice) {
                    SELECTED_STYLE
                } else {
                    DESELECTED_STYLE
                };
                let mut controller = controller;
                rsx! {
                    span {
                        key: "{choice.element_id()}",
                        id: choice.element_id(),
                        class: "chart-panel__filter-option",
                        style: "{style}",
                        onclick: move |_| controller.with_mut(|ctl| ctl.select(choice)),
                        "{choice.label()}"
                    }
                }
            })}
        }
    }
}
