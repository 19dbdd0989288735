//! Selection state for a single chart panel.
//!
//! One `ChartController` per rendered chart. It remembers the image source
//! with its query string stripped, tracks the currently selected option in
//! each filter group, and rebuilds the full image URL whenever asked. The
//! chart endpoint renders the image server-side; this side only edits the
//! query string and lets the browser fetch the result.

use super::filters::{Choice, LastActiveWindow, NodeTypeFilter, TimeFrame};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartController {
    /// Image source up to and including a trailing `?`. Captured once,
    /// never rewritten, so repeated rebuilds cannot stack parameters.
    base: String,
    time_frame: TimeFrame,
    last_active: LastActiveWindow,
    node_type: NodeTypeFilter,
    /// Whether the hosting page offers node-type filtering. Only node-count
    /// pages do; everywhere else the `only` parameter is omitted entirely.
    node_filters: bool,
}

impl ChartController {
    pub fn new(src: &str, node_filters: bool) -> Self {
        let path = src.split('?').next().unwrap_or(src);
        Self {
            base: format!("{path}?"),
            time_frame: TimeFrame::default(),
            last_active: LastActiveWindow::default(),
            node_type: NodeTypeFilter::default(),
            node_filters,
        }
    }

    pub fn node_filters(&self) -> bool {
        self.node_filters
    }

    /// Move the register for the clicked option's group; the other two
    /// registers are untouched. Node-type clicks are ignored on pages that
    /// never offered that row.
    pub fn select(&mut self, choice: Choice) {
        match choice {
            Choice::TimeFrame(tf) => self.time_frame = tf,
            Choice::LastActive(la) => self.last_active = la,
            Choice::NodeType(nt) => {
                if self.node_filters {
                    self.node_type = nt;
                }
            }
        }
    }

    pub fn is_selected(&self, choice: Choice) -> bool {
        match choice {
            Choice::TimeFrame(tf) => self.time_frame == tf,
            Choice::LastActive(la) => self.last_active == la,
            Choice::NodeType(nt) => self.node_type == nt,
        }
    }

    /// Rebuild the image URL from the tracked state.
    ///
    /// The shape is `<base>?&timeFrame=..&lastActive=..[&only=..]`, with the
    /// `only` segment present exactly on node pages and empty when no
    /// node-type filter is applied. The endpoint tolerates the leading `&`
    /// after the `?`.
    pub fn image_url(&self) -> String {
        let mut url = format!(
            "{}&timeFrame={}&lastActive={}",
            self.base,
            self.time_frame.query_value(),
            self.last_active.query_value()
        );
        if self.node_filters {
            url.push_str("&only=");
            url.push_str(self.node_type.query_value());
        }
        url
    }
}
