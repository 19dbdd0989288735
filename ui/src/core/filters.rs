//! The three chart filter groups and their query-string vocabulary.
//!
//! Each group is a fixed enum rather than an id → value lookup table: the
//! element ids come from the hosting page contract, the query values from
//! the crawler's chart endpoint (durations parseable as hours, plus the
//! `only` node-type switch where `""` means "all nodes").

/// How far back the chart's x-axis reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    OneHour,
    TwelveHours,
    OneDay,
    ThreeDays,
    SevenDays,
    OneMonth,
    ThreeMonths,
    OneYear,
    AllTime,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 9] = [
        TimeFrame::OneHour,
        TimeFrame::TwelveHours,
        TimeFrame::OneDay,
        TimeFrame::ThreeDays,
        TimeFrame::SevenDays,
        TimeFrame::OneMonth,
        TimeFrame::ThreeMonths,
        TimeFrame::OneYear,
        TimeFrame::AllTime,
    ];

    /// Stable element identifier from the page contract.
    pub fn element_id(self) -> &'static str {
        match self {
            TimeFrame::OneHour => "1hTimeFrame",
            TimeFrame::TwelveHours => "12hTimeFrame",
            TimeFrame::OneDay => "1dTimeFrame",
            TimeFrame::ThreeDays => "3dTimeFrame",
            TimeFrame::SevenDays => "7dTimeFrame",
            TimeFrame::OneMonth => "1mTimeFrame",
            TimeFrame::ThreeMonths => "3mTimeFrame",
            TimeFrame::OneYear => "1yTimeFrame",
            TimeFrame::AllTime => "allTimeFrame",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::OneHour => "1h",
            TimeFrame::TwelveHours => "12h",
            TimeFrame::OneDay => "1d",
            TimeFrame::ThreeDays => "3d",
            TimeFrame::SevenDays => "7d",
            TimeFrame::OneMonth => "1m",
            TimeFrame::ThreeMonths => "3m",
            TimeFrame::OneYear => "1y",
            TimeFrame::AllTime => "all",
        }
    }

    /// Value for the `timeFrame` query parameter. The endpoint parses these
    /// as Go durations, so "all time" is spelled as a very large hour count.
    pub fn query_value(self) -> &'static str {
        match self {
            TimeFrame::OneHour => "1h",
            TimeFrame::TwelveHours => "12h",
            TimeFrame::OneDay => "24h",
            TimeFrame::ThreeDays => "72h",
            TimeFrame::SevenDays => "168h",
            TimeFrame::OneMonth => "720h",
            TimeFrame::ThreeMonths => "2160h",
            TimeFrame::OneYear => "8760h",
            TimeFrame::AllTime => "99999h",
        }
    }
}

impl Default for TimeFrame {
    fn default() -> Self {
        TimeFrame::SevenDays
    }
}

/// How recently a peer must have been seen to count as active.
///
/// Same duration vocabulary as [`TimeFrame`], but a separate register: the
/// two are selected independently and feed different query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastActiveWindow {
    OneHour,
    TwelveHours,
    OneDay,
    ThreeDays,
    SevenDays,
    OneMonth,
    ThreeMonths,
    OneYear,
    AllTime,
}

impl LastActiveWindow {
    pub const ALL: [LastActiveWindow; 9] = [
        LastActiveWindow::OneHour,
        LastActiveWindow::TwelveHours,
        LastActiveWindow::OneDay,
        LastActiveWindow::ThreeDays,
        LastActiveWindow::SevenDays,
        LastActiveWindow::OneMonth,
        LastActiveWindow::ThreeMonths,
        LastActiveWindow::OneYear,
        LastActiveWindow::AllTime,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            LastActiveWindow::OneHour => "1hLastActive",
            LastActiveWindow::TwelveHours => "12hLastActive",
            LastActiveWindow::OneDay => "1dLastActive",
            LastActiveWindow::ThreeDays => "3dLastActive",
            LastActiveWindow::SevenDays => "7dLastActive",
            LastActiveWindow::OneMonth => "1mLastActive",
            LastActiveWindow::ThreeMonths => "3mLastActive",
            LastActiveWindow::OneYear => "1yLastActive",
            LastActiveWindow::AllTime => "allLastActive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LastActiveWindow::OneHour => "1h",
            LastActiveWindow::TwelveHours => "12h",
            LastActiveWindow::OneDay => "1d",
            LastActiveWindow::ThreeDays => "3d",
            LastActiveWindow::SevenDays => "7d",
            LastActiveWindow::OneMonth => "1m",
            LastActiveWindow::ThreeMonths => "3m",
            LastActiveWindow::OneYear => "1y",
            LastActiveWindow::AllTime => "all",
        }
    }

    /// Value for the `lastActive` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            LastActiveWindow::OneHour => "1h",
            LastActiveWindow::TwelveHours => "12h",
            LastActiveWindow::OneDay => "24h",
            LastActiveWindow::ThreeDays => "72h",
            LastActiveWindow::SevenDays => "168h",
            LastActiveWindow::OneMonth => "720h",
            LastActiveWindow::ThreeMonths => "2160h",
            LastActiveWindow::OneYear => "8760h",
            LastActiveWindow::AllTime => "99999h",
        }
    }
}

impl Default for LastActiveWindow {
    fn default() -> Self {
        LastActiveWindow::SevenDays
    }
}

/// Network reachability class of a peer. Only offered on node-count pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTypeFilter {
    Clearnet,
    Tor,
    Dualstack,
    All,
}

impl NodeTypeFilter {
    pub const ALL: [NodeTypeFilter; 4] = [
        NodeTypeFilter::Clearnet,
        NodeTypeFilter::Tor,
        NodeTypeFilter::Dualstack,
        NodeTypeFilter::All,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            NodeTypeFilter::Clearnet => "clearnetNodes",
            NodeTypeFilter::Tor => "torNodes",
            NodeTypeFilter::Dualstack => "dualstackNodes",
            NodeTypeFilter::All => "allNodes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NodeTypeFilter::Clearnet => "clearnet",
            NodeTypeFilter::Tor => "tor",
            NodeTypeFilter::Dualstack => "dualstack",
            NodeTypeFilter::All => "all",
        }
    }

    /// Value for the `only` query parameter. The endpoint treats an empty
    /// value as "no filter", so [`NodeTypeFilter::All`] maps to `""` and the
    /// rebuilt URL carries a bare `&only=`.
    pub fn query_value(self) -> &'static str {
        match self {
            NodeTypeFilter::Clearnet => "clearnet",
            NodeTypeFilter::Tor => "tor",
            NodeTypeFilter::Dualstack => "dualstack",
            NodeTypeFilter::All => "",
        }
    }
}

impl Default for NodeTypeFilter {
    fn default() -> Self {
        NodeTypeFilter::All
    }
}

/// A click on any option in any group, as one value the controller can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    TimeFrame(TimeFrame),
    LastActive(LastActiveWindow),
    NodeType(NodeTypeFilter),
}

impl Choice {
    pub fn element_id(self) -> &'static str {
        match self {
            Choice::TimeFrame(tf) => tf.element_id(),
            Choice::LastActive(la) => la.element_id(),
            Choice::NodeType(nt) => nt.element_id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::TimeFrame(tf) => tf.label(),
            Choice::LastActive(la) => la.label(),
            Choice::NodeType(nt) => nt.label(),
        }
    }
}
