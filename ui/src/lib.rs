//! Shared UI crate for Crawlview. The selection core and all views live here.

pub mod core;
pub mod views;

pub mod components {
    // Shared application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Chart panel with its filter rows (components/chart_panel.rs)
    pub mod chart_panel;
    pub use chart_panel::ChartPanel;
}
