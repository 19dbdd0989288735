//! Platform-agnostic selection core. Nothing in here touches Dioxus.

pub mod controller;
pub mod filters;
