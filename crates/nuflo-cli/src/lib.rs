//! NuFlo CLI - Command line tools for the NuFlo demo map.
//!
//! This crate provides:
//! - generate_map: generate a deployment and write it as GeoJSON or a summary

pub mod config;
pub mod render;

pub use config::{Config, Overrides};
pub use render::{feature_collection, gateway_popup_html, legend, summary_text, well_popup_html};
