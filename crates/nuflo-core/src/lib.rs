//! NuFlo core - synthetic well-sensor deployments for the demo map.
//!
//! Generates water wells with random telemetry and LoRa gateways over rural
//! Peru, flags a handful of wells with alerts, and links each well to its
//! nearest gateway.

pub mod alerts;
pub mod deployment;
pub mod error;
pub mod generator;
pub mod models;
pub mod regions;
pub mod rules;
pub mod spatial;

pub use alerts::{assign_alerts, assign_alerts_with};
pub use deployment::{Deployment, DeploymentConfig};
pub use error::{AlertError, DeploymentError, GenerationError};
pub use generator::{
    generate_gateways, generate_gateways_with, generate_wells, generate_wells_with, LandSampler,
    DEFAULT_MAX_ATTEMPTS,
};
pub use models::{Gateway, Link, Well, WellIssue};
pub use regions::{in_any_area, is_land, RuralArea, RURAL_AREAS};
pub use rules::{classify_issue, WaterQualityRules};
pub use spatial::{calculate_distance, connect_wells, coverage_summary, nearest_gateway, CoverageSummary};
