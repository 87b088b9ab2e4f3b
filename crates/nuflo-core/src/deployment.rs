//! A complete generated deployment: wells, gateways and their links.

use crate::alerts::assign_alerts_with;
use crate::error::DeploymentError;
use crate::generator::{
    generate_gateways_with, generate_wells_with, LandSampler, DEFAULT_MAX_ATTEMPTS,
};
use crate::models::{Gateway, Link, Well};
use crate::regions::RURAL_AREAS;
use crate::rules::WaterQualityRules;
use crate::spatial::{connect_wells, coverage_summary, CoverageSummary};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sizes and limits for a generated deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub well_count: usize,
    pub gateway_count: usize,
    pub alert_count: usize,
    /// Draws allowed per accepted coordinate
    pub max_attempts: usize,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            well_count: 40,
            gateway_count: 8,
            alert_count: 5,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Generated wells and gateways, with each well linked to its nearest gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub wells: Vec<Well>,
    pub gateways: Vec<Gateway>,
    pub links: Vec<Link>,
}

impl Deployment {
    /// Generate a deployment over the default rural areas.
    ///
    /// Wells are drawn first, then alerts, then gateways, so a seeded RNG
    /// reproduces the same deployment.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        config: &DeploymentConfig,
    ) -> Result<Self, DeploymentError> {
        let sampler = LandSampler::new(&RURAL_AREAS, config.max_attempts);
        Self::generate_with(rng, config, &sampler, &WaterQualityRules::default())
    }

    /// Generate a deployment with a custom sampler and rules.
    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        config: &DeploymentConfig,
        sampler: &LandSampler<'_>,
        rules: &WaterQualityRules,
    ) -> Result<Self, DeploymentError> {
        let mut wells = generate_wells_with(rng, config.well_count, sampler)?;
        tracing::debug!(count = wells.len(), "wells generated");

        let flagged = assign_alerts_with(rng, &mut wells, config.alert_count, rules)?;
        tracing::debug!(?flagged, "alerts assigned");

        let gateways = generate_gateways_with(rng, config.gateway_count, sampler)?;
        tracing::debug!(count = gateways.len(), "gateways generated");

        let links = connect_wells(&wells, &gateways);

        Ok(Self {
            wells,
            gateways,
            links,
        })
    }

    /// Indices of wells currently flagged.
    pub fn alerted_indices(&self) -> Vec<usize> {
        self.wells
            .iter()
            .enumerate()
            .filter(|(_, well)| well.alert)
            .map(|(index, _)| index)
            .collect()
    }

    /// Link for the well at `well_index`, if it has one.
    pub fn link_for(&self, well_index: usize) -> Option<&Link> {
        self.links.iter().find(|link| link.well_index == well_index)
    }

    pub fn coverage(&self) -> CoverageSummary {
        coverage_summary(&self.links, self.gateways.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_config_matches_demo() {
        let config = DeploymentConfig::default();
        assert_eq!(config.well_count, 40);
        assert_eq!(config.gateway_count, 8);
        assert_eq!(config.alert_count, 5);
    }

    #[test]
    fn generates_linked_deployment() {
        let mut rng = StdRng::seed_from_u64(42);
        let deployment = Deployment::generate(&mut rng, &DeploymentConfig::default()).unwrap();

        assert_eq!(deployment.wells.len(), 40);
        assert_eq!(deployment.gateways.len(), 8);
        assert_eq!(deployment.links.len(), 40);
        assert_eq!(deployment.alerted_indices().len(), 5);

        for (index, link) in deployment.links.iter().enumerate() {
            assert_eq!(link.well_index, index);
            assert!(link.gateway_index < 8);
            assert_eq!(deployment.link_for(index), Some(link));
        }

        let coverage = deployment.coverage();
        assert_eq!(coverage.wells_per_gateway.iter().sum::<usize>(), 40);
    }

    #[test]
    fn alert_count_above_wells_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = DeploymentConfig {
            well_count: 2,
            alert_count: 3,
            ..DeploymentConfig::default()
        };
        assert!(matches!(
            Deployment::generate(&mut rng, &config),
            Err(DeploymentError::Alert(_))
        ));
    }
}
