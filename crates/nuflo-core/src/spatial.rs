//! Great-circle distance and nearest-gateway search.

use crate::models::{Gateway, Link, Well};
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Calculate distance between two points in kilometers using the Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Find the gateway closest to a well.
///
/// Returns the gateway index and the distance in kilometers, or `None` when
/// there are no gateways. Ties keep the first gateway encountered.
pub fn nearest_gateway(well: &Well, gateways: &[Gateway]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, gateway) in gateways.iter().enumerate() {
        let distance = calculate_distance(well.lat, well.lon, gateway.lat, gateway.lon);
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((index, distance)),
        }
    }
    best
}

/// Link every well to its nearest gateway.
///
/// Brute force over all pairs; wells are left unlinked only when the gateway
/// list is empty.
pub fn connect_wells(wells: &[Well], gateways: &[Gateway]) -> Vec<Link> {
    wells
        .iter()
        .enumerate()
        .filter_map(|(well_index, well)| {
            nearest_gateway(well, gateways).map(|(gateway_index, distance_km)| Link {
                well_index,
                gateway_index,
                distance_km,
            })
        })
        .collect()
}

/// Per-gateway load and link-length statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Number of wells linked to each gateway, indexed like the gateway list
    pub wells_per_gateway: Vec<usize>,
    pub mean_distance_km: f64,
    pub max_distance_km: f64,
}

/// Summarize how links spread over the gateways.
pub fn coverage_summary(links: &[Link], gateway_count: usize) -> CoverageSummary {
    let mut wells_per_gateway = vec![0; gateway_count];
    let mut total = 0.0;
    let mut max_distance_km: f64 = 0.0;
    let mut counted = 0usize;

    // Links to unknown gateways are left out of every statistic
    for link in links {
        let Some(count) = wells_per_gateway.get_mut(link.gateway_index) else {
            continue;
        };
        *count += 1;
        counted += 1;
        total += link.distance_km;
        max_distance_km = max_distance_km.max(link.distance_km);
    }

    let mean_distance_km = if counted == 0 {
        0.0
    } else {
        total / counted as f64
    };

    CoverageSummary {
        wells_per_gateway,
        mean_distance_km,
        max_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_at(lat: f64, lon: f64) -> Well {
        Well::new(lat, lon, 7.0, 0.01, 10, 22.0, 200.0)
    }

    #[test]
    fn test_distance_same_point() {
        assert_eq!(calculate_distance(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_distance_one_degree() {
        // ~111.19km per degree along the equator
        let dist = calculate_distance(0.0, 0.0, 0.0, 1.0);
        assert!((dist - 111.19).abs() < 0.5, "got {dist}");
        let dist = calculate_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111.19).abs() < 0.5, "got {dist}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = calculate_distance(-12.0, -75.0, -9.0, -73.5);
        let b = calculate_distance(-9.0, -73.5, -12.0, -75.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn nearest_gateway_picks_closest() {
        let gateways = [Gateway::new(0.0, 0.0), Gateway::new(10.0, 10.0)];
        let (index, distance) = nearest_gateway(&well_at(1.0, 1.0), &gateways).unwrap();
        assert_eq!(index, 0);
        assert_eq!(gateways[index], Gateway::new(0.0, 0.0));
        assert!(distance > 0.0);
    }

    #[test]
    fn nearest_gateway_tie_keeps_first() {
        let gateways = [Gateway::new(0.0, 1.0), Gateway::new(0.0, -1.0)];
        let (index, _) = nearest_gateway(&well_at(0.0, 0.0), &gateways).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn nearest_gateway_empty() {
        assert!(nearest_gateway(&well_at(0.0, 0.0), &[]).is_none());
        assert!(connect_wells(&[well_at(0.0, 0.0)], &[]).is_empty());
    }

    #[test]
    fn coverage_counts_links_per_gateway() {
        let gateways = [Gateway::new(-10.0, -75.0), Gateway::new(-14.0, -72.0)];
        let wells = [
            well_at(-10.1, -75.1),
            well_at(-9.9, -74.9),
            well_at(-14.2, -72.1),
        ];
        let links = connect_wells(&wells, &gateways);
        assert_eq!(links.len(), 3);
        assert_eq!(links[2].gateway_index, 1);

        let summary = coverage_summary(&links, gateways.len());
        assert_eq!(summary.wells_per_gateway, vec![2, 1]);
        assert!(summary.max_distance_km >= summary.mean_distance_km);
        assert!(summary.mean_distance_km > 0.0);
    }

    #[test]
    fn coverage_ignores_links_to_unknown_gateways() {
        let links = [
            Link { well_index: 0, gateway_index: 0, distance_km: 10.0 },
            Link { well_index: 1, gateway_index: 5, distance_km: 900.0 },
        ];
        let summary = coverage_summary(&links, 1);
        assert_eq!(summary.wells_per_gateway, vec![1]);
        assert_eq!(summary.mean_distance_km, 10.0);
        assert_eq!(summary.max_distance_km, 10.0);
    }

    #[test]
    fn coverage_of_no_links() {
        let summary = coverage_summary(&[], 3);
        assert_eq!(summary.wells_per_gateway, vec![0, 0, 0]);
        assert_eq!(summary.mean_distance_km, 0.0);
        assert_eq!(summary.max_distance_km, 0.0);
    }
}
