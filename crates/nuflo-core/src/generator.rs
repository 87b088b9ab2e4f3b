//! Synthetic well and gateway generation.
//!
//! Points are drawn by rejection sampling: a rural area is picked uniformly,
//! a coordinate is drawn uniformly inside it and kept only if it passes the
//! land filter. Each point gets a bounded number of attempts.

use crate::error::GenerationError;
use crate::models::{Gateway, Well};
use crate::regions::{is_land, RuralArea, RURAL_AREAS};
use rand::Rng;

/// Default number of draws allowed per accepted point.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

const PH_RANGE: (f64, f64) = (6.5, 8.5);
const LEAD_RANGE: (f64, f64) = (0.0, 0.1);
const COLIFORM_MAX: u32 = 100;
const TEMPERATURE_RANGE: (f64, f64) = (20.0, 25.0);
const TDS_RANGE: (f64, f64) = (50.0, 550.0);

/// Draws land coordinates from a set of rural areas.
#[derive(Debug, Clone, Copy)]
pub struct LandSampler<'a> {
    areas: &'a [RuralArea],
    max_attempts: usize,
}

impl Default for LandSampler<'static> {
    fn default() -> Self {
        Self::new(&RURAL_AREAS, DEFAULT_MAX_ATTEMPTS)
    }
}

impl<'a> LandSampler<'a> {
    /// Sampler over `areas`; a `max_attempts` of 0 is raised to 1.
    pub fn new(areas: &'a [RuralArea], max_attempts: usize) -> Self {
        Self {
            areas,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn areas(&self) -> &'a [RuralArea] {
        self.areas
    }

    /// Draw one `(lat, lon)` that passes the land filter.
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(f64, f64), GenerationError> {
        if self.areas.is_empty() {
            return Err(GenerationError::NoRuralAreas);
        }

        for _ in 0..self.max_attempts {
            let area = &self.areas[rng.random_range(0..self.areas.len())];
            let lat = uniform(rng, area.lat_min, area.lat_max);
            let lon = uniform(rng, area.lon_min, area.lon_max);
            if is_land(lat, lon) {
                return Ok((lat, lon));
            }
        }

        tracing::warn!(attempts = self.max_attempts, "land sampling exhausted");
        Err(GenerationError::LandSamplingExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Generate `count` wells over the default rural areas.
pub fn generate_wells<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<Well>, GenerationError> {
    generate_wells_with(rng, count, &LandSampler::default())
}

/// Generate `count` wells with the given sampler.
pub fn generate_wells_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    sampler: &LandSampler<'_>,
) -> Result<Vec<Well>, GenerationError> {
    let mut wells = Vec::with_capacity(count);
    while wells.len() < count {
        let (lat, lon) = sampler.sample_point(rng)?;
        wells.push(random_readings(rng, lat, lon));
    }
    Ok(wells)
}

/// Generate `count` gateways over the default rural areas.
pub fn generate_gateways<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<Gateway>, GenerationError> {
    generate_gateways_with(rng, count, &LandSampler::default())
}

/// Generate `count` gateways with the given sampler.
pub fn generate_gateways_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    sampler: &LandSampler<'_>,
) -> Result<Vec<Gateway>, GenerationError> {
    let mut gateways = Vec::with_capacity(count);
    while gateways.len() < count {
        let (lat, lon) = sampler.sample_point(rng)?;
        gateways.push(Gateway::new(lat, lon));
    }
    Ok(gateways)
}

/// Sample readings for a well at the given position.
///
/// Values are rounded to display precision: 2 decimals, 4 for lead.
fn random_readings<R: Rng + ?Sized>(rng: &mut R, lat: f64, lon: f64) -> Well {
    let ph = round_to(uniform(rng, PH_RANGE.0, PH_RANGE.1), 2);
    let lead = round_to(uniform(rng, LEAD_RANGE.0, LEAD_RANGE.1), 4);
    let coliform = rng.random_range(0..=COLIFORM_MAX);
    let temperature = round_to(uniform(rng, TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1), 2);
    let tds = round_to(uniform(rng, TDS_RANGE.0, TDS_RANGE.1), 2);
    Well::new(lat, lon, ph, lead, coliform, temperature, tds)
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::in_any_area;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_wells(&mut rng, 40).unwrap().len(), 40);
        assert_eq!(generate_gateways(&mut rng, 8).unwrap().len(), 8);
        assert!(generate_wells(&mut rng, 0).unwrap().is_empty());
    }

    #[test]
    fn wells_are_on_land_inside_areas() {
        let mut rng = StdRng::seed_from_u64(11);
        for well in generate_wells(&mut rng, 200).unwrap() {
            assert!(is_land(well.lat, well.lon));
            assert!(in_any_area(&RURAL_AREAS, well.lat, well.lon));
        }
        for gateway in generate_gateways(&mut rng, 50).unwrap() {
            assert!(is_land(gateway.lat, gateway.lon));
            assert!(in_any_area(&RURAL_AREAS, gateway.lat, gateway.lon));
        }
    }

    #[test]
    fn readings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for well in generate_wells(&mut rng, 200).unwrap() {
            assert!((6.5..=8.5).contains(&well.ph), "ph {}", well.ph);
            assert!((0.0..=0.1).contains(&well.lead), "lead {}", well.lead);
            assert!(well.coliform <= 100);
            assert!((20.0..=25.0).contains(&well.temperature));
            assert!((50.0..=550.0).contains(&well.tds));
            assert!(!well.alert);
            assert!(well.issue.is_none());
        }
    }

    #[test]
    fn readings_are_rounded() {
        let mut rng = StdRng::seed_from_u64(5);
        for well in generate_wells(&mut rng, 20).unwrap() {
            assert!((well.ph * 100.0 - (well.ph * 100.0).round()).abs() < 1e-6);
            assert!((well.lead * 10_000.0 - (well.lead * 10_000.0).round()).abs() < 1e-6);
        }
    }

    #[test]
    fn sea_only_area_is_exhausted() {
        let sea = [RuralArea::new(-10.0, -5.0, -90.0, -85.0)];
        let sampler = LandSampler::new(&sea, 25);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_wells_with(&mut rng, 3, &sampler),
            Err(GenerationError::LandSamplingExhausted { attempts: 25 })
        );
    }

    #[test]
    fn zero_attempts_raised_to_one() {
        let sea = [RuralArea::new(-10.0, -5.0, -90.0, -85.0)];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            LandSampler::new(&sea, 0).sample_point(&mut rng),
            Err(GenerationError::LandSamplingExhausted { attempts: 1 })
        );
    }

    #[test]
    fn empty_areas_rejected() {
        let sampler = LandSampler::new(&[], 10);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_gateways_with(&mut rng, 1, &sampler),
            Err(GenerationError::NoRuralAreas)
        );
    }

    #[test]
    fn partly_sea_area_only_yields_land() {
        // Straddles the -80 lon cutoff; the western half is rejected
        let mixed = [RuralArea::new(-12.0, -10.0, -82.0, -78.0)];
        let sampler = LandSampler::new(&mixed, 1_000);
        let mut rng = StdRng::seed_from_u64(9);
        let gateways = generate_gateways_with(&mut rng, 30, &sampler).unwrap();
        assert!(gateways.iter().all(|g| g.lon >= -80.0));
    }
}
