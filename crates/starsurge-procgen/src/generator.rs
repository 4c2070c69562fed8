//! Seeded star-system layout generation.
//!
//! Produces plain placement data (the presentation layer instantiates
//! whatever assets it likes at these sites). Counts and placements come
//! from the caller's seeded RNG, so the same seed reproduces the same
//! system.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starsurge_core::types::Vec3;

/// Bounds for system generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub system_radius: f64,
    pub min_planets: u32,
    pub max_planets: u32,
    pub min_asteroids: u32,
    pub max_asteroids: u32,
    pub min_stations: u32,
    pub max_stations: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            system_radius: 1000.0,
            min_planets: 3,
            max_planets: 8,
            min_asteroids: 10,
            max_asteroids: 30,
            min_stations: 1,
            max_stations: 3,
        }
    }
}

/// A generated placement site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub position: Vec3,
    pub scale: f64,
}

/// An asteroid belt: a concentric radius band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Belt {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// The complete generated system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemLayout {
    /// The star sits at the origin.
    pub star: Vec3,
    pub planets: Vec<Site>,
    pub belts: Vec<Belt>,
    pub asteroids: Vec<Site>,
    pub stations: Vec<Site>,
}

impl SystemLayout {
    /// Generate a system within `config` bounds using `rng`.
    pub fn generate(config: &GeneratorConfig, rng: &mut ChaCha8Rng) -> Self {
        let mut layout = Self {
            star: Vec3::ZERO,
            ..Default::default()
        };

        let planet_count = rng.gen_range(config.min_planets..=config.max_planets);
        for _ in 0..planet_count {
            let distance = rng.gen_range(50.0..config.system_radius * 0.8);
            layout.planets.push(Site {
                position: ring_position(rng, distance, 0.0),
                scale: rng.gen_range(5.0..20.0),
            });
        }

        // 1-3 concentric belts; every asteroid lands in one of them
        let belt_count = rng.gen_range(1..4);
        for _ in 0..belt_count {
            let inner = rng.gen_range(config.system_radius * 0.3..config.system_radius * 0.7);
            let width = rng.gen_range(20.0..80.0);
            layout.belts.push(Belt {
                inner_radius: inner,
                outer_radius: inner + width,
            });
        }

        let asteroid_count = rng.gen_range(config.min_asteroids..=config.max_asteroids);
        for _ in 0..asteroid_count {
            let belt = layout.belts[rng.gen_range(0..layout.belts.len())];
            let distance = rng.gen_range(belt.inner_radius..belt.outer_radius);
            let height = rng.gen_range(-10.0..10.0);
            layout.asteroids.push(Site {
                position: ring_position(rng, distance, height),
                scale: rng.gen_range(1.0..5.0),
            });
        }

        let station_count = rng.gen_range(config.min_stations..=config.max_stations);
        for _ in 0..station_count {
            let distance = rng.gen_range(100.0..config.system_radius * 0.6);
            layout.stations.push(Site {
                position: ring_position(rng, distance, 0.0),
                scale: 1.0,
            });
        }

        layout
    }
}

/// Point at `distance` from the origin at a random angle, lifted by `height`.
fn ring_position(rng: &mut ChaCha8Rng, distance: f64, height: f64) -> Vec3 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Vec3::new(distance * angle.sin(), height, distance * angle.cos())
}
