//! Scene construction.
//!
//! Built once at startup: the starfield and one `VisualBody` per registry
//! entry. Body positions start at `(orbital_distance, 0, 0)` and are
//! overwritten from the simulation every tick; the stars never move.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::celestial::CelestialBody;
use crate::sim::Simulation;

pub const STAR_COUNT: usize = 3000;
pub const STAR_FIELD_HALF_WIDTH: f64 = 350.0;

const STAR_SEED: u64 = 42;

/// A renderable body, tagged with its registry entry so picking can
/// recover the metadata from a hit.
#[derive(Clone, Copy, Debug)]
pub struct VisualBody {
    pub body: CelestialBody,
    pub position: [f64; 3],
}

pub struct Scene {
    pub stars: Vec<[f64; 3]>,
    pub bodies: Vec<VisualBody>,
}

impl Scene {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(STAR_SEED);
        let h = STAR_FIELD_HALF_WIDTH;
        let stars = (0..STAR_COUNT)
            .map(|_| [rng.gen_range(-h..h), rng.gen_range(-h..h), rng.gen_range(-h..h)])
            .collect();

        let bodies = CelestialBody::ALL
            .iter()
            .map(|&body| VisualBody {
                body,
                position: [body.orbital_distance(), 0.0, 0.0],
            })
            .collect();

        Self { stars, bodies }
    }

    /// Re-derives every body position from the simulation's phases.
    pub fn sync(&mut self, sim: &Simulation) {
        for visual in &mut self.bodies {
            visual.position = sim.position(visual.body);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Points of a circle of radius `r` in the y=0 orbital plane, centered on
/// `(cx, cy, cz)`. The last point closes the loop.
pub fn orbit_circle(cx: f64, cy: f64, cz: f64, r: f64, n: usize) -> Vec<[f64; 3]> {
    (0..=n)
        .map(|i| {
            let a = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            [cx + r * a.cos(), cy, cz + r * a.sin()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starfield_fills_the_cube() {
        let scene = Scene::new();
        assert_eq!(scene.stars.len(), STAR_COUNT);
        for star in &scene.stars {
            for c in star {
                assert!(c.abs() <= STAR_FIELD_HALF_WIDTH);
            }
        }
    }

    #[test]
    fn starfield_is_reproducible() {
        let a = Scene::new();
        let b = Scene::new();
        assert_eq!(a.stars, b.stars);
    }

    #[test]
    fn bodies_start_on_the_x_axis() {
        let scene = Scene::new();
        assert_eq!(scene.bodies.len(), CelestialBody::ALL.len());
        for visual in &scene.bodies {
            assert_eq!(visual.position, [visual.body.orbital_distance(), 0.0, 0.0]);
        }
    }

    #[test]
    fn sync_tracks_the_simulation() {
        let mut sim = Simulation::new();
        let mut scene = Scene::new();
        for _ in 0..42 {
            sim.tick();
        }
        scene.sync(&sim);
        for visual in &scene.bodies {
            assert_eq!(visual.position, sim.position(visual.body));
        }
    }

    #[test]
    fn orbit_circle_closes_and_stays_planar() {
        let pts = orbit_circle(0.0, 0.0, 0.0, 13.0, 64);
        assert_eq!(pts.len(), 65);
        assert!((pts[0][0] - pts[64][0]).abs() < 1e-9);
        for p in &pts {
            assert_eq!(p[1], 0.0);
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - 13.0).abs() < 1e-9);
        }
    }
}
