//! Celestial body registry.
//!
//! Static per-planet metadata: display color, visual radius, orbital
//! distance, and the fields shown in the info window. Registry order is
//! fixed by `ALL` and determines default orbit speeds and slider order.

use eframe::egui::Color32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CelestialBody {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Visual radius of the sun, in scene units. The sun is static and not a
/// `CelestialBody`: it never orbits and is not pickable.
pub const SUN_RADIUS: f64 = 4.0;

impl CelestialBody {
    pub const ALL: [CelestialBody; 8] = [
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Earth,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
    ];

    /// Position in registry order, used for default speed assignment.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|b| b == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Earth => "Earth",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
        }
    }

    pub fn display_color(&self) -> Color32 {
        match self {
            CelestialBody::Mercury => Color32::from_rgb(144, 144, 144),
            CelestialBody::Venus => Color32::from_rgb(168, 148, 31),
            CelestialBody::Earth => Color32::from_rgb(30, 144, 255),
            CelestialBody::Mars => Color32::from_rgb(178, 34, 34),
            CelestialBody::Jupiter => Color32::from_rgb(210, 180, 140),
            CelestialBody::Saturn => Color32::from_rgb(245, 222, 179),
            CelestialBody::Uranus => Color32::from_rgb(64, 224, 208),
            CelestialBody::Neptune => Color32::from_rgb(70, 90, 200),
        }
    }

    /// Visual sphere radius in scene units.
    pub fn radius(&self) -> f64 {
        match self {
            CelestialBody::Mercury => 0.4,
            CelestialBody::Venus => 0.9,
            CelestialBody::Earth => 1.0,
            CelestialBody::Mars => 0.8,
            CelestialBody::Jupiter => 2.5,
            CelestialBody::Saturn => 2.2,
            CelestialBody::Uranus => 1.7,
            CelestialBody::Neptune => 1.6,
        }
    }

    /// Orbit radius around the sun, in scene units.
    pub fn orbital_distance(&self) -> f64 {
        match self {
            CelestialBody::Mercury => 7.0,
            CelestialBody::Venus => 10.0,
            CelestialBody::Earth => 13.0,
            CelestialBody::Mars => 16.0,
            CelestialBody::Jupiter => 20.0,
            CelestialBody::Saturn => 25.0,
            CelestialBody::Uranus => 30.0,
            CelestialBody::Neptune => 35.0,
        }
    }

    pub fn moon_count(&self) -> u32 {
        match self {
            CelestialBody::Mercury => 0,
            CelestialBody::Venus => 0,
            CelestialBody::Earth => 1,
            CelestialBody::Mars => 2,
            CelestialBody::Jupiter => 79,
            CelestialBody::Saturn => 83,
            CelestialBody::Uranus => 27,
            CelestialBody::Neptune => 14,
        }
    }

    /// Mean surface temperature in degrees Celsius.
    pub fn surface_temperature_c(&self) -> f64 {
        match self {
            CelestialBody::Mercury => 167.0,
            CelestialBody::Venus => 464.0,
            CelestialBody::Earth => 15.0,
            CelestialBody::Mars => -65.0,
            CelestialBody::Jupiter => -110.0,
            CelestialBody::Saturn => -140.0,
            CelestialBody::Uranus => -195.0,
            CelestialBody::Neptune => -200.0,
        }
    }

    pub fn diameter_km(&self) -> f64 {
        match self {
            CelestialBody::Mercury => 4879.0,
            CelestialBody::Venus => 12104.0,
            CelestialBody::Earth => 12742.0,
            CelestialBody::Mars => 6779.0,
            CelestialBody::Jupiter => 139820.0,
            CelestialBody::Saturn => 116460.0,
            CelestialBody::Uranus => 50724.0,
            CelestialBody::Neptune => 49244.0,
        }
    }

    pub fn rotation_period_hours(&self) -> f64 {
        match self {
            CelestialBody::Mercury => 1406.4,
            CelestialBody::Venus => 5832.0,
            CelestialBody::Earth => 24.0,
            CelestialBody::Mars => 24.6,
            CelestialBody::Jupiter => 9.9,
            CelestialBody::Saturn => 10.7,
            CelestialBody::Uranus => 17.2,
            CelestialBody::Neptune => 16.1,
        }
    }

    /// Decorative ring, as (inner, outer) multiples of the body radius.
    pub fn ring_params(&self) -> Option<(f64, f64)> {
        match self {
            CelestialBody::Saturn => Some((1.3, 2.2)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_eight_unique_bodies() {
        let labels: HashSet<&str> = CelestialBody::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn registry_order_is_stable() {
        for (i, body) in CelestialBody::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
        }
        assert_eq!(CelestialBody::ALL[0], CelestialBody::Mercury);
        assert_eq!(CelestialBody::ALL[7], CelestialBody::Neptune);
    }

    #[test]
    fn geometry_is_positive_and_increasing() {
        let mut prev = 0.0;
        for body in CelestialBody::ALL {
            assert!(body.radius() > 0.0);
            assert!(body.orbital_distance() > prev);
            prev = body.orbital_distance();
        }
    }

    #[test]
    fn only_saturn_has_a_ring() {
        for body in CelestialBody::ALL {
            let has_ring = body.ring_params().is_some();
            assert_eq!(has_ring, body == CelestialBody::Saturn);
            if let Some((inner, outer)) = body.ring_params() {
                assert!(inner > 1.0 && outer > inner);
            }
        }
    }
}
