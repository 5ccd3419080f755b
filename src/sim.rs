//! Orbit simulation state.
//!
//! One `OrbitState` per registry body, owned by `Simulation` together with
//! the running/paused flag. Phases advance by the accumulated-angle policy:
//! each tick adds the current angular speed and wraps into [0, 2π).

use std::f64::consts::PI;

use crate::celestial::CelestialBody;

pub const SPEED_MIN: f64 = 0.0;
pub const SPEED_MAX: f64 = 0.1;
pub const SPEED_STEP: f64 = 0.001;

const TWO_PI: f64 = 2.0 * PI;

/// Default angular speed for the i-th body in registry order.
pub fn default_speed(index: usize) -> f64 {
    0.01 + 0.002 * index as f64
}

#[derive(Clone, Copy, Debug)]
pub struct OrbitState {
    pub angular_speed: f64,
    pub phase: f64,
}

pub struct Simulation {
    states: Vec<OrbitState>,
    running: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        let states = (0..CelestialBody::ALL.len())
            .map(|i| OrbitState {
                angular_speed: default_speed(i),
                phase: 0.0,
            })
            .collect();
        Self { states, running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        log::debug!("simulation {}", if self.running { "resumed" } else { "paused" });
    }

    pub fn speed(&self, body: CelestialBody) -> f64 {
        self.states[body.index()].angular_speed
    }

    /// Sets a body's angular speed. Non-finite input is ignored and the
    /// prior speed kept; finite input is clamped to the slider range.
    pub fn set_speed(&mut self, body: CelestialBody, speed: f64) {
        if !speed.is_finite() {
            log::warn!("ignoring non-finite speed for {}", body.label());
            return;
        }
        self.states[body.index()].angular_speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn phase(&self, body: CelestialBody) -> f64 {
        self.states[body.index()].phase
    }

    /// Current position on the orbital plane: `[d·cos φ, 0, d·sin φ]`.
    pub fn position(&self, body: CelestialBody) -> [f64; 3] {
        let d = body.orbital_distance();
        let phase = self.phase(body);
        [d * phase.cos(), 0.0, d * phase.sin()]
    }

    /// Advances every orbit by one tick. No-op while paused.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        for state in &mut self.states {
            state.phase += state.angular_speed;
            if state.phase >= TWO_PI {
                state.phase -= TWO_PI;
            }
        }
    }
}
