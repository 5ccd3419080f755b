//! Screen-space picking.
//!
//! Bodies are projected into plot coordinates by the viewer; picking then
//! reduces to a disc test against the pointer. Hover (every frame) and
//! click (on release) both go through [`pick`].

use crate::celestial::CelestialBody;

/// Projected footprint of a body in plot coordinates. `depth` grows
/// toward the viewer, so the greatest depth is the nearest body.
#[derive(Clone, Copy, Debug)]
pub struct BodySprite {
    pub body: CelestialBody,
    pub pos: [f64; 2],
    pub radius: f64,
    pub depth: f64,
}

/// Nearest body under the pointer, if any. Small planets get their hit
/// radius inflated to `min_radius` so they stay hoverable when zoomed out.
pub fn pick(pointer: [f64; 2], sprites: &[BodySprite], min_radius: f64) -> Option<CelestialBody> {
    let mut best: Option<(CelestialBody, f64, f64)> = None;
    for sprite in sprites {
        let dx = pointer[0] - sprite.pos[0];
        let dy = pointer[1] - sprite.pos[1];
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > sprite.radius.max(min_radius) {
            continue;
        }
        let closer = match best {
            None => true,
            Some((_, best_depth, best_dist)) => {
                sprite.depth > best_depth || (sprite.depth == best_depth && dist < best_dist)
            }
        };
        if closer {
            best = Some((sprite.body, sprite.depth, dist));
        }
    }
    best.map(|(body, _, _)| body)
}
