//! Projected 3D view of the solar system.
//!
//! Draws the scene into an egui_plot canvas with fixed bounds: world
//! points go through the camera rotation matrix and land on the x/y plot
//! plane, with the rotated z kept as depth for painter order, fog-style
//! dimming, and picking. Dragging rotates the camera, the scroll wheel
//! zooms, hovering runs the picking query and anchors a tooltip at the
//! pointer, and a click reports the picked body to the caller.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, Points, Polygon};
use nalgebra::Matrix3;
use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::celestial::{CelestialBody, SUN_RADIUS};
use crate::math::{rotate_point, rotation_from_drag};
use crate::picking::{pick, BodySprite};
use crate::scene::{orbit_circle, Scene};

const BASE_MARGIN: f64 = 45.0;
const ZOOM_MIN: f64 = 0.2;
const ZOOM_MAX: f64 = 40.0;
const DRAG_SENSITIVITY: f64 = 0.01;

// Fog of the original scene: full brightness at the orbital plane,
// fading out toward the back of the starfield.
const CAMERA_DISTANCE: f64 = 50.0;
const FOG_NEAR: f64 = 50.0;
const FOG_FAR: f64 = 300.0;

const ORBIT_RING_SEGMENTS: usize = 128;
const BODY_SEGMENTS: usize = 48;

pub struct ViewerState {
    pub rotation: Matrix3<f64>,
    pub zoom: f64,
    pub hovered: Option<CelestialBody>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            // Start tilted a little above the orbital plane.
            rotation: rotation_from_drag(0.0, 0.5),
            zoom: 1.0,
            hovered: None,
        }
    }
}

struct Projected {
    body: Option<CelestialBody>,
    x: f64,
    y: f64,
    depth: f64,
}

fn depth_fade(depth: f64) -> f32 {
    let dist = CAMERA_DISTANCE - depth;
    (((FOG_FAR - dist) / (FOG_FAR - FOG_NEAR)).clamp(0.0, 1.0)) as f32
}

fn circle_2d(cx: f64, cy: f64, r: f64, n: usize) -> Vec<[f64; 2]> {
    (0..=n)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / n as f64;
            [cx + r * a.cos(), cy + r * a.sin()]
        })
        .collect()
}

impl ViewerState {
    /// Draws the scene and returns the body picked by a click, if any.
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &Scene) -> Option<CelestialBody> {
        let margin = BASE_MARGIN / self.zoom;
        let rotation = self.rotation;

        let plot = Plot::new("orbit_view")
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .cursor_color(egui::Color32::TRANSPARENT);

        let mut hovered = None;
        let response = plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-margin, -margin],
                [margin, margin],
            ));
            let view_size = 2.0 * margin;

            self.draw_stars(plot_ui, scene, &rotation);
            self.draw_orbit_rings(plot_ui, &rotation);

            // Project sun and planets, then paint back to front.
            let mut items: Vec<Projected> = Vec::with_capacity(scene.bodies.len() + 1);
            items.push(Projected { body: None, x: 0.0, y: 0.0, depth: 0.0 });
            let mut sprites: Vec<BodySprite> = Vec::with_capacity(scene.bodies.len());
            for visual in &scene.bodies {
                let [wx, wy, wz] = visual.position;
                let (rx, ry, rz) = rotate_point(wx, wy, wz, &rotation);
                items.push(Projected { body: Some(visual.body), x: rx, y: ry, depth: rz });
                sprites.push(BodySprite {
                    body: visual.body,
                    pos: [rx, ry],
                    radius: visual.body.radius(),
                    depth: rz,
                });
            }
            items.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));

            for item in &items {
                match item.body {
                    None => self.draw_sun(plot_ui),
                    Some(body) => self.draw_planet(plot_ui, body, item, scene, &rotation),
                }
            }

            let min_hit = view_size * 0.015;
            let mut clicked = None;
            if plot_ui.response().hovered() {
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    hovered = pick([pointer.x, pointer.y], &sprites, min_hit);
                    if let Some(body) = hovered {
                        self.draw_hover_ring(plot_ui, body, &sprites);
                        show_tooltip(plot_ui, body);
                    }
                    if plot_ui.response().clicked() {
                        clicked = pick([pointer.x, pointer.y], &sprites, min_hit);
                    }
                }
            }
            clicked
        });
        self.hovered = hovered;

        if response.response.dragged() && !response.response.drag_started() {
            let drag = response.response.drag_delta();
            let sens = DRAG_SENSITIVITY / self.zoom.max(1.0);
            let delta_rot = rotation_from_drag(drag.x as f64 * sens, drag.y as f64 * sens);
            self.rotation = delta_rot * self.rotation;
        }

        if response.response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let factor = 1.0 + scroll as f64 * 0.001;
                self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
            }
        }

        response.inner
    }

    fn draw_stars(&self, plot_ui: &mut egui_plot::PlotUi, scene: &Scene, rotation: &Matrix3<f64>) {
        // One Points batch per brightness bucket keeps the draw count low.
        let mut bright: Vec<[f64; 2]> = Vec::new();
        let mut mid: Vec<[f64; 2]> = Vec::new();
        let mut faint: Vec<[f64; 2]> = Vec::new();
        for star in &scene.stars {
            let (rx, ry, rz) = rotate_point(star[0], star[1], star[2], rotation);
            let fade = depth_fade(rz);
            if fade > 0.66 {
                bright.push([rx, ry]);
            } else if fade > 0.33 {
                mid.push([rx, ry]);
            } else {
                faint.push([rx, ry]);
            }
        }
        for (pts, alpha) in [(bright, 230), (mid, 140), (faint, 60)] {
            plot_ui.points(
                Points::new("", pts)
                    .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha))
                    .radius(1.0),
            );
        }
    }

    fn draw_orbit_rings(&self, plot_ui: &mut egui_plot::PlotUi, rotation: &Matrix3<f64>) {
        for body in CelestialBody::ALL {
            let pts: Vec<[f64; 2]> =
                orbit_circle(0.0, 0.0, 0.0, body.orbital_distance(), ORBIT_RING_SEGMENTS)
                    .iter()
                    .map(|p| {
                        let (rx, ry, _) = rotate_point(p[0], p[1], p[2], rotation);
                        [rx, ry]
                    })
                    .collect();
            plot_ui.line(
                Line::new("", pts)
                    .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 50))
                    .width(1.0),
            );
        }
    }

    fn draw_sun(&self, plot_ui: &mut egui_plot::PlotUi) {
        let gold = egui::Color32::from_rgb(255, 215, 0);
        for (scale, alpha) in [(1.8, 30), (1.3, 70)] {
            plot_ui.polygon(
                Polygon::new("", circle_2d(0.0, 0.0, SUN_RADIUS * scale, BODY_SEGMENTS))
                    .fill_color(egui::Color32::from_rgba_unmultiplied(255, 215, 0, alpha))
                    .stroke(egui::Stroke::NONE),
            );
        }
        plot_ui.polygon(
            Polygon::new("", circle_2d(0.0, 0.0, SUN_RADIUS, BODY_SEGMENTS))
                .fill_color(gold)
                .stroke(egui::Stroke::NONE),
        );
    }

    fn draw_planet(
        &self,
        plot_ui: &mut egui_plot::PlotUi,
        body: CelestialBody,
        item: &Projected,
        scene: &Scene,
        rotation: &Matrix3<f64>,
    ) {
        let fade = 0.45 + 0.55 * depth_fade(item.depth);
        let color = body.display_color().gamma_multiply(fade);
        plot_ui.polygon(
            Polygon::new("", circle_2d(item.x, item.y, body.radius(), BODY_SEGMENTS))
                .fill_color(color)
                .stroke(egui::Stroke::NONE),
        );

        if let Some((inner, outer)) = body.ring_params() {
            let visual = scene
                .bodies
                .iter()
                .find(|v| v.body == body)
                .map(|v| v.position)
                .unwrap_or([0.0; 3]);
            let ring_color = egui::Color32::from_rgba_unmultiplied(204, 204, 204, 110);
            // A few concentric circles in the orbital plane stand in for
            // the filled annulus of the original.
            for step in 0..3 {
                let t = step as f64 / 2.0;
                let r = body.radius() * (inner + t * (outer - inner));
                let pts: Vec<[f64; 2]> = orbit_circle(visual[0], visual[1], visual[2], r, 64)
                    .iter()
                    .map(|p| {
                        let (rx, ry, _) = rotate_point(p[0], p[1], p[2], rotation);
                        [rx, ry]
                    })
                    .collect();
                plot_ui.line(Line::new("", pts).color(ring_color).width(2.0));
            }
        }
    }

    fn draw_hover_ring(
        &self,
        plot_ui: &mut egui_plot::PlotUi,
        body: CelestialBody,
        sprites: &[BodySprite],
    ) {
        if let Some(sprite) = sprites.iter().find(|s| s.body == body) {
            let pts = circle_2d(sprite.pos[0], sprite.pos[1], sprite.radius * 1.3, 64);
            plot_ui.line(Line::new("", pts).color(body.display_color()).width(2.0));
        }
    }
}

fn show_tooltip(plot_ui: &egui_plot::PlotUi, body: CelestialBody) {
    egui::Tooltip::always_open(
        plot_ui.ctx().clone(),
        egui::LayerId::background(),
        egui::Id::new("body_tooltip"),
        egui::PopupAnchor::Pointer,
    )
    .gap(12.0)
    .show(|ui| {
        ui.label(egui::RichText::new(body.label()).strong().size(14.0));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_fade_is_full_at_the_orbital_plane() {
        assert_eq!(depth_fade(0.0), 1.0);
    }

    #[test]
    fn depth_fade_vanishes_far_behind() {
        assert_eq!(depth_fade(-300.0), 0.0);
        assert!(depth_fade(-100.0) > 0.0);
    }

    #[test]
    fn circle_2d_closes() {
        let pts = circle_2d(1.0, 2.0, 3.0, 32);
        assert_eq!(pts.len(), 33);
        assert!((pts[0][0] - pts[32][0]).abs() < 1e-9);
        assert!((pts[0][1] - pts[32][1]).abs() < 1e-9);
    }
}
