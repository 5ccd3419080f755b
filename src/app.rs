//! Application shell and per-frame loop.
//!
//! Ticks the simulation, syncs body positions into the scene, draws the
//! control panel and the projected view, then applies click selection.
//! Picking and rendering stay live while paused; only phase advancement
//! stops.

use eframe::egui;

use crate::celestial::CelestialBody;
use crate::controls;
use crate::scene::Scene;
use crate::sim::Simulation;
use crate::viewer::ViewerState;

pub struct App {
    sim: Simulation,
    scene: Scene,
    viewer: ViewerState,
    selected: Option<CelestialBody>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            sim: Simulation::new(),
            scene: Scene::new(),
            viewer: ViewerState::default(),
            selected: None,
        }
    }
}

impl App {
    /// A click on empty space keeps the current selection; a hit
    /// overwrites it in place.
    fn apply_click(&mut self, hit: Option<CelestialBody>) {
        if let Some(body) = hit {
            self.selected = Some(body);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sim.tick();
        self.scene.sync(&self.sim);

        egui::SidePanel::left("controls")
            .default_width(230.0)
            .show(ctx, |ui| controls::side_panel(ui, &mut self.sim));

        let clicked = egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::BLACK))
            .show(ctx, |ui| self.viewer.show(ui, &self.scene))
            .inner;
        self.apply_click(clicked);

        controls::info_window(ctx, &mut self.selected);

        // Keep ticking at display rate even without input events.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_miss_keeps_the_selection() {
        let mut app = App::default();
        assert_eq!(app.selected, None);

        app.apply_click(None);
        assert_eq!(app.selected, None);

        app.apply_click(Some(CelestialBody::Earth));
        assert_eq!(app.selected, Some(CelestialBody::Earth));

        app.apply_click(None);
        assert_eq!(app.selected, Some(CelestialBody::Earth));
    }

    #[test]
    fn new_selection_overwrites_in_place() {
        let mut app = App::default();
        app.apply_click(Some(CelestialBody::Saturn));
        app.apply_click(Some(CelestialBody::Neptune));
        assert_eq!(app.selected, Some(CelestialBody::Neptune));
    }
}
