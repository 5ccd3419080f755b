//! Speed control panel and info overlay.
//!
//! The side panel is the only writer of angular speeds after startup:
//! each slider edits a copy and commits through `Simulation::set_speed`,
//! so the clamping and non-finite rejection live in one place.

use eframe::egui;

use crate::celestial::CelestialBody;
use crate::sim::{Simulation, SPEED_MAX, SPEED_MIN, SPEED_STEP};

pub fn side_panel(ui: &mut egui::Ui, sim: &mut Simulation) {
    ui.heading("Solar System");
    ui.separator();

    let toggle_label = if sim.is_running() { "Pause" } else { "Resume" };
    if ui.button(toggle_label).clicked() {
        sim.toggle_running();
    }

    ui.separator();
    ui.label("Orbit speed");
    for body in CelestialBody::ALL {
        let mut speed = sim.speed(body);
        let slider = egui::Slider::new(&mut speed, SPEED_MIN..=SPEED_MAX)
            .step_by(SPEED_STEP)
            .text(body.label());
        if ui.add(slider).changed() {
            sim.set_speed(body, speed);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        let hash = env!("GIT_HASH");
        let version = if hash.is_empty() {
            format!("solar-viz {}", env!("CARGO_PKG_VERSION"))
        } else {
            format!("solar-viz {} ({hash})", env!("CARGO_PKG_VERSION"))
        };
        ui.weak(version);
    });
}

/// Shows the info window while a body is selected; the Close button
/// clears the selection. A new selection just swaps the content.
pub fn info_window(ctx: &egui::Context, selected: &mut Option<CelestialBody>) {
    let Some(body) = *selected else { return };

    let mut close = false;
    egui::Window::new("Planet Info")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(body.label()).strong().size(18.0));
            ui.separator();
            egui::Grid::new("planet_info_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Temperature:");
                    ui.label(format!("{:.0}\u{b0}C", body.surface_temperature_c()));
                    ui.end_row();
                    ui.label("Moons:");
                    ui.label(body.moon_count().to_string());
                    ui.end_row();
                    ui.label("Diameter:");
                    ui.label(format!("{:.0} km", body.diameter_km()));
                    ui.end_row();
                    ui.label("Rotation:");
                    ui.label(format_rotation(body.rotation_period_hours()));
                    ui.end_row();
                });
            ui.add_space(6.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });

    if close {
        *selected = None;
    }
}

fn format_rotation(hours: f64) -> String {
    if hours.abs() >= 100.0 {
        format!("{:.1} days", hours / 24.0)
    } else {
        format!("{:.1} hours", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_switches_to_days_for_slow_spinners() {
        assert_eq!(format_rotation(24.0), "24.0 hours");
        assert_eq!(format_rotation(CelestialBody::Mercury.rotation_period_hours()), "58.6 days");
        assert_eq!(format_rotation(CelestialBody::Venus.rotation_period_hours()), "243.0 days");
    }
}
