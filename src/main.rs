use eframe::egui;

mod app;
mod celestial;
mod controls;
mod math;
mod picking;
mod scene;
mod sim;
mod viewer;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting solar-viz {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Solar Viz",
        options,
        Box::new(|_cc| Ok(Box::new(app::App::default()))),
    )
}
