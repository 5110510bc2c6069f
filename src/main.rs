mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::{KTrendsApp, Screen};
use config::DashboardConfig;
use data::cache::CatalogCache;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let cache = CatalogCache::new(DashboardConfig::default());
    let config = cache.config().clone();

    // Load once; every later interaction works on this table.
    let screen = match cache.load() {
        Ok(table) => Screen::Dashboard(AppState::new(table, config.clone())),
        Err(e) => {
            log::error!("Cannot start dashboard: {e}");
            Screen::Failed(e)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(KTrendsApp::new(screen)))),
    )
}
