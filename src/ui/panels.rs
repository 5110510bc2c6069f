use eframe::egui::{self, Color32, RichText, Ui};

use crate::error::DashboardError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year range control
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (min_year, max_year) = state.bounds();
    ui.strong("Year range");

    let mut from = state.range.lo;
    if ui
        .add(egui::Slider::new(&mut from, min_year..=max_year).text("from"))
        .changed()
    {
        state.set_from(from);
    }

    let mut to = state.range.hi;
    if ui
        .add(egui::Slider::new(&mut to, min_year..=max_year).text("to"))
        .changed()
    {
        state.set_to(to);
    }

    if ui.small_button("Reset").clicked() {
        state.reset_range();
    }

    ui.separator();
    match &state.view {
        Ok(view) => {
            ui.label(format!(
                "{}–{}: {} of {} titles",
                view.range.lo,
                view.range.hi,
                view.matched,
                state.table.len()
            ));
        }
        Err(_) => {
            let text = format!("0 of {} titles", state.table.len());
            ui.label(RichText::new(text).color(Color32::YELLOW));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the page title and a one-line description.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.heading("Korean Content on Netflix – 10-Year Trend");
    ui.label(format!(
        "Only Korean titles released on Netflix: counts, types and genres over time. Source: {}",
        state.config.source_path.display()
    ));
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

/// Shown instead of the charts when the selected years match nothing.
pub fn empty_notice(ui: &mut Ui, err: &DashboardError) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("⚠ {err}. Pick another year range."))
                .color(Color32::YELLOW)
                .heading(),
        );
    });
}

/// The only thing rendered when the dataset could not be loaded.
pub fn fatal_error(ui: &mut Ui, err: &DashboardError) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("❌ {err}"))
                .color(Color32::RED)
                .heading(),
        );
    });
}
