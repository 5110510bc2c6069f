use eframe::egui;

use crate::error::DashboardError;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

/// What the window shows for the whole session.
pub enum Screen {
    Dashboard(AppState),
    /// Loading or validation failed; only the message is rendered.
    Failed(DashboardError),
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct KTrendsApp {
    pub screen: Screen,
}

impl KTrendsApp {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

impl eframe::App for KTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = match &mut self.screen {
            Screen::Dashboard(state) => state,
            Screen::Failed(err) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::fatal_error(ui, err);
                });
                return;
            }
        };

        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state);
        });

        // ---- Left side panel: year range ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, state);
            });

        // ---- Central panel: charts and preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = match &state.view {
                Ok(view) => view,
                Err(err) if err.is_fatal() => {
                    panels::fatal_error(ui, err);
                    return;
                }
                Err(err) => {
                    panels::empty_notice(ui, err);
                    return;
                }
            };
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::yearly_trend(ui, view);
                    ui.separator();
                    ui.columns(2, |cols| {
                        plot::type_distribution(&mut cols[0], view, &state.type_colors);
                        plot::genre_top(&mut cols[1], view);
                    });
                    ui.separator();
                    table::preview(ui, view, state.table.column_names());
                });
        });
    }
}
