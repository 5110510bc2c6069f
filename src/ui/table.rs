use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::view::DashboardView;

const ROW_HEIGHT: f32 = 18.0;

/// Raw-row preview of the filtered titles, every source column in order.
pub fn preview(ui: &mut Ui, view: &DashboardView, columns: &[String]) {
    ui.strong(format!(
        "Data preview ({} of {} titles)",
        view.preview.len(),
        view.matched
    ));

    TableBuilder::new(ui)
        .id_salt("preview_table")
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), columns.len())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for name in columns {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.preview.len(), |mut row| {
                let record = &view.preview[row.index()];
                for name in columns {
                    row.col(|ui| {
                        ui.label(record.display_cell(name));
                    });
                }
            });
        });
}
