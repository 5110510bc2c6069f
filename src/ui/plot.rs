use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::view::DashboardView;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Yearly trend (line)
// ---------------------------------------------------------------------------

/// Titles per release year.
pub fn yearly_trend(ui: &mut Ui, view: &DashboardView) {
    ui.strong("Korean titles per year");

    let points: Vec<[f64; 2]> = view
        .yearly
        .iter()
        .map(|&(year, n)| [year as f64, n as f64])
        .collect();

    Plot::new("yearly_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Titles")
        .x_axis_formatter(|mark: GridMark, _range| whole_number(mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Type distribution (vertical bars)
// ---------------------------------------------------------------------------

/// Titles per content type, most common first.
pub fn type_distribution(ui: &mut Ui, view: &DashboardView, colors: &ColorMap) {
    ui.strong("Content types");

    let bars: Vec<Bar> = view
        .types
        .iter()
        .enumerate()
        .map(|(i, (label, n))| {
            Bar::new(i as f64, *n as f64)
                .name(label)
                .fill(colors.color_for(label))
                .width(0.6)
        })
        .collect();
    let labels: Vec<String> = view.types.iter().map(|(label, _)| label.clone()).collect();

    Plot::new("type_distribution")
        .height(CHART_HEIGHT)
        .y_axis_label("Titles")
        .x_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Top genres (horizontal bars)
// ---------------------------------------------------------------------------

/// The most frequent genre tags, largest at the top.
pub fn genre_top(ui: &mut Ui, view: &DashboardView) {
    ui.strong(format!("Top {} genres", view.genres.len()));

    // Bars are laid out bottom-up, so the largest count gets the highest slot.
    let n = view.genres.len();
    let bars: Vec<Bar> = view
        .genres
        .iter()
        .enumerate()
        .map(|(i, (genre, count))| {
            Bar::new((n - 1 - i) as f64, *count as f64)
                .name(genre)
                .width(0.6)
        })
        .collect();
    let labels: Vec<String> = view
        .genres
        .iter()
        .rev()
        .map(|(genre, _)| genre.clone())
        .collect();

    Plot::new("genre_top")
        .height(CHART_HEIGHT)
        .x_axis_label("Titles")
        .y_axis_formatter(move |mark: GridMark, _range| category_label(&labels, mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(Color32::from_rgb(229, 9, 20)),
            );
        });
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

fn whole_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        String::new()
    }
}

/// Label for a bar slot; grid marks between slots stay blank.
fn category_label(labels: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}
