use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` distinct fill colours for category bars.
///
/// Hues step by the golden angle so neighbouring categories never sit next
/// to each other on the wheel; lightness alternates to separate the rest.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    const GOLDEN_ANGLE: f32 = 137.507_77;
    const START_HUE: f32 = 355.0; // close to the streaming service's red

    (0..n)
        .map(|i| {
            let hue = (START_HUE + i as f32 * GOLDEN_ANGLE) % 360.0;
            let lightness = if i % 2 == 0 { 0.52 } else { 0.62 };
            let rgb: Srgb = Hsl::new(hue, 0.7, lightness).into_color();
            let [r, g, b] = [rgb.red, rgb.green, rgb.blue]
                .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            Color32::from_rgb(r, g, b)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps each content type to a fixed colour.
///
/// Built from the whole catalog, so a type keeps its colour while the year
/// range changes.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the distinct `labels`.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let unique: std::collections::BTreeSet<&str> = labels.into_iter().collect();
        let palette = generate_palette(unique.len());
        let mapping = unique
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn palette_prefix_is_stable() {
        // Adding a category must not recolour the ones already shown.
        assert_eq!(generate_palette(5)[..3], generate_palette(3)[..]);
    }

    #[test]
    fn labels_share_colour_across_lookups() {
        let map = ColorMap::new(["Movie", "TV Show", "Movie"]);
        assert_eq!(map.color_for("Movie"), map.color_for("Movie"));
        assert_ne!(map.color_for("Movie"), map.color_for("TV Show"));
        assert_eq!(map.color_for("Podcast"), Color32::GRAY);
    }
}
