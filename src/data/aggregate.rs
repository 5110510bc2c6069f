use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::model::CatalogRow;

/// Ordered `(key, count)` pairs, ready to hand to a chart.
pub type CountSeries<K> = Vec<(K, usize)>;

/// Titles per release year, ascending by year.
pub fn yearly_counts(rows: &[&CatalogRow]) -> CountSeries<i32> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.release_year).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Titles per `type`, most common first.
pub fn type_distribution(rows: &[&CatalogRow]) -> CountSeries<String> {
    count_descending(rows.iter().map(|row| row.kind.as_str()))
}

/// The `k` most frequent genre tags.
///
/// Each row's `listed_in` is split on `delimiter` and every token counts
/// once, so a title listed under three genres adds to all three.
pub fn genre_top_k(rows: &[&CatalogRow], delimiter: &str, k: usize) -> CountSeries<String> {
    let tokens = rows
        .iter()
        .flat_map(|row| row.listed_in.split(delimiter));
    let mut series = count_descending(tokens);
    series.truncate(k);
    series
}

/// Count labels and sort by count, highest first. Equal counts keep the
/// order in which the labels were first seen.
fn count_descending<'a>(labels: impl Iterator<Item = &'a str>) -> CountSeries<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut series: CountSeries<String> = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    series.sort_by(|a, b| b.1.cmp(&a.1));
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_by_year, YearRange};
    use crate::data::testutil::{decade_table, row};

    #[test]
    fn yearly_counts_cover_every_year_of_the_full_range() {
        let table = decade_table();
        let rows = filter_by_year(&table, YearRange::new(2015, 2024)).unwrap();
        let yearly = yearly_counts(&rows);

        assert_eq!(yearly.len(), 10);
        assert_eq!(yearly.first(), Some(&(2015, 2)));
        assert_eq!(yearly.last(), Some(&(2024, 3)));
        assert!(yearly.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(yearly.iter().map(|(_, n)| n).sum::<usize>(), rows.len());
    }

    #[test]
    fn type_distribution_sorted_descending_and_sums_to_subset() {
        let table = decade_table();
        let rows = filter_by_year(&table, YearRange::new(2019, 2024)).unwrap();
        let types = type_distribution(&rows);

        assert_eq!(
            types,
            vec![("TV Show".to_string(), 11), ("Movie".to_string(), 6)]
        );
        assert_eq!(types.iter().map(|(_, n)| n).sum::<usize>(), rows.len());
    }

    #[test]
    fn unknown_type_is_counted_like_any_other() {
        let a = row(2020, "Movie", "Dramas");
        let b = row(2020, "Unknown", "Dramas");
        let c = row(2021, "Unknown", "Dramas");
        let types = type_distribution(&[&a, &b, &c]);
        assert_eq!(types[0], ("Unknown".to_string(), 2));
        assert_eq!(types[1], ("Movie".to_string(), 1));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let a = row(2020, "TV Show", "Dramas");
        let b = row(2020, "Movie", "Dramas");
        let types = type_distribution(&[&a, &b]);
        assert_eq!(types[0].0, "TV Show");
        assert_eq!(types[1].0, "Movie");
    }

    #[test]
    fn every_genre_tag_of_a_row_is_counted() {
        let r = row(2021, "Movie", "Drama, Action, Comedy");
        let genres = genre_top_k(&[&r], ", ", 5);
        assert_eq!(
            genres,
            vec![
                ("Drama".to_string(), 1),
                ("Action".to_string(), 1),
                ("Comedy".to_string(), 1),
            ]
        );
    }

    #[test]
    fn genre_top_k_truncates_and_counts_are_true() {
        let rows_owned = [
            row(2020, "TV Show", "A, B, C, D, E, F"),
            row(2020, "TV Show", "A, B, C"),
            row(2021, "Movie", "A, G"),
            row(2022, "Movie", "Unknown"),
        ];
        let rows: Vec<&CatalogRow> = rows_owned.iter().collect();
        let genres = genre_top_k(&rows, ", ", 5);

        assert_eq!(genres.len(), 5);
        assert_eq!(genres[0], ("A".to_string(), 3));
        assert_eq!(genres[1], ("B".to_string(), 2));
        assert_eq!(genres[2], ("C".to_string(), 2));
        for (genre, count) in &genres {
            let truth = rows
                .iter()
                .flat_map(|r| r.listed_in.split(", "))
                .filter(|g| *g == genre.as_str())
                .count();
            assert_eq!(*count, truth, "count for {genre}");
        }
    }

    #[test]
    fn genre_split_uses_the_two_character_delimiter() {
        let r = row(2020, "Movie", "Dramas,Thrillers");
        let genres = genre_top_k(&[&r], ", ", 5);
        assert_eq!(genres, vec![("Dramas,Thrillers".to_string(), 1)]);
    }
}
