use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const MOVIE_GENRES: [&str; 7] = [
    "Dramas",
    "International Movies",
    "Thrillers",
    "Romantic Movies",
    "Comedies",
    "Action & Adventure",
    "Horror Movies",
];

const TV_GENRES: [&str; 7] = [
    "International TV Shows",
    "Korean TV Shows",
    "TV Dramas",
    "Romantic TV Shows",
    "TV Comedies",
    "Crime TV Shows",
    "TV Mysteries",
];

const RATINGS: [&str; 4] = ["TV-14", "TV-MA", "TV-PG", "R"];

/// SplitMix64: small, seedable, and good enough to shuffle genre tags.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// `k` distinct entries of `items`, in the order drawn.
    fn sample<'a>(&mut self, items: &[&'a str], k: usize) -> Vec<&'a str> {
        let mut pool = items.to_vec();
        (0..k.min(pool.len()))
            .map(|_| pool.remove(self.below(pool.len())))
            .collect()
    }
}

/// One synthetic catalog entry; `None` marks a cell left empty on purpose.
struct Title {
    show_id: String,
    kind: Option<&'static str>,
    title: String,
    release_year: Option<i64>,
    rating: &'static str,
    duration: String,
    listed_in: Option<String>,
}

fn generate(rng: &mut SimpleRng) -> Vec<Title> {
    let mut titles = Vec::new();
    for (offset, year) in (2015..=2024).enumerate() {
        // Korean releases grow through the decade, TV faster than film.
        let movies = 3 + offset;
        let shows = 4 + offset * 2;
        for i in 0..movies + shows {
            let n = titles.len() + 1;
            let is_movie = i < movies;
            let k = 1 + rng.below(3);
            let genres = if is_movie {
                rng.sample(&MOVIE_GENRES, k)
            } else {
                rng.sample(&TV_GENRES, k)
            };
            titles.push(Title {
                show_id: format!("s{n}"),
                kind: if n % 37 == 0 {
                    None
                } else if is_movie {
                    Some("Movie")
                } else {
                    Some("TV Show")
                },
                title: format!("Title {n}"),
                release_year: if n % 71 == 0 { None } else { Some(year) },
                rating: RATINGS[rng.below(RATINGS.len())],
                duration: if is_movie {
                    format!("{} min", 90 + rng.below(50))
                } else {
                    format!("{} Season", 1 + rng.below(3))
                },
                listed_in: if n % 53 == 0 {
                    None
                } else {
                    Some(genres.join(", "))
                },
            });
        }
    }
    titles
}

fn write_csv(titles: &[Title], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "show_id",
            "type",
            "title",
            "country",
            "release_year",
            "rating",
            "duration",
            "listed_in",
        ])
        .expect("Failed to write header");
    for t in titles {
        let year = t.release_year.map(|y| y.to_string()).unwrap_or_default();
        writer
            .write_record([
                t.show_id.as_str(),
                t.kind.unwrap_or(""),
                t.title.as_str(),
                "South Korea",
                year.as_str(),
                t.rating,
                t.duration.as_str(),
                t.listed_in.as_deref().unwrap_or(""),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(titles: &[Title], path: &str) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("show_id", DataType::Utf8, false),
        Field::new("type", DataType::Utf8, true),
        Field::new("title", DataType::Utf8, false),
        // pandas stores a year column with gaps as float64
        Field::new("release_year", DataType::Float64, true),
        Field::new("rating", DataType::Utf8, false),
        Field::new("duration", DataType::Utf8, false),
        Field::new("listed_in", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(titles.iter().map(|t| t.show_id.as_str()))),
            Arc::new(StringArray::from(titles.iter().map(|t| t.kind).collect::<Vec<_>>())),
            Arc::new(StringArray::from_iter_values(titles.iter().map(|t| t.title.as_str()))),
            Arc::new(Float64Array::from(
                titles
                    .iter()
                    .map(|t| t.release_year.map(|y| y as f64))
                    .collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from_iter_values(titles.iter().map(|t| t.rating))),
            Arc::new(StringArray::from_iter_values(titles.iter().map(|t| t.duration.as_str()))),
            Arc::new(StringArray::from(
                titles
                    .iter()
                    .map(|t| t.listed_in.as_deref())
                    .collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng(42);
    let titles = generate(&mut rng);

    write_csv(&titles, "netflix_korea_10y_trend.csv");
    write_parquet(&titles, "netflix_korea_10y_trend.parquet");

    println!(
        "Wrote {} titles to netflix_korea_10y_trend.csv and netflix_korea_10y_trend.parquet",
        titles.len()
    );
}
