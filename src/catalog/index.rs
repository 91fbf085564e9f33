use super::Track;
use crate::mood::{classify, MoodBucket};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

pub const TRACK_NAME: &str = "track_name";
pub const ARTIST_NAME: &str = "artist_name";
pub const VALENCE: &str = "valence";
pub const ENERGY: &str = "energy";
pub const ARTWORK_URL: &str = "artwork_url";
pub const TRACK_URL: &str = "track_url";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    TRACK_NAME,
    ARTIST_NAME,
    VALENCE,
    ENERGY,
    ARTWORK_URL,
    TRACK_URL,
];

/// Cell values treated as missing, on top of the empty cell.
const NA_MARKERS: [&str; 18] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
    "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

/// Failure to turn a data source into a catalog. No partial catalog is ever
/// returned alongside one of these.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("Invalid {column} value {value:?} on line {line}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Non-fatal issue found while loading. The affected row is excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    IncompleteRow {
        line: u64,
        missing: Vec<&'static str>,
    },
}

/// The annotated, read-only track catalog.
#[derive(Debug)]
pub struct CatalogIndex {
    tracks: Vec<Track>,
    partitions: BTreeMap<MoodBucket, Vec<usize>>,
    problems: Vec<Problem>,
}

struct ColumnPositions([usize; 6]);

impl ColumnPositions {
    fn from_headers(headers: &csv::StringRecord) -> Result<ColumnPositions, DataSourceError> {
        let mut positions = [0usize; 6];
        let mut missing = vec![];
        for (slot, column) in REQUIRED_COLUMNS.iter().enumerate() {
            match headers.iter().position(|h| h.trim() == *column) {
                Some(position) => positions[slot] = position,
                None => missing.push(*column),
            }
        }
        if !missing.is_empty() {
            return Err(DataSourceError::MissingColumns(missing));
        }
        Ok(ColumnPositions(positions))
    }
}

fn is_missing(cell: Option<&str>) -> bool {
    match cell {
        None => true,
        Some(value) => value.is_empty() || NA_MARKERS.contains(&value),
    }
}

fn parse_score(line: u64, column: &'static str, value: &str) -> Result<f64, DataSourceError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DataSourceError::InvalidNumber {
            line,
            column,
            value: value.to_owned(),
        })
}

impl CatalogIndex {
    /// Parses CSV text with a header row into an annotated catalog.
    ///
    /// Rows with a missing required value are dropped and reported in
    /// [`CatalogIndex::problems`]. Every other row gets its mood computed
    /// exactly once, here.
    pub fn build<R: Read>(reader: R) -> Result<CatalogIndex, DataSourceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnPositions::from_headers(csv_reader.headers()?)?;

        let mut tracks = vec![];
        let mut problems = vec![];
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let cells: Vec<Option<&str>> = columns.0.iter().map(|i| record.get(*i)).collect();
            let missing: Vec<&'static str> = REQUIRED_COLUMNS
                .iter()
                .zip(cells.iter())
                .filter(|(_, cell)| is_missing(**cell))
                .map(|(column, _)| *column)
                .collect();
            if !missing.is_empty() {
                problems.push(Problem::IncompleteRow { line, missing });
                continue;
            }

            let cell = |slot: usize| cells[slot].unwrap_or_default();
            let valence = parse_score(line, VALENCE, cell(2))?;
            let energy = parse_score(line, ENERGY, cell(3))?;
            tracks.push(Track {
                track_name: cell(0).to_owned(),
                artist_name: cell(1).to_owned(),
                valence,
                energy,
                artwork_url: cell(4).to_owned(),
                track_url: cell(5).to_owned(),
                mood: classify(valence, energy),
            });
        }

        Ok(CatalogIndex::from_annotated(tracks, problems))
    }

    fn from_annotated(tracks: Vec<Track>, problems: Vec<Problem>) -> CatalogIndex {
        let mut partitions: BTreeMap<MoodBucket, Vec<usize>> =
            MoodBucket::ALL.iter().map(|mood| (*mood, vec![])).collect();
        for (position, track) in tracks.iter().enumerate() {
            partitions.entry(track.mood).or_default().push(position);
        }
        CatalogIndex {
            tracks,
            partitions,
            problems,
        }
    }

    /// All tracks labelled `mood`, in load order.
    pub fn by_mood(&self, mood: MoodBucket) -> Vec<&Track> {
        self.partitions
            .get(&mood)
            .map(|positions| positions.iter().map(|i| &self.tracks[*i]).collect())
            .unwrap_or_default()
    }

    pub fn mood_count(&self, mood: MoodBucket) -> usize {
        self.partitions.get(&mood).map(Vec::len).unwrap_or(0)
    }

    pub fn mood_counts(&self) -> BTreeMap<MoodBucket, usize> {
        MoodBucket::ALL
            .iter()
            .map(|mood| (*mood, self.mood_count(*mood)))
            .collect()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn dropped_rows(&self) -> usize {
        self.problems
            .iter()
            .filter(|p| matches!(p, Problem::IncompleteRow { .. }))
            .count()
    }
}
