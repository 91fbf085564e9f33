//! Test fixture creation for the tracks catalog

use super::constants::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary CSV catalog with 7 complete tracks and 2 incomplete rows
/// Returns (temp_dir, catalog_path)
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let catalog_path = dir.path().join("tracks.csv");

    let rows = [
        (HAPPY_TRACK_1, ARTIST_1_NAME, "0.90", "0.85"),
        (SAD_TRACK_1, ARTIST_2_NAME, "0.20", "0.30"),
        (HAPPY_TRACK_2, ARTIST_1_NAME, "0.75", "0.70"),
        ("Half Written", ARTIST_1_NAME, "", "0.50"),
        (ENERGETIC_TRACK, ARTIST_1_NAME, "0.50", "0.95"),
        (SAD_TRACK_2, ARTIST_2_NAME, "0.10", "0.10"),
        ("Lost Tape", ARTIST_2_NAME, "0.40", "NA"),
        (HAPPY_TRACK_3, ARTIST_1_NAME, "0.65", "0.90"),
        (CHILL_TRACK, ARTIST_2_NAME, "0.50", "0.50"),
    ];

    let mut content =
        String::from("track_name,artist_name,valence,energy,artwork_url,track_url,popularity\n");
    for (index, (name, artist, valence, energy)) in rows.iter().enumerate() {
        content.push_str(&format!(
            "{},{},{},{},https://img.test/{},https://play.test/track/{},{}\n",
            name, artist, valence, energy, index, index, 50 + index
        ));
    }
    fs::write(&catalog_path, content)?;

    Ok((dir, catalog_path))
}
