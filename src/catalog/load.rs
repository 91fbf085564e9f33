//! Catalog loading functionality

use super::{CatalogIndex, DataSourceError, LoadCatalogProblem};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads and annotates the catalog at `path`, logging a summary of what was
/// kept and what was dropped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogIndex, DataSourceError> {
    let path = path.as_ref();
    info!("Loading catalog from {:?}...", path);

    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_owned(),
        source,
    })?;
    let catalog = CatalogIndex::build(BufReader::new(file))?;

    let problems = catalog.problems();
    if !problems.is_empty() {
        warn!(
            "Dropped {} incomplete rows from {:?}",
            catalog.dropped_rows(),
            path
        );
        for problem in problems.iter() {
            match problem {
                LoadCatalogProblem::IncompleteRow { line, missing } => {
                    debug!("- line {}: missing {}", line, missing.join(", "))
                }
            }
        }
    }

    let per_mood: Vec<String> = catalog
        .mood_counts()
        .iter()
        .map(|(mood, count)| format!("{} {}", count, mood))
        .collect();
    info!(
        "Catalog has:\n{} tracks\n{}",
        catalog.len(),
        per_mood.join("\n")
    );
    Ok(catalog)
}
