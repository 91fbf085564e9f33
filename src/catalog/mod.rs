mod cache;
mod index;
mod load;
mod track;

pub use cache::{CatalogCache, GuardedCatalog};
pub use index::{CatalogIndex, DataSourceError, Problem as LoadCatalogProblem, REQUIRED_COLUMNS};
pub use load::load_catalog;
pub use track::{RecommendedTrack, Track};
