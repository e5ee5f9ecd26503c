//! Repository enrichment engine.
//!
//! Augments the static project descriptors with live GitHub metadata:
//!
//! - `source`: the [`RepoMetadataSource`] seam and its GitHub implementation
//! - `enrich`: per-project fetch with fallback, fan-out and batch collection
//! - `map`: the grow-only [`EnrichmentMap`] consumed by renderers

mod enrich;
mod map;
mod source;

pub use enrich::{EnrichmentFuture, enrich_all, enrich_project, enrichment_futures};
pub use map::EnrichmentMap;
pub use source::RepoMetadataSource;
