use folio_types::{EnrichmentResult, ProjectDescriptor, ProjectId};
use indexmap::IndexMap;
use tracing::debug;

/// Enrichment results keyed by project.
///
/// Entries are only ever added. The first result recorded for a project is
/// kept for the rest of the session; later writes for the same id are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentMap {
    entries: IndexMap<ProjectId, EnrichmentResult>,
}

impl EnrichmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `result` for `project_id` unless one is already present.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn record(&mut self, project_id: ProjectId, result: EnrichmentResult) -> bool {
        if self.entries.contains_key(&project_id) {
            debug!(project = %project_id, "ignoring repeated enrichment result");
            return false;
        }
        self.entries.insert(project_id, result);
        true
    }

    pub fn get(&self, project_id: &ProjectId) -> Option<&EnrichmentResult> {
        self.entries.get(project_id)
    }

    /// Link to show for `project`: the fetched canonical URL when known,
    /// otherwise the synthesized one.
    pub fn link_for(&self, project: &ProjectDescriptor) -> String {
        self.get(&project.id)
            .map(|result| result.url.clone())
            .unwrap_or_else(|| project.fallback_url())
    }
}
