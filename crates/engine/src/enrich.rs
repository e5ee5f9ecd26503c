//! Best-effort enrichment of project descriptors.
//!
//! Every configured project gets exactly one request. Requests are all
//! dispatched up front and polled together, so a slow or failing repository
//! never holds back its siblings. Failures never escape: they are logged and
//! replaced with [`EnrichmentResult::fallback`].

use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::stream::FuturesUnordered;
use futures_util::{FutureExt, StreamExt};
use folio_types::{EnrichmentResult, ProjectDescriptor, ProjectId};
use tracing::{debug, warn};

use crate::map::EnrichmentMap;
use crate::source::RepoMetadataSource;

/// A single in-flight enrichment that always settles to a complete record.
pub type EnrichmentFuture = BoxFuture<'static, (ProjectId, EnrichmentResult)>;

/// Fetch metadata for one project, substituting the fallback on any failure.
pub async fn enrich_project(source: &dyn RepoMetadataSource, project: &ProjectDescriptor) -> EnrichmentResult {
    match source.fetch_repo(&project.owner, &project.name).await {
        Ok(metadata) => {
            debug!(project = %project.id, repo = %project.full_name(), stars = metadata.stargazers_count, "enriched project");
            EnrichmentResult::from(metadata)
        }
        Err(error) => {
            warn!(
                project = %project.id,
                repo = %project.full_name(),
                transport = error.is_transport(),
                error = %error,
                "Could not fetch repository metadata; using fallback"
            );
            EnrichmentResult::fallback(project)
        }
    }
}

/// Start one enrichment per project without awaiting any of them.
///
/// The returned set yields results in completion order. Callers that want
/// incremental updates poll it directly; [`enrich_all`] drains it.
pub fn enrichment_futures(
    source: Arc<dyn RepoMetadataSource>,
    projects: &[ProjectDescriptor],
) -> FuturesUnordered<EnrichmentFuture> {
    projects
        .iter()
        .cloned()
        .map(|project| {
            let source = Arc::clone(&source);
            async move {
                let result = enrich_project(source.as_ref(), &project).await;
                (project.id, result)
            }
            .boxed()
        })
        .collect()
}

/// Enrich every project and return the settled map as one batch.
pub async fn enrich_all(source: Arc<dyn RepoMetadataSource>, projects: &[ProjectDescriptor]) -> EnrichmentMap {
    let mut pending = enrichment_futures(source, projects);
    let mut map = EnrichmentMap::new();
    while let Some((project_id, result)) = pending.next().await {
        map.record(project_id, result);
    }
    map
}
