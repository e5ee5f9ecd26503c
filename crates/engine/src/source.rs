//! Where repository metadata comes from.
//!
//! The enrichment fan-out only depends on [`RepoMetadataSource`], so tests can
//! substitute canned responses for the GitHub client.

use async_trait::async_trait;
use folio_api::{FetchError, GitHubClient};
use folio_types::RepoMetadata;

/// Supplies metadata for a single repository.
#[async_trait]
pub trait RepoMetadataSource: Send + Sync {
    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoMetadata, FetchError>;
}

#[async_trait]
impl RepoMetadataSource for GitHubClient {
    async fn fetch_repo(&self, owner: &str, name: &str) -> Result<RepoMetadata, FetchError> {
        self.fetch_repository(owner, name).await
    }
}
