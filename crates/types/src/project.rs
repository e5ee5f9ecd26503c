//! Project descriptors and their enrichment records.
//!
//! A [`ProjectDescriptor`] is static content compiled into the binary. An
//! [`EnrichmentResult`] is the live metadata fetched for it (or the
//! deterministic fallback when the fetch fails).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base URL of the public GitHub web UI used to synthesize repository links.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// Stable identifier of a configured project (e.g. `"project-one"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A project shown on the Projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    /// Identifier used to key enrichment results
    pub id: ProjectId,
    /// Account owning the repository (e.g. "levalleyjack")
    pub owner: String,
    /// Repository name under `owner`
    pub name: String,
    /// Human-friendly card title
    pub title: String,
    /// Card body text
    pub description: String,
    /// Preview image asset reference. Not rendered in the terminal.
    #[serde(default)]
    pub image: Option<String>,
    /// Ordered technology tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectDescriptor {
    /// `owner/name`, as used in log fields and API paths.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Repository link synthesized from owner and name; never touches the network.
    pub fn fallback_url(&self) -> String {
        format!("{}/{}/{}", GITHUB_WEB_BASE, self.owner, self.name)
    }
}

/// Repository metadata returned by `GET /repos/{owner}/{name}`.
///
/// Only the fields the portfolio displays are decoded; the rest of the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
}

/// Live (or fallback) metadata attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub stars: u64,
    pub language: Option<String>,
    pub url: String,
}

impl EnrichmentResult {
    /// The value stored when a fetch fails: no stars, no language and the
    /// synthesized repository link.
    pub fn fallback(project: &ProjectDescriptor) -> Self {
        Self {
            stars: 0,
            language: None,
            url: project.fallback_url(),
        }
    }
}

impl From<RepoMetadata> for EnrichmentResult {
    fn from(metadata: RepoMetadata) -> Self {
        Self {
            stars: metadata.stargazers_count,
            language: metadata.language,
            url: metadata.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ProjectDescriptor {
        ProjectDescriptor {
            id: ProjectId::new("proj2"),
            owner: "owner2".into(),
            name: "name2".into(),
            title: "Second".into(),
            description: "desc".into(),
            image: None,
            tags: vec![],
        }
    }

    #[test]
    fn fallback_uses_synthesized_url() {
        let fallback = EnrichmentResult::fallback(&descriptor());
        assert_eq!(fallback.stars, 0);
        assert!(fallback.language.is_none());
        assert_eq!(fallback.url, "https://github.com/owner2/name2");
    }

    #[test]
    fn repo_metadata_ignores_extra_fields_and_null_language() {
        let json = r#"{
            "id": 1,
            "full_name": "x/y",
            "stargazers_count": 7,
            "language": null,
            "html_url": "https://github.com/x/y"
        }"#;
        let metadata: RepoMetadata = serde_json::from_str(json).expect("decode repo metadata");
        let result = EnrichmentResult::from(metadata);
        assert_eq!(result.stars, 7);
        assert_eq!(result.language, None);
        assert_eq!(result.url, "https://github.com/x/y");
    }

    #[test]
    fn descriptor_defaults_optional_fields() {
        let json = r#"{
            "id": "p",
            "owner": "o",
            "name": "n",
            "title": "T",
            "description": "D"
        }"#;
        let project: ProjectDescriptor = serde_json::from_str(json).expect("decode descriptor");
        assert!(project.tags.is_empty());
        assert!(project.image.is_none());
        assert_eq!(project.full_name(), "o/n");
    }
}
