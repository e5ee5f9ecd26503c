//! Embedded portfolio content.
//!
//! The profile, project descriptors and resume are compiled into the binary
//! from `data/portfolio.json` and validated once at startup. Nothing here is
//! mutated after [`Portfolio::embedded`] returns.

use std::collections::HashSet;

use folio_types::ProjectDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBEDDED_PORTFOLIO: &str = include_str!("../data/portfolio.json");

/// Error surfaced when portfolio content fails to load.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The JSON document could not be decoded.
    #[error("portfolio content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two projects share the same identifier.
    #[error("duplicate project id '{0}'")]
    DuplicateProject(String),
    /// A project cannot be addressed on GitHub.
    #[error("project '{0}' must name both an owner and a repository")]
    MissingRepository(String),
}

/// Header shown on the Home section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Label of the button that jumps to the Projects section
    #[serde(default = "default_call_to_action")]
    pub call_to_action: String,
}

fn default_call_to_action() -> String {
    "View My Work".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub heading: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Path or URL of the downloadable resume document
    pub document: String,
    #[serde(default)]
    pub entries: Vec<ResumeEntry>,
}

/// Everything the portfolio renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<ProjectDescriptor>,
    pub resume: Resume,
}

impl Portfolio {
    /// Loads the portfolio compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json_str(EMBEDDED_PORTFOLIO)
    }

    /// Parses and validates a portfolio document.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        debug!(projects = portfolio.projects.len(), "loaded portfolio content");
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.to_string()));
            }
            if project.owner.trim().is_empty() || project.name.trim().is_empty() {
                return Err(ContentError::MissingRepository(project.id.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_portfolio_loads() {
        let portfolio = Portfolio::embedded().expect("load embedded portfolio");
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.projects[0].id.as_str(), "project-one");
        assert_eq!(portfolio.projects[1].full_name(), "levalleyjack/multipass-manager-vscode");
        assert!(portfolio.resume.document.ends_with(".pdf"));
        assert_eq!(portfolio.profile.call_to_action, "View My Work");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{
            "profile": { "name": "N", "headline": "H" },
            "projects": [
                { "id": "a", "owner": "o", "name": "n", "title": "T", "description": "D" },
                { "id": "a", "owner": "o", "name": "m", "title": "T", "description": "D" }
            ],
            "resume": { "document": "r.pdf" }
        }"#;
        let error = Portfolio::from_json_str(json).expect_err("duplicate ids must fail");
        assert!(matches!(error, ContentError::DuplicateProject(id) if id == "a"));
    }

    #[test]
    fn rejects_blank_repository() {
        let json = r#"{
            "profile": { "name": "N", "headline": "H" },
            "projects": [
                { "id": "a", "owner": " ", "name": "n", "title": "T", "description": "D" }
            ],
            "resume": { "document": "r.pdf" }
        }"#;
        let error = Portfolio::from_json_str(json).expect_err("blank owner must fail");
        assert!(matches!(error, ContentError::MissingRepository(_)));
    }

    #[test]
    fn defaults_call_to_action() {
        let json = r#"{
            "profile": { "name": "N", "headline": "H" },
            "projects": [],
            "resume": { "document": "r.pdf" }
        }"#;
        let portfolio = Portfolio::from_json_str(json).expect("minimal portfolio");
        assert_eq!(portfolio.profile.call_to_action, "View My Work");
        assert!(portfolio.resume.entries.is_empty());
    }
}
