//! Deployment graph: which jobs belong to which release.
//!
//! Grouping keeps first-seen order for both releases and jobs. It is backed
//! by an insertion-ordered map of sets, so each reference costs O(1) instead
//! of a scan over everything grouped so far.

pub mod source;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

pub use source::{DeploymentSource, SourceFormat};

/// A job as referenced from a deployment description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobReference {
    pub name: String,
    pub release: String,
}

impl JobReference {
    pub fn new(name: impl Into<String>, release: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release: release.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub name: String,
    /// Deduplicated, first-seen order.
    pub jobs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub releases: Vec<Release>,
}

impl Deployment {
    /// Group references by release. Names are passed through unvalidated.
    pub fn from_references<I>(references: I) -> Self
    where
        I: IntoIterator<Item = JobReference>,
    {
        let mut grouped: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for reference in references {
            grouped
                .entry(reference.release)
                .or_default()
                .insert(reference.name);
        }

        let releases = grouped
            .into_iter()
            .map(|(name, jobs)| Release {
                name,
                jobs: jobs.into_iter().collect(),
            })
            .collect();

        Self { releases }
    }

    /// Flatten back into references, release by release.
    pub fn references(&self) -> Vec<JobReference> {
        self.releases
            .iter()
            .flat_map(|r| r.jobs.iter().map(move |j| JobReference::new(j.as_str(), r.name.as_str())))
            .collect()
    }

    pub fn release(&self, name: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
