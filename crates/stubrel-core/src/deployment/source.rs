//! Deployment descriptions that name jobs and their releases.
//!
//! Two shapes are understood:
//! - deployment manifests: `instance_groups[].jobs[] {name, release}`
//! - tile metadata: `job_types[].templates[] {name, release}`

use serde::{Deserialize, Serialize};

use super::{Deployment, JobReference};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// Tile metadata if a top-level `job_types` key exists, deployment manifest otherwise.
    #[default]
    Auto,
    Deployment,
    Tile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeploymentManifest {
    #[serde(default)]
    pub instance_groups: Vec<InstanceGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceGroup {
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<JobReference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TileMetadata {
    #[serde(default)]
    pub job_types: Vec<JobType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub errand: bool,
    #[serde(default)]
    pub templates: Vec<JobReference>,
}

/// A parsed deployment description.
#[derive(Debug, Clone, PartialEq)]
pub enum DeploymentSource {
    Deployment(DeploymentManifest),
    Tile(TileMetadata),
}

impl DeploymentSource {
    pub fn parse(text: &str, format: SourceFormat) -> Result<Self> {
        let format = match format {
            SourceFormat::Auto => detect(text)?,
            explicit => explicit,
        };
        let source = match format {
            SourceFormat::Tile => {
                DeploymentSource::Tile(serde_yaml::from_str(text).map_err(Error::Decode)?)
            }
            _ => DeploymentSource::Deployment(serde_yaml::from_str(text).map_err(Error::Decode)?),
        };
        tracing::debug!(format = source.format_name(), references = source.references().len(), "parsed deployment source");
        Ok(source)
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            DeploymentSource::Deployment(_) => "deployment",
            DeploymentSource::Tile(_) => "tile",
        }
    }

    /// Job references in document order.
    pub fn references(&self) -> Vec<JobReference> {
        match self {
            DeploymentSource::Deployment(m) => m
                .instance_groups
                .iter()
                .flat_map(|g| g.jobs.iter().cloned())
                .collect(),
            DeploymentSource::Tile(t) => t
                .job_types
                .iter()
                .flat_map(|jt| jt.templates.iter().cloned())
                .collect(),
        }
    }

    pub fn deployment(&self) -> Deployment {
        Deployment::from_references(self.references())
    }
}

fn detect(text: &str) -> Result<SourceFormat> {
    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(Error::Decode)?;
    let is_tile = value
        .as_mapping()
        .is_some_and(|m| m.contains_key("job_types"));
    Ok(if is_tile {
        SourceFormat::Tile
    } else {
        SourceFormat::Deployment
    })
}
