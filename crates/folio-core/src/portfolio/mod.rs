pub mod models;
mod sample;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::segment::SegmentCount;

pub use models::{Contact, Link, Profile, Project, SkillCategory};
pub use sample::sample_portfolio;

/// Everything shown on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub contact: Contact,
}

impl Portfolio {
    /// Load from a TOML file, falling back to the built-in sample when absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No portfolio at {}, using sample content", path.display());
            return Ok(sample_portfolio());
        }

        let content = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&content)?;
        debug!(
            "Loaded {} projects and {} skill categories from {}",
            portfolio.projects.len(),
            portfolio.skills.len(),
            path.display()
        );
        Ok(portfolio)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let portfolio: Self =
            toml::from_str(content).map_err(|e| Error::Content(e.to_string()))?;
        portfolio.validated()
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Content(e.to_string()))
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Trim titles and check the invariants the showcase relies on
    pub fn validated(mut self) -> Result<Self> {
        if self.projects.is_empty() {
            return Err(Error::EmptyShowcase);
        }

        self.profile.name = self.profile.name.trim().to_string();
        if self.profile.name.is_empty() {
            return Err(Error::Content("profile name is empty".to_string()));
        }

        for (i, project) in self.projects.iter_mut().enumerate() {
            project.title = project.title.trim().to_string();
            if project.title.is_empty() {
                return Err(Error::Content(format!("{} has an empty title", Project::label(i))));
            }
        }

        for category in &mut self.skills {
            category.title = category.title.trim().to_string();
            if category.title.is_empty() {
                return Err(Error::Content("skill category with an empty title".to_string()));
            }
        }

        Ok(self)
    }

    /// Number of showcase segments (one per project)
    pub fn segment_count(&self) -> Result<SegmentCount> {
        SegmentCount::new(self.projects.len())
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}
