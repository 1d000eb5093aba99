use serde::{Deserialize, Serialize};

/// The person the portfolio is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short initials shown in the nav bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    /// One-line role, e.g. "Full Stack Developer · AI Explorer"
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
}

impl Profile {
    /// Configured initials, or the first letter of each name part
    pub fn initials(&self) -> String {
        match &self.initials {
            Some(initials) if !initials.trim().is_empty() => initials.trim().to_string(),
            _ => self
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .flat_map(char::to_uppercase)
                .collect(),
        }
    }
}

/// One showcased project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Live demo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Source repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Project {
    /// Display label for the project at `index`: "Project 01", "Project 02", ...
    pub fn label(index: usize) -> String {
        format!("Project {:02}", index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Contact {
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{}", email))
    }
}
