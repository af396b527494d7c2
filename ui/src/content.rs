use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

const BUILTIN: &str = include_str!("../data/content.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub role: String,
    pub headline: String,
    pub intro: String,
    /// Project name called out at the end of the hero intro.
    #[serde(default)]
    pub highlight: Option<String>,
    #[serde(default)]
    pub highlight_note: Option<String>,
    pub github_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    // a record without tags renders an empty tag list
    #[serde(default)]
    pub tags: Vec<String>,
    pub live_url: String,
    pub repo_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(rename = "groupName")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub linkedin_url: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Everything the page renders. Components only ever see their own slice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
}

impl SiteContent {
    /// Content compiled into the bundle from `data/content.json`.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN).context("built-in content")
    }

    pub fn from_json(src: &str) -> anyhow::Result<Self> {
        let content: SiteContent = serde_json::from_str(src).context("parse site content")?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.profile.name.trim().is_empty(), "profile name is empty");

        for (i, p) in self.projects.iter().enumerate() {
            ensure!(!p.title.trim().is_empty(), "project #{i} has an empty title");
        }

        ensure!(
            self.contact.email.contains('@'),
            "contact email {:?} is not an address",
            self.contact.email
        );
        Ok(())
    }
}
