use serde::{Deserialize, Serialize};

use super::Draft;
use crate::errors::ValidationError;

/// Portfolio project category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Category {
    #[default]
    Web,
    Mobile,
    Design,
    Other,
}

/// A persisted portfolio project as returned by the collection collaborator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub thumbnail: String,
    pub category: Category,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Unsaved project edit pending validation and submission.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub thumbnail: String,
    pub category: Category,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
}

impl Draft for ProjectDraft {
    fn normalized(&self) -> Self {
        let mut clean = self.clone();
        clean.title = self.title.trim().to_string();
        clean.description = self.description.trim().to_string();
        clean.full_description = self.full_description.trim().to_string();
        clean.thumbnail = self.thumbnail.trim().to_string();
        clean.tech_stack = dedupe_tech_stack(&self.tech_stack);
        clean.live_url = normalize_optional(&self.live_url);
        clean.github_url = normalize_optional(&self.github_url);
        clean
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.title.trim().is_empty() {
            errors.push("title", "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.push("description", "Short description is required");
        }
        if self.full_description.trim().is_empty() {
            errors.push("fullDescription", "Full description is required");
        }
        if self.thumbnail.trim().is_empty() {
            errors.push("thumbnail", "Thumbnail image URL is required");
        }
        errors.into_result()
    }
}

/// Drop blank and duplicate entries, keeping first-seen order.
fn dedupe_tech_stack(entries: &[String]) -> Vec<String> {
    let mut clean: Vec<String> = Vec::with_capacity(entries.len());
    for raw in entries {
        let tech = raw.trim();
        if tech.is_empty() {
            continue;
        }
        if !clean.iter().any(|seen| seen == tech) {
            clean.push(tech.to_string());
        }
    }
    clean
}

fn normalize_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
