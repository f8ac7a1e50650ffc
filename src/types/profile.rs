use serde::{Deserialize, Serialize};

/// A named skill shown on the public profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: Option<String>,
}

/// Site-owner profile backing the public marketing page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Editable profile fields submitted to the profile collaborator.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}
