// Types layer - wire and domain data structures
//
// Wire format follows the backend's JSON: camelCase fields and Mongo-style
// `_id` identifiers.

pub mod identity;
pub mod message;
pub mod profile;
pub mod project;


pub use identity::{Credentials, Identity};
pub use message::ContactMessage;
pub use profile::{Profile, ProfileDraft, Skill};
pub use project::{Category, Project, ProjectDraft};

use crate::errors::ValidationError;

/// An unsaved, in-progress edit of an entity pending validation and
/// submission.
pub trait Draft: Clone {
    /// Cleaned copy of the draft: text fields trimmed, list fields free of
    /// blank and duplicate entries with insertion order kept.
    fn normalized(&self) -> Self;

    /// Field-level checks, run on the normalized draft before any network
    /// call is issued.
    fn validate(&self) -> Result<(), ValidationError>;
}
