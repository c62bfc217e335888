use serde::{Deserialize, Serialize};

/// Repository reference, URL form.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepositoryReference {
    /// Canonical API URL.
    pub url: String,
}

/// Base branch reference attached to a check event pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCheckBase {
    /// Repository.
    pub repo: GhRepositoryReference,
}

/// Pull request reference attached to a check event.
///
/// The list on a check event may contain pull requests opened from another
/// fork; the base repository URL is what tells them apart.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCheckPullRequest {
    /// Number.
    pub number: u64,
    /// Base.
    pub base: GhCheckBase,
}
