use async_trait::async_trait;

use crate::Result;

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a repository file content, `None` when the file does not exist.
    async fn contents_get<'a>(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        reference: Option<&'a str>,
    ) -> Result<Option<String>>;
    /// Create a check run on a target commit.
    async fn check_runs_create(
        &self,
        owner: &str,
        name: &str,
        head_sha: &str,
        title: &str,
        summary: &str,
    ) -> Result<()>;
}
