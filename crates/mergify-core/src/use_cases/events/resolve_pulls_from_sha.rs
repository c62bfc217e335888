use std::time::Duration;

use async_trait::async_trait;
use mergify_ghapi_interface::types::GhPullRequest;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// Cached SHA resolutions expire quickly: a head commit only stays
/// interesting while the burst of status and check events it triggered is
/// being ingested.
pub const SHA_EXPIRATION: Duration = Duration::from_secs(60);

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolvePullsFromShaInterface: Interface {
    /// Map a commit SHA to the open pull request carrying it as head.
    ///
    /// Returns zero or one number; the list keeps the contract uniform with
    /// the other pull number resolutions.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        sha: &str,
        opened_pulls: &[GhPullRequest],
    ) -> Result<Vec<u64>>;
}

#[derive(Component)]
#[shaku(interface = ResolvePullsFromShaInterface)]
pub(crate) struct ResolvePullsFromSha;

#[async_trait]
impl ResolvePullsFromShaInterface for ResolvePullsFromSha {
    #[tracing::instrument(skip_all, fields(owner = owner, repo_name = repo_name, sha = sha))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        sha: &str,
        opened_pulls: &[GhPullRequest],
    ) -> Result<Vec<u64>> {
        let cache_key = format!("sha~{owner}~{repo_name}~{sha}");

        if let Some(cached) = ctx.cache_service.get_value(&cache_key).await? {
            if let Ok(pull_number) = cached.parse::<u64>() {
                return Ok(vec![pull_number]);
            }
        }

        for pull in opened_pulls {
            if pull.head.sha == sha {
                // Two concurrent misses may both land here; the value they
                // write is the same for a given key, so the race is harmless.
                ctx.cache_service
                    .set_value(&cache_key, &pull.number.to_string(), SHA_EXPIRATION)
                    .await?;
                return Ok(vec![pull.number]);
            }
        }

        Ok(vec![])
    }
}
