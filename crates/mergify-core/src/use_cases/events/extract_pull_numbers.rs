use async_trait::async_trait;
use mergify_ghapi_interface::types::{GhEventType, GhPullRequest};
use shaku::{Component, HasComponent, Interface};

use super::{
    resolve_pulls_from_sha::ResolvePullsFromShaInterface,
    slim_event::{SlimCheck, SlimEvent},
};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ExtractPullNumbersInterface: Interface {
    /// Derive the pull request numbers an event affects.
    ///
    /// Only meaningful for events that reference pull requests indirectly,
    /// through a branch name or a commit SHA; every other type yields
    /// nothing.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        event_type: GhEventType,
        slim_event: &SlimEvent,
        opened_pulls: &[GhPullRequest],
    ) -> Result<Vec<u64>>;
}

#[derive(Component)]
#[shaku(interface = ExtractPullNumbersInterface)]
pub(crate) struct ExtractPullNumbers;

impl ExtractPullNumbers {
    fn pulls_on_branch(opened_pulls: &[GhPullRequest], reference: &str) -> Vec<u64> {
        let branch = reference.strip_prefix("refs/heads/").unwrap_or(reference);
        opened_pulls
            .iter()
            .filter(|pull| pull.base.reference == branch)
            .map(|pull| pull.number)
            .collect()
    }

    async fn pulls_from_check<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        check: &SlimCheck,
        opened_pulls: &[GhPullRequest],
    ) -> Result<Vec<u64>> {
        // The referenced list may contain pull requests opened from another
        // fork: only keep the ones whose base lives in the queried
        // repository.
        let base_repo_url = format!(
            "{}/repos/{}/{}",
            ctx.config.api.github.root_url, owner, repo_name
        );
        let pulls = check
            .pull_requests
            .iter()
            .filter(|pull| pull.base.repo.url == base_repo_url)
            .map(|pull| pull.number)
            .collect::<Vec<_>>();

        if !pulls.is_empty() {
            return Ok(pulls);
        }

        let resolve_pulls_from_sha: &dyn ResolvePullsFromShaInterface =
            ctx.core_module.resolve_ref();
        resolve_pulls_from_sha
            .run(ctx, owner, repo_name, &check.head_sha, opened_pulls)
            .await
    }
}

#[async_trait]
impl ExtractPullNumbersInterface for ExtractPullNumbers {
    #[tracing::instrument(skip_all, fields(
        owner = owner,
        repo_name = repo_name,
        event_type = %event_type
    ))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        event_type: GhEventType,
        slim_event: &SlimEvent,
        opened_pulls: &[GhPullRequest],
    ) -> Result<Vec<u64>> {
        match event_type {
            GhEventType::Refresh => match &slim_event.reference {
                None => Ok(opened_pulls.iter().map(|pull| pull.number).collect()),
                Some(reference) => Ok(Self::pulls_on_branch(opened_pulls, reference)),
            },
            GhEventType::Push => match &slim_event.reference {
                Some(reference) => Ok(Self::pulls_on_branch(opened_pulls, reference)),
                None => Ok(vec![]),
            },
            GhEventType::Status => match &slim_event.sha {
                Some(sha) => {
                    let resolve_pulls_from_sha: &dyn ResolvePullsFromShaInterface =
                        ctx.core_module.resolve_ref();
                    resolve_pulls_from_sha
                        .run(ctx, owner, repo_name, sha, opened_pulls)
                        .await
                }
                None => Ok(vec![]),
            },
            GhEventType::CheckSuite => match &slim_event.check_suite {
                Some(check) => {
                    self.pulls_from_check(ctx, owner, repo_name, check, opened_pulls)
                        .await
                }
                None => Ok(vec![]),
            },
            GhEventType::CheckRun => match &slim_event.check_run {
                Some(check) => {
                    self.pulls_from_check(ctx, owner, repo_name, check, opened_pulls)
                        .await
                }
                None => Ok(vec![]),
            },
            _ => Ok(vec![]),
        }
    }
}
