use async_trait::async_trait;
use mergify_ghapi_interface::types::GhPullRequestEvent;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

const SUMMARY_NAME: &str = "Summary";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreateInitialSummaryInterface: Interface {
    /// Post the initial summary check on a freshly pushed head commit.
    ///
    /// Best-effort: the caller logs failures and moves on, the worker will
    /// recreate the summary when it evaluates the pull request.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &GhPullRequestEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = CreateInitialSummaryInterface)]
pub(crate) struct CreateInitialSummary;

#[async_trait]
impl CreateInitialSummaryInterface for CreateInitialSummary {
    #[tracing::instrument(skip_all, fields(
        repo_owner = event.repository.owner.login,
        repo_name = event.repository.name,
        pr_number = event.pull_request.number,
        head_sha = event.pull_request.head.sha
    ))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &GhPullRequestEvent) -> Result<()> {
        ctx.api_service
            .check_runs_create(
                &event.repository.owner.login,
                &event.repository.name,
                &event.pull_request.head.sha,
                SUMMARY_NAME,
                "Mergify is computing the rules matching this pull request.",
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mergify_ghapi_interface::types::{
        GhBranch, GhPullRequest, GhPullRequestEvent, GhRepository, GhUser,
    };

    use super::{CreateInitialSummary, CreateInitialSummaryInterface};
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn posts_a_check_run_on_the_head_commit() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_check_runs_create()
            .withf(|owner, name, head_sha, title, _summary| {
                owner == "me" && name == "test" && head_sha == "abc123" && title == "Summary"
            })
            .returning(|_, _, _, _, _| Ok(()))
            .once();

        CreateInitialSummary
            .run(
                &ctx.as_context(),
                &GhPullRequestEvent {
                    repository: GhRepository {
                        name: "test".into(),
                        full_name: "me/test".into(),
                        owner: GhUser { login: "me".into() },
                        ..Default::default()
                    },
                    pull_request: GhPullRequest {
                        number: 1,
                        head: GhBranch {
                            sha: "abc123".into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}
