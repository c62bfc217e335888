use async_trait::async_trait;
use mergify_ghapi_interface::types::{
    GhEvent, GhPullRequest, GhRefreshAction, GhRefreshEvent, GhRepository, GhUser,
};
use shaku::{Component, HasComponent, Interface};
use uuid::Uuid;

use super::dispatch_event::{DispatchEventInterface, EventDecision};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SendRefreshInterface: Interface {
    /// Synthesize a refresh event for a pull request and run it through the
    /// regular dispatch path, so the worker re-evaluates it on demand.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository: &GhRepository,
        pull: &GhPullRequest,
        action: GhRefreshAction,
    ) -> Result<EventDecision>;
}

#[derive(Component)]
#[shaku(interface = SendRefreshInterface)]
pub(crate) struct SendRefresh;

#[async_trait]
impl SendRefreshInterface for SendRefresh {
    #[tracing::instrument(skip_all, fields(
        repo_owner = repository.owner.login,
        repo_name = repository.name,
        pr_number = pull.number,
        action = %action
    ))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository: &GhRepository,
        pull: &GhPullRequest,
        action: GhRefreshAction,
    ) -> Result<EventDecision> {
        let event = GhEvent::Refresh(GhRefreshEvent {
            action,
            reference: None,
            repository: repository.clone(),
            pull_request: Some(pull.clone()),
            sender: GhUser {
                login: "<internal>".into(),
            },
        });

        let dispatch_event: &dyn DispatchEventInterface = ctx.core_module.resolve_ref();
        dispatch_event
            .run(ctx, &Uuid::new_v4().to_string(), &event)
            .await
    }
}
