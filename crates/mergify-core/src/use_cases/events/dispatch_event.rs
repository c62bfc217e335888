use async_trait::async_trait;
use mergify_ghapi_interface::types::{
    GhCheckRunAction, GhCheckRunEvent, GhCheckSuiteAction, GhCheckSuiteEvent, GhEvent,
    GhEventType, GhIssueCommentAction, GhIssueCommentEvent, GhMemberEvent, GhMembershipEvent,
    GhOrganizationEvent, GhPullRequestAction, GhPullRequestEvent, GhPushEvent, GhRepository,
    GhTeamAddEvent, GhTeamEvent,
};
use shaku::{Component, HasComponent, Interface};
use tracing::{debug, error, info};

use super::slim_event::SlimEvent;
use crate::{
    bot_commands::CommandParser,
    metrics::meter_event,
    use_cases::{
        permissions::ClearPermissionCacheInterface, summary::CreateInitialSummaryInterface,
    },
    CoreContext, DomainError, Result,
};

/// Marker set in `external_id` on check runs created on behalf of users.
/// Those are re-evaluated even though they belong to the bot's own app.
pub const USER_CREATED_CHECKS: &str = "user-created-checks";

/// Signal describing an event the bot will never act on.
///
/// Not an error: the caller logs it, answers the delivery and must not
/// retry. The reason strings are externally observable and stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEvent {
    /// Event type name.
    pub event_type: String,
    /// Delivery identifier.
    pub event_id: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Terminal outcome of event classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDecision {
    /// The event was pushed to the work queue.
    Dispatched {
        /// Owner login.
        owner: String,
        /// Repository name.
        repo_name: String,
        /// Affected pull request, when directly known.
        pull_number: Option<u64>,
    },
    /// The event needs no automation decision.
    Ignored(IgnoredEvent),
}

enum Classification {
    Dispatch {
        owner: String,
        repo_name: String,
        pull_number: Option<u64>,
    },
    Ignore {
        owner: String,
        repo_name: Option<String>,
        reason: String,
    },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DispatchEventInterface: Interface {
    /// Decide whether an event is relevant and push it to the work queue.
    ///
    /// The queue push is the durability boundary: its failure propagates so
    /// the webhook receiver can signal the delivery as failed. Side effects
    /// along the way (initial summary, command parse, permission cache
    /// invalidation) never make an event fail on their own, except the
    /// cache invalidations which are not best-effort.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event_id: &str,
        event: &GhEvent,
    ) -> Result<EventDecision>;
}

#[derive(Component)]
#[shaku(interface = DispatchEventInterface)]
pub(crate) struct DispatchEvent;

#[async_trait]
impl DispatchEventInterface for DispatchEvent {
    #[tracing::instrument(skip_all, fields(
        event_type = event.event_type_name(),
        event_id = event_id
    ))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event_id: &str,
        event: &GhEvent,
    ) -> Result<EventDecision> {
        meter_event(event);

        match self.classify(ctx, event).await? {
            Classification::Dispatch {
                owner,
                repo_name,
                pull_number,
            } => {
                let slim_event = SlimEvent::from_event(event);
                ctx.queue_service
                    .push(
                        &owner,
                        &repo_name,
                        pull_number,
                        event.event_type_name(),
                        serde_json::to_value(&slim_event)?,
                    )
                    .await?;

                info!(
                    sender = %event.sender().login,
                    gh_owner = %owner,
                    gh_repo = %repo_name,
                    message = "Event pushed to worker",
                );
                Ok(EventDecision::Dispatched {
                    owner,
                    repo_name,
                    pull_number,
                })
            }
            Classification::Ignore {
                owner,
                repo_name,
                reason,
            } => {
                info!(
                    sender = %event.sender().login,
                    gh_owner = %owner,
                    gh_repo = ?repo_name,
                    reason = %reason,
                    message = "Event ignored",
                );
                Ok(EventDecision::Ignored(IgnoredEvent {
                    event_type: event.event_type_name().into(),
                    event_id: event_id.into(),
                    reason,
                }))
            }
        }
    }
}

impl DispatchEvent {
    async fn classify<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhEvent,
    ) -> Result<Classification> {
        match event {
            GhEvent::PullRequest(event) => self.classify_pull_request(ctx, event).await,
            GhEvent::Refresh(event) => Ok(Classification::Dispatch {
                owner: event.repository.owner.login.clone(),
                repo_name: event.repository.name.clone(),
                pull_number: event.pull_request.as_ref().map(|pull| pull.number),
            }),
            GhEvent::PullRequestReviewComment(event) => Ok(Self::dispatch_unless_archived(
                &event.repository,
                Some(event.pull_request.number),
            )),
            GhEvent::PullRequestReview(event) => Ok(Classification::Dispatch {
                owner: event.repository.owner.login.clone(),
                repo_name: event.repository.name.clone(),
                pull_number: Some(event.pull_request.number),
            }),
            GhEvent::IssueComment(event) => Ok(self.classify_issue_comment(ctx, event)),
            GhEvent::Status(event) => {
                Ok(Self::dispatch_unless_archived(&event.repository, None))
            }
            GhEvent::Push(event) => Ok(Self::classify_push(event)),
            GhEvent::CheckSuite(event) => Ok(Self::classify_check_suite(event)),
            GhEvent::CheckRun(event) => Ok(self.classify_check_run(ctx, event)),
            GhEvent::Organization(event) => self.classify_organization(ctx, event).await,
            GhEvent::Member(event) => self.classify_member(ctx, event).await,
            GhEvent::Membership(event) => self.classify_membership(ctx, event).await,
            GhEvent::Team(event) => self.classify_team(ctx, event).await,
            GhEvent::TeamAdd(event) => self.classify_team_add(ctx, event).await,
            GhEvent::Unknown { .. } => Ok(Classification::Ignore {
                owner: "<unknown>".into(),
                repo_name: Some("<unknown>".into()),
                reason: "unexpected event_type".into(),
            }),
        }
    }

    fn dispatch_unless_archived(
        repository: &GhRepository,
        pull_number: Option<u64>,
    ) -> Classification {
        let owner = repository.owner.login.clone();
        let repo_name = repository.name.clone();

        if repository.archived {
            Classification::Ignore {
                owner,
                repo_name: Some(repo_name),
                reason: "repository archived".into(),
            }
        } else {
            Classification::Dispatch {
                owner,
                repo_name,
                pull_number,
            }
        }
    }

    async fn classify_pull_request<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhPullRequestEvent,
    ) -> Result<Classification> {
        let classification =
            Self::dispatch_unless_archived(&event.repository, Some(event.pull_request.number));

        if matches!(classification, Classification::Dispatch { .. })
            && matches!(
                event.action,
                GhPullRequestAction::Opened | GhPullRequestAction::Synchronize
            )
        {
            let create_initial_summary: &dyn CreateInitialSummaryInterface =
                ctx.core_module.resolve_ref();
            if let Err(error) = create_initial_summary.run(ctx, event).await {
                log_on_exception(&error, "Failed to create initial summary");
            }
        }

        Ok(classification)
    }

    fn classify_issue_comment(
        &self,
        ctx: &CoreContext<'_>,
        event: &GhIssueCommentEvent,
    ) -> Classification {
        let owner = event.repository.owner.login.clone();
        let repo_name = event.repository.name.clone();
        let pull_number = Some(event.issue.number);

        if event.repository.archived {
            return Classification::Ignore {
                owner,
                repo_name: Some(repo_name),
                reason: "repository archived".into(),
            };
        }

        if event.action != GhIssueCommentAction::Created {
            return Classification::Ignore {
                owner,
                repo_name: Some(repo_name),
                reason: format!("comment has been {}", event.action),
            };
        }

        if !CommandParser::mentions_bot(ctx.config, &event.comment.body) {
            return Classification::Ignore {
                owner,
                repo_name: Some(repo_name),
                reason: "comment is not for Mergify".into(),
            };
        }

        // Nothing durable may happen in this hook: the comment is not
        // persisted, so a lost command is never retried.
        for command in CommandParser::parse_commands(ctx.config, &event.comment.body) {
            match command {
                Ok(command) => info!(command = ?command, message = "Command received"),
                Err(error) => debug!(error = %error, message = "Ignoring unparseable command"),
            }
        }

        Classification::Dispatch {
            owner,
            repo_name,
            pull_number,
        }
    }

    fn classify_push(event: &GhPushEvent) -> Classification {
        let classification = Self::dispatch_unless_archived(&event.repository, None);

        if matches!(classification, Classification::Dispatch { .. })
            && !event.reference.starts_with("refs/heads/")
        {
            return Classification::Ignore {
                owner: event.repository.owner.login.clone(),
                repo_name: Some(event.repository.name.clone()),
                reason: format!("push on {}", event.reference),
            };
        }

        classification
    }

    fn classify_check_suite(event: &GhCheckSuiteEvent) -> Classification {
        let classification = Self::dispatch_unless_archived(&event.repository, None);

        if matches!(classification, Classification::Dispatch { .. })
            && event.action != GhCheckSuiteAction::Rerequested
        {
            return Classification::Ignore {
                owner: event.repository.owner.login.clone(),
                repo_name: Some(event.repository.name.clone()),
                reason: format!("check_suite/{}", event.action),
            };
        }

        classification
    }

    fn classify_check_run(
        &self,
        ctx: &CoreContext<'_>,
        event: &GhCheckRunEvent,
    ) -> Classification {
        let classification = Self::dispatch_unless_archived(&event.repository, None);

        let own_integration = event.check_run.app.id == ctx.config.api.github.app_id;
        if matches!(classification, Classification::Dispatch { .. })
            && own_integration
            && event.action != GhCheckRunAction::Rerequested
            && event.check_run.external_id.as_deref() != Some(USER_CREATED_CHECKS)
        {
            return Classification::Ignore {
                owner: event.repository.owner.login.clone(),
                repo_name: Some(event.repository.name.clone()),
                reason: format!("mergify {}", GhEventType::CheckRun),
            };
        }

        classification
    }

    async fn classify_organization<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhOrganizationEvent,
    ) -> Result<Classification> {
        let owner = event.organization.login.clone();

        if matches!(
            event.action.as_str(),
            "deleted" | "member_added" | "member_removed"
        ) {
            let clear_permission_cache: &dyn ClearPermissionCacheInterface =
                ctx.core_module.resolve_ref();
            clear_permission_cache.run_for_org(ctx, &owner).await?;
        }

        Ok(Classification::Ignore {
            owner,
            repo_name: None,
            reason: "organization event".into(),
        })
    }

    async fn classify_member<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhMemberEvent,
    ) -> Result<Classification> {
        let owner = event.repository.owner.login.clone();
        let repo_name = event.repository.name.clone();

        let clear_permission_cache: &dyn ClearPermissionCacheInterface =
            ctx.core_module.resolve_ref();
        clear_permission_cache
            .run_for_user(ctx, &owner, &repo_name, &event.member.login)
            .await?;

        Ok(Classification::Ignore {
            owner,
            repo_name: Some(repo_name),
            reason: "member event".into(),
        })
    }

    async fn classify_membership<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhMembershipEvent,
    ) -> Result<Classification> {
        let owner = event.organization.login.clone();

        let clear_permission_cache: &dyn ClearPermissionCacheInterface =
            ctx.core_module.resolve_ref();
        clear_permission_cache.run_for_org(ctx, &owner).await?;

        Ok(Classification::Ignore {
            owner,
            repo_name: None,
            reason: "membership event".into(),
        })
    }

    async fn classify_team<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhTeamEvent,
    ) -> Result<Classification> {
        let owner = event.organization.login.clone();

        if matches!(
            event.action.as_str(),
            "edited" | "added_to_repository" | "removed_from_repository"
        ) {
            let clear_permission_cache: &dyn ClearPermissionCacheInterface =
                ctx.core_module.resolve_ref();
            match &event.repository {
                Some(repository) => {
                    clear_permission_cache
                        .run_for_repo(ctx, &owner, &repository.name)
                        .await?
                }
                None => clear_permission_cache.run_for_org(ctx, &owner).await?,
            }
        }

        Ok(Classification::Ignore {
            owner,
            repo_name: None,
            reason: "team event".into(),
        })
    }

    async fn classify_team_add<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &GhTeamAddEvent,
    ) -> Result<Classification> {
        let owner = event.repository.owner.login.clone();
        let repo_name = event.repository.name.clone();

        let clear_permission_cache: &dyn ClearPermissionCacheInterface =
            ctx.core_module.resolve_ref();
        clear_permission_cache
            .run_for_repo(ctx, &owner, &repo_name)
            .await?;

        Ok(Classification::Ignore {
            owner,
            repo_name: Some(repo_name),
            reason: "team_add event".into(),
        })
    }
}

/// Best-effort call sites log expected failures quietly and everything else
/// loudly; nothing is retried from this layer.
fn log_on_exception(error: &DomainError, message: &str) {
    match error {
        DomainError::ApiError { source } if source.is_transient() => {
            debug!(error = %source, message = message)
        }
        _ => error!(error = %error, message = message),
    }
}
