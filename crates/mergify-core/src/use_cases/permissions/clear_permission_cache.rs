use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ClearPermissionCacheInterface: Interface {
    /// Drop every cached permission below an organization.
    async fn run_for_org<'a>(&self, ctx: &CoreContext<'a>, org: &str) -> Result<()>;
    /// Drop every cached permission below a repository.
    async fn run_for_repo<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org: &str,
        repo_name: &str,
    ) -> Result<()>;
    /// Drop the cached permission of a single user on a repository.
    async fn run_for_user<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org: &str,
        repo_name: &str,
        username: &str,
    ) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ClearPermissionCacheInterface)]
pub(crate) struct ClearPermissionCache;

#[async_trait]
impl ClearPermissionCacheInterface for ClearPermissionCache {
    #[tracing::instrument(skip_all, fields(org = org))]
    async fn run_for_org<'a>(&self, ctx: &CoreContext<'a>, org: &str) -> Result<()> {
        ctx.cache_service
            .del_prefixed(&format!("permissions~{org}~"))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(org = org, repo_name = repo_name))]
    async fn run_for_repo<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org: &str,
        repo_name: &str,
    ) -> Result<()> {
        ctx.cache_service
            .del_prefixed(&format!("permissions~{org}~{repo_name}~"))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(org = org, repo_name = repo_name, username = username))]
    async fn run_for_user<'a>(
        &self,
        ctx: &CoreContext<'a>,
        org: &str,
        repo_name: &str,
        username: &str,
    ) -> Result<()> {
        ctx.cache_service
            .del_value(&format!("permissions~{org}~{repo_name}~{username}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mergify_cache_interface::CacheService;
    use pretty_assertions::assert_eq;

    use super::{ClearPermissionCache, ClearPermissionCacheInterface};
    use crate::context::tests::CoreContextTest;

    async fn seeded_context() -> CoreContextTest {
        let ctx = CoreContextTest::new();
        for key in [
            "permissions~org~repo~alice",
            "permissions~org~repo~bob",
            "permissions~org~other~alice",
            "permissions~elsewhere~repo~alice",
        ] {
            ctx.cache_service
                .set_value(key, "write", Duration::from_secs(3600))
                .await
                .unwrap();
        }
        ctx
    }

    async fn remaining(ctx: &CoreContextTest) -> Vec<&'static str> {
        let mut keys = vec![];
        for key in [
            "permissions~org~repo~alice",
            "permissions~org~repo~bob",
            "permissions~org~other~alice",
            "permissions~elsewhere~repo~alice",
        ] {
            if ctx.cache_service.get_value(key).await.unwrap().is_some() {
                keys.push(key);
            }
        }
        keys
    }

    #[tokio::test]
    async fn clear_for_user() {
        let ctx = seeded_context().await;

        ClearPermissionCache
            .run_for_user(&ctx.as_context(), "org", "repo", "alice")
            .await
            .unwrap();

        assert_eq!(
            remaining(&ctx).await,
            vec![
                "permissions~org~repo~bob",
                "permissions~org~other~alice",
                "permissions~elsewhere~repo~alice"
            ]
        );
    }

    #[tokio::test]
    async fn clear_for_repo() {
        let ctx = seeded_context().await;

        ClearPermissionCache
            .run_for_repo(&ctx.as_context(), "org", "repo")
            .await
            .unwrap();

        assert_eq!(
            remaining(&ctx).await,
            vec![
                "permissions~org~other~alice",
                "permissions~elsewhere~repo~alice"
            ]
        );
    }

    #[tokio::test]
    async fn clear_for_org() {
        let ctx = seeded_context().await;

        ClearPermissionCache
            .run_for_org(&ctx.as_context(), "org")
            .await
            .unwrap();

        assert_eq!(remaining(&ctx).await, vec!["permissions~elsewhere~repo~alice"]);
    }
}
