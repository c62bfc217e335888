use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{rules::{RulesError, UserConfiguration}, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetRepositoryConfigInterface: Interface {
    /// Fetch and validate the repository configuration file.
    ///
    /// A missing file surfaces as [`RulesError::NoRules`], anything invalid
    /// in it as [`RulesError::InvalidRules`]; neither is ever silently
    /// defaulted.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        reference: Option<&'a str>,
    ) -> Result<UserConfiguration>;
}

#[derive(Component)]
#[shaku(interface = GetRepositoryConfigInterface)]
pub(crate) struct GetRepositoryConfig;

#[async_trait]
impl GetRepositoryConfigInterface for GetRepositoryConfig {
    #[tracing::instrument(skip_all, fields(owner = owner, repo_name = repo_name))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        repo_name: &str,
        reference: Option<&'a str>,
    ) -> Result<UserConfiguration> {
        let content = ctx
            .api_service
            .contents_get(owner, repo_name, &ctx.config.configuration_path, reference)
            .await?
            .ok_or(RulesError::NoRules)?;

        Ok(UserConfiguration::from_yaml(&content)?)
    }
}
