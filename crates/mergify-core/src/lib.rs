//! Decision core.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod bot_commands;
mod context;
pub mod errors;
mod metrics;
pub mod rules;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    config::get_repository_config::GetRepositoryConfig,
    events::{
        dispatch_event::DispatchEvent, extract_pull_numbers::ExtractPullNumbers,
        resolve_pulls_from_sha::ResolvePullsFromSha, send_refresh::SendRefresh,
    },
    permissions::clear_permission_cache::ClearPermissionCache,
    summary::create_initial_summary::CreateInitialSummary,
};

module! {
    pub CoreModule {
        components = [
            ClearPermissionCache, CreateInitialSummary, DispatchEvent,
            ExtractPullNumbers, GetRepositoryConfig, ResolvePullsFromSha,
            SendRefresh
        ],
        providers = []
    }
}
