use serde::{Deserialize, Serialize};

use crate::types::{
    common::{GhRepository, GhUser},
    orgs::GhOrganization,
};

/// GitHub Organization event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhOrganizationEvent {
    /// Action.
    pub action: String,
    /// Organization.
    pub organization: GhOrganization,
    /// Sender.
    pub sender: GhUser,
}

/// GitHub Member event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhMemberEvent {
    /// Action.
    pub action: String,
    /// Member.
    pub member: GhUser,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}

/// GitHub Membership event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhMembershipEvent {
    /// Action.
    pub action: String,
    /// Organization.
    pub organization: GhOrganization,
    /// Sender.
    pub sender: GhUser,
}

/// GitHub Team event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhTeamEvent {
    /// Action.
    pub action: String,
    /// Organization.
    pub organization: GhOrganization,
    /// Repository, present when the team change targets a single repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: GhUser,
}

/// GitHub Team add event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhTeamAddEvent {
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
