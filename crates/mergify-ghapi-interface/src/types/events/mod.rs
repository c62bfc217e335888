mod event;
mod event_type;
mod push_event;
mod refresh_event;
mod status_event;
mod team_events;

pub use event::{GhEvent, GhEventError, GhUnknownEvent};
pub use event_type::{GhEventType, GhEventTypeError};
pub use push_event::GhPushEvent;
pub use refresh_event::{GhRefreshAction, GhRefreshEvent};
pub use status_event::GhStatusEvent;
pub use team_events::{
    GhMemberEvent, GhMembershipEvent, GhOrganizationEvent, GhTeamAddEvent, GhTeamEvent,
};
