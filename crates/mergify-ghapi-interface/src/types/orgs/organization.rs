use serde::{Deserialize, Serialize};

/// GitHub Organization.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhOrganization {
    /// Login.
    pub login: String,
}
