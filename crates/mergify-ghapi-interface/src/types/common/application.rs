use serde::{Deserialize, Serialize};

/// GitHub Application.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Default, Clone)]
pub struct GhApplication {
    /// App ID.
    pub id: u64,
    /// Slug name.
    pub slug: String,
    /// Name.
    pub name: String,
}
