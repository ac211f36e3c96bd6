use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Login.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
}
