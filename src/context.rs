use serde::{Deserialize, Serialize};

/// Explicit session scope for user-owned data.
///
/// Constructed by the authentication collaborator at login and dropped at
/// logout; every user-scoped operation takes it as a parameter instead of
/// reading ambient session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub user_id: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        SessionContext {
            user_id: user_id.into(),
        }
    }
}
