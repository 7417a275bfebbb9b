use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a user account. Ownership checks compare these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read-only public profile of a user, as embedded in topic responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetails {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl UserDetails {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.id)
    }
}

/// The authenticated caller of a request, resolved from its API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    details: UserDetails,
}

impl Principal {
    pub fn new(details: UserDetails) -> Self {
        Self { details }
    }

    pub fn id(&self) -> UserId {
        self.details.user_id()
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }
}
