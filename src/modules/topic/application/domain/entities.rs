use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::{UserDetails, UserId},
    shared::ownership::Owned,
};

pub const MAX_NAME_LEN: usize = 100;

/// Top level of the forum hierarchy. `url_name` is derived from `name`
/// once, at creation, and addresses the topic in every nested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: Uuid,
    pub url_name: String,
    pub name: String,
    pub author: UserDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Topic {
    fn owner_id(&self) -> UserId {
        self.author.user_id()
    }
}
