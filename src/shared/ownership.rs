use crate::auth::application::domain::entities::UserId;

/// A resource with a single author who alone may modify it.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Only the author may modify this resource")]
pub struct NotOwner;

/// Allows the mutation iff `principal` authored `resource`.
/// Reads never go through this check.
pub fn ensure_owner<R>(principal: UserId, resource: &R) -> Result<(), NotOwner>
where
    R: Owned + ?Sized,
{
    if resource.owner_id() == principal {
        Ok(())
    } else {
        Err(NotOwner)
    }
}
