use crate::modules::user::domain::entities::User;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Resolves the actor behind the current request.
///
/// Returns `Ok(None)` when no user can be determined; callers that require
/// an actor treat that as an invalid-state condition.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_current_user(&self) -> AppResult<Option<User>>;
}
