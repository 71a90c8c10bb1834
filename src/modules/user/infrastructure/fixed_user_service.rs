use async_trait::async_trait;

use crate::modules::user::domain::{User, UserService};
use crate::shared::errors::AppResult;

/// User service that always answers with one configured actor.
///
/// Stands in for the session subsystem in single-user deployments and in
/// integration tests.
pub struct FixedUserService {
    user: Option<User>,
}

impl FixedUserService {
    pub fn new(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// A service with no resolvable actor.
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl UserService for FixedUserService {
    async fn get_current_user(&self) -> AppResult<Option<User>> {
        Ok(self.user.clone())
    }
}
