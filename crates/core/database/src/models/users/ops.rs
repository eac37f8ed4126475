use agora_result::Result;

use crate::{PartialUser, User};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User>;

    /// Update a user with new information
    async fn update_user(&self, id: &str, partial: &PartialUser) -> Result<()>;
}
