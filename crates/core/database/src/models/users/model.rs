use agora_result::Result;

use crate::Database;

auto_derived_partial!(
    /// # User
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Username
        pub username: String,

        /// Whether this user may moderate every community
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub global_moderator: bool,
        /// Whether this user has been suspended by a moderation verdict
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub suspended: bool,
    },
    "PartialUser"
);

impl User {
    /// Create a new user
    pub async fn create(db: &Database, username: String) -> Result<User> {
        let user = User {
            id: ulid::Ulid::new().to_string(),
            username,
            global_moderator: false,
            suspended: false,
        };

        db.insert_user(&user).await?;
        Ok(user)
    }

    /// Update user data
    pub async fn update(&mut self, db: &Database, partial: PartialUser) -> Result<()> {
        self.apply_options(partial.clone());
        db.update_user(&self.id, &partial).await
    }
}
