use agora_result::Result;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::Database;

auto_derived!(
    /// Session authenticating a user
    pub struct Session {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Secret token sent in the `x-session-token` header
        pub token: String,
        /// Id of the user this session belongs to
        pub user_id: String,
    }
);

impl Session {
    /// Create a new session for the given user
    pub async fn create(db: &Database, user_id: &str) -> Result<Session> {
        let session = Session {
            id: ulid::Ulid::new().to_string(),
            token: rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(64)
                .map(char::from)
                .collect(),
            user_id: user_id.to_string(),
        };

        db.insert_session(&session).await?;
        Ok(session)
    }
}
