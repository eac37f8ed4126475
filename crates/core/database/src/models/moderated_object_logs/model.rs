use agora_models::v0::ModeratedObjectStatus;
use agora_result::Result;
use iso8601_timestamp::Timestamp;

use crate::{Database, ModeratedObject, User};

auto_derived!(
    /// Record of a verdict given on a moderation case
    pub struct ModeratedObjectLog {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the moderation case
        pub moderated_object_id: String,
        /// Id of the moderator who gave the verdict
        pub actor_id: String,
        /// Status before the verdict
        pub previous_status: ModeratedObjectStatus,
        /// Status after the verdict
        pub status: ModeratedObjectStatus,
        /// When the verdict was given
        pub created_at: Timestamp,
    }
);

impl ModeratedObjectLog {
    /// Record the current status of a case as a verdict by the given user
    pub async fn create(
        db: &Database,
        object: &ModeratedObject,
        actor: &User,
        previous_status: ModeratedObjectStatus,
    ) -> Result<ModeratedObjectLog> {
        let log = ModeratedObjectLog {
            id: ulid::Ulid::new().to_string(),
            moderated_object_id: object.id.to_string(),
            actor_id: actor.id.to_string(),
            previous_status,
            status: object.status,
            created_at: Timestamp::now_utc(),
        };

        db.insert_moderated_object_log(&log).await?;
        Ok(log)
    }
}
