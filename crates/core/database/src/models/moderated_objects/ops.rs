use agora_models::v0::ModeratedObjectType;
use agora_result::Result;

use crate::{ModeratedObject, ModeratedObjectQuery, PartialModeratedObject};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractModeratedObjects: Sync + Send {
    /// Insert a new moderation case into the database
    ///
    /// Fails with `Conflict` if a case already exists for the same object.
    async fn insert_moderated_object(&self, object: &ModeratedObject) -> Result<()>;

    /// Fetch a moderation case by its id
    async fn fetch_moderated_object(&self, id: &str) -> Result<ModeratedObject>;

    /// Fetch the moderation case of an object, if one was opened
    async fn fetch_moderated_object_by_object(
        &self,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<Option<ModeratedObject>>;

    /// Update a moderation case with new information
    async fn update_moderated_object(
        &self,
        id: &str,
        partial: &PartialModeratedObject,
    ) -> Result<()>;

    /// Fetch moderation cases matching a query, newest first
    async fn fetch_moderated_objects(
        &self,
        query: &ModeratedObjectQuery,
    ) -> Result<Vec<ModeratedObject>>;
}
