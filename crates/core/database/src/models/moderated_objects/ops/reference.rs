use agora_models::v0::ModeratedObjectType;
use agora_result::Result;

use crate::ReferenceDb;
use crate::{ModeratedObject, ModeratedObjectQuery, PartialModeratedObject};

use super::AbstractModeratedObjects;

#[async_trait]
impl AbstractModeratedObjects for ReferenceDb {
    /// Insert a new moderation case into the database
    async fn insert_moderated_object(&self, object: &ModeratedObject) -> Result<()> {
        let mut objects = self.moderated_objects.lock().await;
        if objects.contains_key(&object.id) {
            Err(create_database_error!("insert", "moderated_object"))
        } else if objects.values().any(|existing| {
            existing.object_type == object.object_type && existing.object_id == object.object_id
        }) {
            Err(create_error!(Conflict))
        } else {
            objects.insert(object.id.to_string(), object.clone());
            Ok(())
        }
    }

    /// Fetch a moderation case by its id
    async fn fetch_moderated_object(&self, id: &str) -> Result<ModeratedObject> {
        let objects = self.moderated_objects.lock().await;
        objects
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch the moderation case of an object, if one was opened
    async fn fetch_moderated_object_by_object(
        &self,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<Option<ModeratedObject>> {
        let objects = self.moderated_objects.lock().await;
        Ok(objects
            .values()
            .find(|object| object.object_type == object_type && object.object_id == object_id)
            .cloned())
    }

    /// Update a moderation case with new information
    async fn update_moderated_object(
        &self,
        id: &str,
        partial: &PartialModeratedObject,
    ) -> Result<()> {
        let mut objects = self.moderated_objects.lock().await;
        if let Some(object) = objects.get_mut(id) {
            object.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Fetch moderation cases matching a query, newest first
    async fn fetch_moderated_objects(
        &self,
        query: &ModeratedObjectQuery,
    ) -> Result<Vec<ModeratedObject>> {
        let objects = self.moderated_objects.lock().await;
        let mut matching: Vec<ModeratedObject> = objects
            .values()
            .filter(|object| query.matches(object))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.id.cmp(&a.id));
        matching.truncate(query.limit.max(0) as usize);
        Ok(matching)
    }
}
